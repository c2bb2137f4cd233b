use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::application::user_service::UserService;
use crate::errors::AppError;
use shop_types::domain::response::ApiResponse;
use shop_types::domain::user::{CreateUserRequest, User};
use shop_types::ports::user_repository::UserRepository;

use super::{serve, HttpServerConfig};

pub struct UserHttpServer<R: UserRepository> {
    service: Arc<UserService<R>>,
    config: HttpServerConfig,
}

impl<R: UserRepository> UserHttpServer<R> {
    pub async fn new(service: UserService<R>, config: HttpServerConfig) -> anyhow::Result<Self> {
        Ok(Self {
            service: Arc::new(service),
            config,
        })
    }

    pub fn router(service: Arc<UserService<R>>) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/users", post(create_user::<R>))
            .route("/users", get(list_users::<R>))
            .route("/users/{id}", get(get_user::<R>))
            .with_state(service)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        serve(Self::router(self.service), &self.config.port).await
    }
}

async fn health() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::ok_with_message(
        "User service is healthy",
        serde_json::json!({ "service": "user-service", "status": "UP" }),
    ))
}

async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), AppError> {
    let Json(req) = payload.map_err(|_| AppError::BadRequest("Invalid JSON payload".into()))?;
    let user = service.create_user(req.name, req.email).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "User created successfully",
            user,
        )),
    ))
}

async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = service.get_user(&id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let users = service.list_users().await?;
    Ok(Json(ApiResponse::ok(users)))
}
