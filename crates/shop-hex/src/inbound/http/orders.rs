use std::str::FromStr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};

use crate::application::order_service::OrderService;
use crate::errors::AppError;
use shop_types::domain::order::{
    CreateOrderRequest, Order, OrderStatus, UpdateOrderStatusRequest,
};
use shop_types::domain::response::ApiResponse;
use shop_types::ports::order_repository::OrderRepository;
use shop_types::ports::validation::OrderValidation;

use super::{serve, HttpServerConfig};

pub struct OrderHttpServer<R, V>
where
    R: OrderRepository,
    V: OrderValidation,
{
    service: Arc<OrderService<R, V>>,
    config: HttpServerConfig,
}

impl<R, V> OrderHttpServer<R, V>
where
    R: OrderRepository,
    V: OrderValidation,
{
    pub async fn new(
        service: OrderService<R, V>,
        config: HttpServerConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            service: Arc::new(service),
            config,
        })
    }

    pub fn router(service: Arc<OrderService<R, V>>) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/orders", post(create_order::<R, V>))
            .route("/orders", get(list_orders::<R, V>))
            .route("/orders/{id}", get(get_order::<R, V>))
            .route("/orders/user/{user_id}", get(get_user_orders::<R, V>))
            .route("/orders/{id}/status", patch(update_status::<R, V>))
            .with_state(service)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        serve(Self::router(self.service), &self.config.port).await
    }
}

async fn health() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::ok_with_message(
        "Order service is healthy",
        serde_json::json!({ "service": "order-service", "status": "UP" }),
    ))
}

async fn create_order<R, V>(
    State(service): State<Arc<OrderService<R, V>>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Order>>), AppError>
where
    R: OrderRepository,
    V: OrderValidation,
{
    let Json(req) = payload.map_err(|_| AppError::BadRequest("Invalid JSON payload".into()))?;
    let order = service.create_order(req.user_id, req.items).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "Order created successfully",
            order,
        )),
    ))
}

async fn get_order<R, V>(
    State(service): State<Arc<OrderService<R, V>>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Order>>, AppError>
where
    R: OrderRepository,
    V: OrderValidation,
{
    let order = service.get_order(&id).await?;
    Ok(Json(ApiResponse::ok(order)))
}

async fn get_user_orders<R, V>(
    State(service): State<Arc<OrderService<R, V>>>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Order>>>, AppError>
where
    R: OrderRepository,
    V: OrderValidation,
{
    let orders = service.get_user_orders(&user_id).await?;
    Ok(Json(ApiResponse::ok(orders)))
}

async fn list_orders<R, V>(
    State(service): State<Arc<OrderService<R, V>>>,
) -> Result<Json<ApiResponse<Vec<Order>>>, AppError>
where
    R: OrderRepository,
    V: OrderValidation,
{
    let orders = service.list_orders().await?;
    Ok(Json(ApiResponse::ok(orders)))
}

async fn update_status<R, V>(
    State(service): State<Arc<OrderService<R, V>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateOrderStatusRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Order>>, AppError>
where
    R: OrderRepository,
    V: OrderValidation,
{
    let Json(req) = payload.map_err(|_| AppError::BadRequest("Invalid JSON payload".into()))?;
    // Allow-list check happens before the store is consulted; an unknown
    // status never reaches the repository.
    let status = OrderStatus::from_str(&req.status)
        .map_err(|_| AppError::BadRequest("Invalid order status".into()))?;
    let order = service.update_status(&id, status).await?;
    Ok(Json(ApiResponse::ok_with_message(
        "Order status updated successfully",
        order,
    )))
}
