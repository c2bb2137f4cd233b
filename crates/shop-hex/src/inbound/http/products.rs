use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::application::product_service::ProductService;
use crate::errors::AppError;
use shop_types::domain::product::{
    CreateProductRequest, Product, ProductFilter, UpdateProductRequest,
};
use shop_types::domain::response::ApiResponse;
use shop_types::ports::product_repository::ProductRepository;

use super::{serve, HttpServerConfig};

pub struct ProductHttpServer<R: ProductRepository> {
    service: Arc<ProductService<R>>,
    config: HttpServerConfig,
}

impl<R: ProductRepository> ProductHttpServer<R> {
    pub async fn new(
        service: ProductService<R>,
        config: HttpServerConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            service: Arc::new(service),
            config,
        })
    }

    pub fn router(service: Arc<ProductService<R>>) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/products", post(create_product::<R>))
            .route("/products", get(list_products::<R>))
            .route("/products/{id}", get(get_product::<R>))
            .route("/products/{id}", put(update_product::<R>))
            .route("/products/category/{category}", get(products_by_category::<R>))
            .route("/products/{id}/stock", patch(update_stock::<R>))
            .with_state(service)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        serve(Self::router(self.service), &self.config.port).await
    }
}

#[derive(Deserialize)]
struct UpdateStockRequest {
    stock: u32,
}

async fn health() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::ok_with_message(
        "Product service is healthy",
        serde_json::json!({ "service": "product-service", "status": "UP" }),
    ))
}

async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), AppError> {
    let Json(req) = payload.map_err(|_| AppError::BadRequest("Invalid JSON payload".into()))?;
    let product = service.create_product(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "Product created successfully",
            product,
        )),
    ))
}

async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let product = service.get_product(&id).await?;
    Ok(Json(ApiResponse::ok(product)))
}

async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<ApiResponse<Vec<Product>>>, AppError> {
    let products = service.list_products(&filter).await?;
    Ok(Json(ApiResponse::ok(products)))
}

async fn products_by_category<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(category): Path<String>,
) -> Result<Json<ApiResponse<Vec<Product>>>, AppError> {
    let products = service.products_by_category(&category).await?;
    Ok(Json(ApiResponse::ok(products)))
}

async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let Json(req) = payload.map_err(|_| AppError::BadRequest("Invalid JSON payload".into()))?;
    let product = service.update_product(&id, req).await?;
    Ok(Json(ApiResponse::ok_with_message(
        "Product updated successfully",
        product,
    )))
}

async fn update_stock<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStockRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let Json(req) = payload.map_err(|_| AppError::BadRequest("Invalid JSON payload".into()))?;
    let product = service.update_stock(&id, req.stock).await?;
    Ok(Json(ApiResponse::ok_with_message(
        "Stock updated successfully",
        product,
    )))
}
