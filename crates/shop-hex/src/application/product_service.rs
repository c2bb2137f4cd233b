use chrono::Utc;

use crate::errors::AppError;
use shop_types::domain::product::{
    CreateProductRequest, Product, ProductFilter, UpdateProductRequest,
};
use shop_types::ports::product_repository::ProductRepository;

pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_product(&self, req: CreateProductRequest) -> Result<Product, AppError> {
        if req.name.trim().is_empty() || req.category.trim().is_empty() || req.price <= 0.0 {
            return Err(AppError::BadRequest(
                "Name, category, and positive price are required".into(),
            ));
        }
        let product = Product::new(
            req.name,
            req.description,
            req.category,
            req.price,
            req.stock,
            req.image_url,
        );
        Ok(self.repo.create(product).await?)
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, AppError> {
        match self.repo.get(id).await? {
            Some(product) => Ok(product),
            None => Err(AppError::NotFound("Product not found".into())),
        }
    }

    pub async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        Ok(self.repo.list(filter).await?)
    }

    pub async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, AppError> {
        Ok(self.repo.list(&ProductFilter::by_category(category)).await?)
    }

    /// Partial update; only the provided fields change.
    pub async fn update_product(
        &self,
        id: &str,
        req: UpdateProductRequest,
    ) -> Result<Product, AppError> {
        let mut product = match self.repo.get(id).await? {
            Some(product) => product,
            None => return Err(AppError::NotFound("Product not found".into())),
        };

        if let Some(name) = req.name {
            product.name = name;
        }
        if let Some(description) = req.description {
            product.description = description;
        }
        if let Some(price) = req.price {
            product.price = price;
        }
        if let Some(category) = req.category {
            product.category = category;
        }
        if let Some(stock) = req.stock {
            product.stock = stock;
        }
        if let Some(image_url) = req.image_url {
            product.image_url = Some(image_url);
        }
        product.updated_at = Utc::now();

        match self.repo.update(product).await? {
            Some(updated) => Ok(updated),
            None => Err(AppError::NotFound("Product not found".into())),
        }
    }

    pub async fn update_stock(&self, id: &str, stock: u32) -> Result<Product, AppError> {
        match self.repo.update_stock(id, stock).await? {
            Some(product) => Ok(product),
            None => Err(AppError::NotFound("Product not found".into())),
        }
    }
}
