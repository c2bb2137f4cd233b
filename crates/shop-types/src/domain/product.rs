use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        name: String,
        description: String,
        category: String,
        price: f64,
        stock: u32,
        image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            price,
            category,
            stock,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default)]
    pub in_stock: bool,
}

impl ProductFilter {
    pub fn by_category(category: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            ..Self::default()
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        if self.in_stock && !product.is_in_stock() {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::new(
            "Widget".into(),
            "A widget".into(),
            "Tools".into(),
            19.99,
            4,
            None,
        )
    }

    #[test]
    fn filter_matches_category_case_insensitively() {
        let p = widget();
        assert!(ProductFilter::by_category("tools").matches(&p));
        assert!(ProductFilter::by_category("TOOLS").matches(&p));
        assert!(!ProductFilter::by_category("Food").matches(&p));
    }

    #[test]
    fn filter_price_bounds_are_inclusive() {
        let p = widget();
        let filter = ProductFilter {
            min_price: Some(19.99),
            max_price: Some(19.99),
            ..ProductFilter::default()
        };
        assert!(filter.matches(&p));

        let too_low = ProductFilter {
            max_price: Some(10.0),
            ..ProductFilter::default()
        };
        assert!(!too_low.matches(&p));
    }

    #[test]
    fn filter_in_stock_excludes_empty_shelves() {
        let mut p = widget();
        let filter = ProductFilter {
            in_stock: true,
            ..ProductFilter::default()
        };
        assert!(filter.matches(&p));
        p.stock = 0;
        assert!(!filter.matches(&p));
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(ProductFilter::default().matches(&widget()));
    }
}
