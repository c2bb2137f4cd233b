//! shop-client: outbound HTTP client the order service uses to validate
//! user and product references against the sibling services.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Url;
use shop_types::domain::order::{CreateOrderItem, OrderItem};
use shop_types::domain::product::Product;
use shop_types::domain::response::ApiResponse;
use shop_types::domain::user::User;
use shop_types::ports::validation::{OrderValidation, ValidationError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct ServiceClientBuilder {
    user_base: Url,
    product_base: Url,
    timeout: Duration,
    client: Option<reqwest::Client>,
}

/// HTTP client for the user and product services. One underlying reqwest
/// client, bounded per-call by a fixed timeout; a slow downstream fails
/// the calling request instead of hanging it.
#[derive(Clone)]
pub struct ServiceClient {
    user_base: Url,
    product_base: Url,
    http: reqwest::Client,
}

impl ServiceClient {
    pub fn new(user_base_url: &str, product_base_url: &str) -> anyhow::Result<Self> {
        Self::builder(user_base_url, product_base_url)?.build()
    }

    pub fn builder(
        user_base_url: &str,
        product_base_url: &str,
    ) -> anyhow::Result<ServiceClientBuilder> {
        let user_base = Url::parse(user_base_url).context("invalid user service url")?;
        let product_base = Url::parse(product_base_url).context("invalid product service url")?;
        Ok(ServiceClientBuilder {
            user_base,
            product_base,
            timeout: DEFAULT_TIMEOUT,
            client: None,
        })
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, ValidationError> {
        self.fetch(&self.user_base, "users", user_id, "user service")
            .await
    }

    pub async fn get_product(&self, product_id: &str) -> Result<Product, ValidationError> {
        self.fetch(&self.product_base, "products", product_id, "product service")
            .await
    }

    /// One GET against a sibling service, decoding the uniform envelope.
    /// Transport failures, non-2xx statuses, undecodable bodies and
    /// `success:false` envelopes all collapse into a `ValidationError`;
    /// callers cannot tell an outage from a missing entity.
    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        base: &Url,
        segment: &str,
        id: &str,
        service: &str,
    ) -> Result<T, ValidationError> {
        let url = base
            .join(&format!("{segment}/{id}"))
            .map_err(|e| ValidationError(format!("failed to call {service}: {e}")))?;

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ValidationError(format!("failed to call {service}: {e}")))?;

        if !resp.status().is_success() {
            return Err(ValidationError(format!(
                "{service} returned status {}",
                resp.status().as_u16()
            )));
        }

        let body: ApiResponse<T> = resp
            .json()
            .await
            .map_err(|e| ValidationError(format!("failed to decode {service} response: {e}")))?;

        if !body.success {
            return Err(ValidationError(format!(
                "{service} error: {}",
                body.error.unwrap_or_default()
            )));
        }

        body.data
            .ok_or_else(|| ValidationError(format!("{service} returned an empty payload")))
    }
}

#[async_trait]
impl OrderValidation for ServiceClient {
    async fn check_user_exists(&self, user_id: &str) -> Result<(), ValidationError> {
        self.get_user(user_id).await.map(|_| ())
    }

    async fn validate_order_items(
        &self,
        items: &[CreateOrderItem],
    ) -> Result<Vec<OrderItem>, ValidationError> {
        let mut order_items = Vec::with_capacity(items.len());

        for item in items {
            let product = self.get_product(&item.product_id).await.map_err(|e| {
                ValidationError(format!("invalid product {}: {e}", item.product_id))
            })?;

            if product.stock < item.quantity {
                return Err(ValidationError(format!(
                    "insufficient stock for product {}: available {}, requested {}",
                    product.name, product.stock, item.quantity
                )));
            }

            order_items.push(OrderItem::new(
                product.id,
                product.name,
                product.price,
                item.quantity,
            ));
        }

        Ok(order_items)
    }
}

impl ServiceClientBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> anyhow::Result<ServiceClient> {
        let http = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder().timeout(self.timeout).build()?,
        };
        Ok(ServiceClient {
            user_base: self.user_base,
            product_base: self.product_base,
            http,
        })
    }
}
