use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: String,
    pub user_service_url: String,
    pub product_service_url: String,
}

impl Config {
    /// Reads configuration from the environment. Each binary passes its
    /// own port default (8081 user, 8082 product, 8083 order); the
    /// downstream URLs only matter to the order service.
    pub fn from_env(default_port: &str) -> anyhow::Result<Self> {
        let server_port = env::var("SERVER_PORT").unwrap_or_else(|_| default_port.into());
        let user_service_url =
            env::var("USER_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8081".into());
        let product_service_url =
            env::var("PRODUCT_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8082".into());
        Ok(Self {
            server_port,
            user_service_url,
            product_service_url,
        })
    }
}
