use shop_client::ServiceClient;
use shop_hex::application::order_service::OrderService;
use shop_hex::config::Config;
use shop_hex::inbound::http::{HttpServerConfig, OrderHttpServer};
use shop_repo::InMemoryOrderRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env("8083")?;
    let validator = ServiceClient::new(&config.user_service_url, &config.product_service_url)?;
    let service = OrderService::new(InMemoryOrderRepo::new(), validator);

    tracing::info!(
        user_service = %config.user_service_url,
        product_service = %config.product_service_url,
        "validating orders against sibling services"
    );

    let server = OrderHttpServer::new(
        service,
        HttpServerConfig {
            port: config.server_port.clone(),
        },
    )
    .await?;
    server.run().await
}
