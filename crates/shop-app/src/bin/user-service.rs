use shop_hex::application::user_service::UserService;
use shop_hex::config::Config;
use shop_hex::inbound::http::{HttpServerConfig, UserHttpServer};
use shop_repo::InMemoryUserRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env("8081")?;
    let service = UserService::new(InMemoryUserRepo::new());

    let server = UserHttpServer::new(
        service,
        HttpServerConfig {
            port: config.server_port.clone(),
        },
    )
    .await?;
    server.run().await
}
