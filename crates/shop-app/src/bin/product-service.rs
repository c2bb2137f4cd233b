use shop_hex::application::product_service::ProductService;
use shop_hex::config::Config;
use shop_hex::inbound::http::{HttpServerConfig, ProductHttpServer};
use shop_repo::InMemoryProductRepo;
use shop_types::domain::product::CreateProductRequest;
use shop_types::ports::product_repository::ProductRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env("8082")?;
    let service = ProductService::new(InMemoryProductRepo::new());
    seed_demo_catalog(&service).await?;

    let server = ProductHttpServer::new(
        service,
        HttpServerConfig {
            port: config.server_port.clone(),
        },
    )
    .await?;
    server.run().await
}

/// Stocks the catalog with a handful of demo products so the service is
/// usable straight after startup.
async fn seed_demo_catalog<R: ProductRepository>(
    service: &ProductService<R>,
) -> anyhow::Result<()> {
    let demo: [(&str, &str, &str, f64, u32, &str); 5] = [
        (
            "MacBook Pro 16\"",
            "Apple MacBook Pro with M3 chip",
            "Electronics",
            2499.99,
            10,
            "https://example.com/macbook.jpg",
        ),
        (
            "iPhone 15 Pro",
            "Latest iPhone with titanium design",
            "Electronics",
            999.99,
            25,
            "https://example.com/iphone.jpg",
        ),
        (
            "Nike Air Max",
            "Comfortable running shoes",
            "Footwear",
            129.99,
            50,
            "https://example.com/nike.jpg",
        ),
        (
            "Coffee Maker",
            "Automatic drip coffee maker",
            "Appliances",
            89.99,
            15,
            "https://example.com/coffee.jpg",
        ),
        (
            "Wireless Headphones",
            "Noise-cancelling Bluetooth headphones",
            "Electronics",
            199.99,
            30,
            "https://example.com/headphones.jpg",
        ),
    ];

    for (name, description, category, price, stock, image_url) in demo {
        service
            .create_product(CreateProductRequest {
                name: name.into(),
                description: description.into(),
                price,
                category: category.into(),
                stock,
                image_url: Some(image_url.into()),
            })
            .await
            .map_err(|e| anyhow::anyhow!("failed to seed catalog: {e}"))?;
    }
    tracing::info!("seeded demo catalog with {} products", demo.len());
    Ok(())
}
