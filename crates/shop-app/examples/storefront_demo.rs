///  To run :
///  cargo r -p shop-app --example storefront_demo
use shop_client::ServiceClient;
use shop_hex::application::order_service::OrderService;
use shop_hex::application::product_service::ProductService;
use shop_hex::application::user_service::UserService;
use shop_hex::inbound::http::{
    HttpServerConfig, OrderHttpServer, ProductHttpServer, UserHttpServer,
};
use shop_repo::{InMemoryOrderRepo, InMemoryProductRepo, InMemoryUserRepo};
use shop_types::domain::order::Order;
use shop_types::domain::product::Product;
use shop_types::domain::response::ApiResponse;
use shop_types::domain::user::User;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Boot all three services in-process on ephemeral ports.
    let user_port = find_free_port();
    let product_port = find_free_port();
    let order_port = find_free_port();

    let user_server = UserHttpServer::new(
        UserService::new(InMemoryUserRepo::new()),
        HttpServerConfig {
            port: user_port.to_string(),
        },
    )
    .await?;
    tokio::spawn(async move {
        user_server.run().await.expect("user server run");
    });

    let product_server = ProductHttpServer::new(
        ProductService::new(InMemoryProductRepo::new()),
        HttpServerConfig {
            port: product_port.to_string(),
        },
    )
    .await?;
    tokio::spawn(async move {
        product_server.run().await.expect("product server run");
    });

    let users_addr = format!("http://127.0.0.1:{user_port}");
    let products_addr = format!("http://127.0.0.1:{product_port}");
    let validator = ServiceClient::new(&users_addr, &products_addr)?;
    let order_server = OrderHttpServer::new(
        OrderService::new(InMemoryOrderRepo::new(), validator),
        HttpServerConfig {
            port: order_port.to_string(),
        },
    )
    .await?;
    tokio::spawn(async move {
        order_server.run().await.expect("order server run");
    });
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    let orders_addr = format!("http://127.0.0.1:{order_port}");
    let client = reqwest::Client::new();

    // Register a customer and a product.
    let alice: ApiResponse<User> = client
        .post(format!("{users_addr}/users"))
        .json(&serde_json::json!({ "name": "Alice", "email": "alice@example.com" }))
        .send()
        .await?
        .json()
        .await?;
    let alice = alice.data.expect("user payload");
    println!("Created user id={}", alice.id);

    let widget: ApiResponse<Product> = client
        .post(format!("{products_addr}/products"))
        .json(&serde_json::json!({
            "name": "Widget",
            "description": "A very good widget",
            "price": 10.0,
            "category": "Tools",
            "stock": 5,
        }))
        .send()
        .await?
        .json()
        .await?;
    let widget = widget.data.expect("product payload");
    println!("Created product id={} stock={}", widget.id, widget.stock);

    // Place an order and walk it through its lifecycle.
    let order: ApiResponse<Order> = client
        .post(format!("{orders_addr}/orders"))
        .json(&serde_json::json!({
            "user_id": alice.id,
            "items": [{ "product_id": widget.id, "quantity": 2 }],
        }))
        .send()
        .await?
        .json()
        .await?;
    let order = order.data.expect("order payload");
    println!(
        "Created order id={} total={} status={:?}",
        order.id, order.total_price, order.status
    );

    for status in ["confirmed", "shipped", "delivered"] {
        let updated: ApiResponse<Order> = client
            .patch(format!("{orders_addr}/orders/{}/status", order.id))
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await?
            .json()
            .await?;
        println!(
            "Updated status={:?}",
            updated.data.expect("order payload").status
        );
    }

    let mine: ApiResponse<Vec<Order>> = client
        .get(format!("{orders_addr}/orders/user/{}", alice.id))
        .send()
        .await?
        .json()
        .await?;
    println!(
        "User has {} order(s) on record",
        mine.data.expect("orders payload").len()
    );

    Ok(())
}
