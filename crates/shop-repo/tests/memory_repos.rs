use shop_repo::{InMemoryOrderRepo, InMemoryProductRepo, InMemoryUserRepo};
use shop_types::domain::order::{Order, OrderItem, OrderStatus};
use shop_types::domain::product::{Product, ProductFilter};
use shop_types::domain::user::User;
use shop_types::ports::order_repository::OrderRepository;
use shop_types::ports::product_repository::ProductRepository;
use shop_types::ports::user_repository::UserRepository;
use shop_types::ports::RepoError;

fn sample_order(user_id: &str) -> Order {
    Order::new(
        user_id.into(),
        vec![OrderItem::new("p1".into(), "Widget".into(), 5.0, 2)],
    )
}

#[tokio::test]
async fn order_repo_crud_flow() {
    let repo = InMemoryOrderRepo::new();
    let order = sample_order("u1");

    let created = repo.create(order.clone()).await.unwrap();
    assert_eq!(created.id, order.id);

    let fetched = repo.get(&order.id).await.unwrap().unwrap();
    assert_eq!(fetched, order);

    let mut changed = fetched.clone();
    changed.update_status(OrderStatus::Confirmed);
    let updated = repo.update(changed.clone()).await.unwrap().unwrap();
    assert_eq!(updated.status, OrderStatus::Confirmed);
    assert_eq!(
        repo.get(&order.id).await.unwrap().unwrap().status,
        OrderStatus::Confirmed
    );

    assert!(repo.delete(&order.id).await.unwrap());
    assert!(repo.get(&order.id).await.unwrap().is_none());
}

#[tokio::test]
async fn order_repo_handles_missing_rows() {
    let repo = InMemoryOrderRepo::new();
    assert!(repo.get("nope").await.unwrap().is_none());
    assert!(repo
        .update(sample_order("u1"))
        .await
        .unwrap()
        .is_none());
    assert!(!repo.delete("nope").await.unwrap());
    assert!(repo.get_by_user("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn order_repo_returns_defensive_copies() {
    let repo = InMemoryOrderRepo::new();
    let order = repo.create(sample_order("u1")).await.unwrap();

    let mut fetched = repo.get(&order.id).await.unwrap().unwrap();
    fetched.status = OrderStatus::Delivered;
    fetched.total_price = 0.0;

    let stored = repo.get(&order.id).await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Pending);
    assert_eq!(stored.total_price, order.total_price);
}

#[tokio::test]
async fn order_repo_scopes_and_sorts_user_listings() {
    let repo = InMemoryOrderRepo::new();
    for user in ["u1", "u2", "u1", "u1"] {
        repo.create(sample_order(user)).await.unwrap();
    }

    let mine = repo.get_by_user("u1").await.unwrap();
    assert_eq!(mine.len(), 3);
    assert!(mine.iter().all(|o| o.user_id == "u1"));
    assert!(mine.windows(2).all(|w| {
        (w[0].created_at, &w[0].id) <= (w[1].created_at, &w[1].id)
    }));

    let all = repo.list().await.unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|w| {
        (w[0].created_at, &w[0].id) <= (w[1].created_at, &w[1].id)
    }));
}

// Concurrent creates must never collide on an id or lose a write.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn order_repo_concurrent_creates_are_all_retained() {
    let repo = InMemoryOrderRepo::new();
    let mut handles = Vec::new();
    for i in 0..32 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            let order = sample_order(&format!("u{}", i % 5));
            repo.create(order).await.unwrap().id
        }));
    }

    let mut ids = std::collections::HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()));
    }
    assert_eq!(ids.len(), 32);
    assert_eq!(repo.list().await.unwrap().len(), 32);
}

#[tokio::test]
async fn user_repo_enforces_unique_email() {
    let repo = InMemoryUserRepo::new();
    let alice = repo
        .create(User::new("Alice".into(), "alice@example.com".into()))
        .await
        .unwrap();

    let dup = repo
        .create(User::new("Impostor".into(), "alice@example.com".into()))
        .await;
    assert!(matches!(dup, Err(RepoError::Duplicate(_))));

    // The original is untouched and still retrievable.
    let fetched = repo.get(&alice.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Alice");
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn user_repo_crud_flow() {
    let repo = InMemoryUserRepo::new();
    let mut user = repo
        .create(User::new("Bob".into(), "bob@example.com".into()))
        .await
        .unwrap();

    user.name = "Robert".into();
    let updated = repo.update(user.clone()).await.unwrap().unwrap();
    assert_eq!(updated.name, "Robert");

    assert!(repo.delete(&user.id).await.unwrap());
    assert!(repo.get(&user.id).await.unwrap().is_none());
    assert!(repo.update(user).await.unwrap().is_none());
}

fn catalog_product(name: &str, category: &str, price: f64, stock: u32) -> Product {
    Product::new(
        name.into(),
        format!("{name} description"),
        category.into(),
        price,
        stock,
        None,
    )
}

#[tokio::test]
async fn product_repo_rejects_duplicate_names_case_insensitively() {
    let repo = InMemoryProductRepo::new();
    repo.create(catalog_product("Widget", "Tools", 5.0, 3))
        .await
        .unwrap();

    let dup = repo.create(catalog_product("WIDGET", "Tools", 9.0, 1)).await;
    assert!(matches!(dup, Err(RepoError::Duplicate(_))));
    assert_eq!(
        repo.list(&ProductFilter::default()).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn product_repo_filters_listings() {
    let repo = InMemoryProductRepo::new();
    repo.create(catalog_product("Cheap Tool", "Tools", 4.0, 2))
        .await
        .unwrap();
    repo.create(catalog_product("Fancy Tool", "Tools", 40.0, 0))
        .await
        .unwrap();
    repo.create(catalog_product("Snack", "Food", 2.0, 10))
        .await
        .unwrap();

    let tools = repo
        .list(&ProductFilter::by_category("tools"))
        .await
        .unwrap();
    assert_eq!(tools.len(), 2);

    let in_stock_tools = repo
        .list(&ProductFilter {
            category: Some("Tools".into()),
            in_stock: true,
            ..ProductFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(in_stock_tools.len(), 1);
    assert_eq!(in_stock_tools[0].name, "Cheap Tool");

    let mid_priced = repo
        .list(&ProductFilter {
            min_price: Some(3.0),
            max_price: Some(10.0),
            ..ProductFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(mid_priced.len(), 1);
    assert_eq!(mid_priced[0].name, "Cheap Tool");
}

#[tokio::test]
async fn product_repo_sets_absolute_stock() {
    let repo = InMemoryProductRepo::new();
    let product = repo
        .create(catalog_product("Widget", "Tools", 5.0, 3))
        .await
        .unwrap();

    let updated = repo.update_stock(&product.id, 0).await.unwrap().unwrap();
    assert_eq!(updated.stock, 0);
    assert!(updated.updated_at >= product.updated_at);

    assert!(repo.update_stock("missing", 5).await.unwrap().is_none());
}
