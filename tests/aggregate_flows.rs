//! Aggregate-mutation scenarios against a real PostgreSQL database.
//!
//! These tests need a disposable database:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/trattoria_test cargo test -- --ignored
//! ```
//!
//! Each test seeds its own rows and asserts through the service layer, so
//! they can run in any order against a shared schema.

use std::time::{SystemTime, UNIX_EPOCH};

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt;
use trattoria::config::DatabaseSettings;
use trattoria::db::{establish_async_connection_pool, run_pending_migrations};
use trattoria::dto::CreateOrUpdateMenu;
use trattoria::error::AppError;
use trattoria::models::{NewMenu, NewOrder, NewUser};
use trattoria::AppState;
use trattoria::repositories::UnitOfWork;
use trattoria::services::Services;

async fn setup() -> (Services, UnitOfWork) {
    let url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    run_pending_migrations(&url).await.expect("migrations should apply");

    let settings = DatabaseSettings {
        url,
        ..DatabaseSettings::default()
    };
    let pool = establish_async_connection_pool(&settings)
        .await
        .expect("pool should build");
    let state = AppState::new(pool.clone());
    (state.services, UnitOfWork::new(pool))
}

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be past the epoch")
        .as_nanos()
}

async fn seed_recipe(uow: &UnitOfWork) -> i32 {
    use trattoria::schema::{dishes_types, recipes};

    uow.run(move |conn| {
        async move {
            let type_id: i32 = diesel::insert_into(dishes_types::table)
                .values(dishes_types::name.eq("main course"))
                .returning(dishes_types::id)
                .get_result(conn)
                .await?;

            let recipe_id = diesel::insert_into(recipes::table)
                .values((
                    recipes::name.eq("carbonara"),
                    recipes::dishes_type_id.eq(type_id),
                ))
                .returning(recipes::id)
                .get_result(conn)
                .await?;

            Ok(recipe_id)
        }
        .scope_boxed()
    })
    .await
    .expect("recipe should seed")
}

async fn seed_menu(uow: &UnitOfWork, name: &str) -> i32 {
    let menus = uow.menus;
    let new_menu = NewMenu {
        name: name.to_string(),
        image_url: String::new(),
        price: BigDecimal::from(25),
    };

    uow.run(move |conn| async move { menus.add(conn, &new_menu).await }.scope_boxed())
        .await
        .expect("menu should seed")
        .id
}

async fn seed_order(uow: &UnitOfWork) -> i32 {
    let users = uow.users;
    let orders = uow.orders;
    let new_user = NewUser {
        email: format!("diner{}@example.com", unique_suffix()),
        first_name: "Test".to_string(),
        last_name: "Diner".to_string(),
        password: "secret-password".to_string(),
    };

    uow.run(move |conn| {
        async move {
            let user = users.add(conn, &new_user).await?;
            let order = orders.add(conn, &NewOrder { user_id: user.id }).await?;
            Ok(order.id)
        }
        .scope_boxed()
    })
    .await
    .expect("order should seed")
}

async fn menu_item_count(uow: &UnitOfWork, for_menu_id: i32) -> i64 {
    use trattoria::schema::menu_items;

    uow.run(move |conn| {
        async move {
            menu_items::table
                .filter(menu_items::menu_id.eq(for_menu_id))
                .count()
                .get_result(conn)
                .await
                .map_err(AppError::from)
        }
        .scope_boxed()
    })
    .await
    .expect("count should load")
}

#[tokio::test]
#[ignore = "requires a migrated PostgreSQL database via DATABASE_URL"]
async fn repeated_add_menu_item_creates_two_rows() {
    let (services, uow) = setup().await;
    let recipe_id = seed_recipe(&uow).await;
    let menu_id = seed_menu(&uow, "Lunch").await;

    assert!(services.menus.add_menu_item(menu_id, recipe_id).await.unwrap());
    assert!(services.menus.add_menu_item(menu_id, recipe_id).await.unwrap());

    let info = services.menus.get_menu_by_id(menu_id).await.unwrap().unwrap();
    assert_eq!(info.items.len(), 2);
    assert!(info.items.iter().all(|item| item.recipe_id == recipe_id));
    // Two distinct rows, not one accumulated one.
    assert_ne!(info.items[0].id, info.items[1].id);
}

#[tokio::test]
#[ignore = "requires a migrated PostgreSQL database via DATABASE_URL"]
async fn add_menu_item_with_missing_references_returns_false() {
    let (services, uow) = setup().await;
    let recipe_id = seed_recipe(&uow).await;
    let menu_id = seed_menu(&uow, "Dinner").await;

    assert!(!services.menus.add_menu_item(-1, recipe_id).await.unwrap());
    assert!(!services.menus.add_menu_item(menu_id, -1).await.unwrap());
    assert_eq!(menu_item_count(&uow, menu_id).await, 0);
}

#[tokio::test]
#[ignore = "requires a migrated PostgreSQL database via DATABASE_URL"]
async fn add_order_item_accumulates_quantity_on_one_row() {
    let (services, uow) = setup().await;
    let menu_id = seed_menu(&uow, "Pranzo").await;
    let order_id = seed_order(&uow).await;

    assert!(services.orders.add_order_item(order_id, menu_id).await.unwrap());
    let info = services.orders.get_by_id(order_id).await.unwrap().unwrap();
    assert_eq!(info.items.len(), 1);
    assert_eq!(info.items[0].quantity, 1);

    assert!(services.orders.add_order_item(order_id, menu_id).await.unwrap());
    let info = services.orders.get_by_id(order_id).await.unwrap().unwrap();
    assert_eq!(info.items.len(), 1, "a second add must not create a second row");
    assert_eq!(info.items[0].quantity, 2);
}

#[tokio::test]
#[ignore = "requires a migrated PostgreSQL database via DATABASE_URL"]
async fn delete_order_item_removes_the_row_outright() {
    let (services, uow) = setup().await;
    let menu_id = seed_menu(&uow, "Cena").await;
    let order_id = seed_order(&uow).await;

    services.orders.add_order_item(order_id, menu_id).await.unwrap();
    services.orders.add_order_item(order_id, menu_id).await.unwrap();

    assert!(services.orders.delete_order_item(order_id, menu_id).await.unwrap());
    let info = services.orders.get_by_id(order_id).await.unwrap().unwrap();
    assert!(info.items.is_empty(), "quantity 2 still deletes in one call");
}

#[tokio::test]
#[ignore = "requires a migrated PostgreSQL database via DATABASE_URL"]
async fn delete_order_item_without_matching_line_returns_false() {
    let (services, uow) = setup().await;
    let menu_in_order = seed_menu(&uow, "Primo").await;
    let other_menu = seed_menu(&uow, "Secondo").await;
    let order_id = seed_order(&uow).await;
    services.orders.add_order_item(order_id, menu_in_order).await.unwrap();

    assert!(!services.orders.delete_order_item(order_id, other_menu).await.unwrap());

    let info = services.orders.get_by_id(order_id).await.unwrap().unwrap();
    assert_eq!(info.items.len(), 1, "the existing line must stay untouched");
}

#[tokio::test]
#[ignore = "requires a migrated PostgreSQL database via DATABASE_URL"]
async fn delete_menu_item_without_matching_recipe_returns_false() {
    let (services, uow) = setup().await;
    let recipe_on_menu = seed_recipe(&uow).await;
    let other_recipe = seed_recipe(&uow).await;
    let menu_id = seed_menu(&uow, "Antipasti").await;
    services.menus.add_menu_item(menu_id, recipe_on_menu).await.unwrap();

    assert!(!services.menus.delete_menu_item(menu_id, other_recipe).await.unwrap());
    assert!(!services.menus.delete_menu_item(-1, recipe_on_menu).await.unwrap());

    assert_eq!(menu_item_count(&uow, menu_id).await, 1, "the existing item must stay untouched");
}

#[tokio::test]
#[ignore = "requires a migrated PostgreSQL database via DATABASE_URL"]
async fn delete_menu_item_removes_only_the_first_duplicate() {
    let (services, uow) = setup().await;
    let recipe_id = seed_recipe(&uow).await;
    let menu_id = seed_menu(&uow, "Contorni").await;

    services.menus.add_menu_item(menu_id, recipe_id).await.unwrap();
    services.menus.add_menu_item(menu_id, recipe_id).await.unwrap();
    let before = services.menus.get_menu_by_id(menu_id).await.unwrap().unwrap();

    assert!(services.menus.delete_menu_item(menu_id, recipe_id).await.unwrap());

    let info = services.menus.get_menu_by_id(menu_id).await.unwrap().unwrap();
    assert_eq!(info.items.len(), 1, "one delete removes one row, not both duplicates");
    // The earliest matching row goes; the later duplicate survives.
    assert_eq!(info.items[0].id, before.items[1].id);
}

#[tokio::test]
#[ignore = "requires a migrated PostgreSQL database via DATABASE_URL"]
async fn delete_menu_cascades_to_its_items() {
    let (services, uow) = setup().await;
    let recipe_id = seed_recipe(&uow).await;
    let menu_id = seed_menu(&uow, "Degustazione").await;
    services.menus.add_menu_item(menu_id, recipe_id).await.unwrap();

    assert!(services.menus.delete_menu(menu_id).await.unwrap());

    assert!(services.menus.get_menu_by_id(menu_id).await.unwrap().is_none());
    assert_eq!(menu_item_count(&uow, menu_id).await, 0);
}

#[tokio::test]
#[ignore = "requires a migrated PostgreSQL database via DATABASE_URL"]
async fn delete_menu_with_unknown_id_returns_false() {
    let (services, _uow) = setup().await;
    assert!(!services.menus.delete_menu(-1).await.unwrap());
}

#[tokio::test]
#[ignore = "requires a migrated PostgreSQL database via DATABASE_URL"]
async fn add_menu_rejects_absent_and_unmappable_payloads() {
    let (services, _uow) = setup().await;

    match services.menus.add_menu(None).await {
        Err(AppError::BadRequest { .. }) => {}
        other => panic!("expected BadRequest, got {other:?}"),
    }

    let unmappable = CreateOrUpdateMenu {
        name: String::new(),
        image_url: String::new(),
        price: BigDecimal::from(10),
    };
    assert!(!services.menus.add_menu(Some(unmappable)).await.unwrap());
}
