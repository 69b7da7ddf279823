//! HTTP-level tests for the list, product, waitlist and auth endpoints.
//!
//! Builds the real app around seeded in-memory stores; no server is started.
//!
//! Run with: `cargo test --test api_test`
use actix_web::{App, http::StatusCode, test};
use serde_json::{Value, json};

use dashboard_api::AppState;
use dashboard_api::db::{Repository, seed};

/// Field names of a 400 body, sorted.
fn error_fields(body: &Value) -> Vec<&str> {
    let mut fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    fields.sort();
    fields
}

macro_rules! app {
    ($state:expr) => {{
        let state = $state.clone();
        test::init_service(App::new().configure(move |cfg| state.configure(cfg))).await
    }};
}

#[actix_web::test]
async fn test_products_default_page() {
    let app = app!(AppState::seeded());

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], seed::PRODUCT_COUNT as u64);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["totalPages"], 4);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
}

#[actix_web::test]
async fn test_products_out_of_range_page() {
    let app = app!(AppState::seeded());

    let req = test::TestRequest::get().uri("/api/products?page=5&limit=10").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"], json!([]));
    assert_eq!(body["total"], 40);
    assert_eq!(body["totalPages"], 4);
}

#[actix_web::test]
async fn test_malformed_query_falls_back_to_defaults() {
    let app = app!(AppState::seeded());

    let req = test::TestRequest::get()
        .uri("/api/users?page=-1&limit=abc&sortOrder=up&sortBy=nope&filters%5Bbogus%5D=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["total"], seed::USER_COUNT as u64);
}

#[actix_web::test]
async fn test_products_search_and_filters() {
    let app = app!(AppState::seeded());

    let req = test::TestRequest::get()
        .uri("/api/products?search=WIRELESS&limit=100")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let data = body["data"].as_array().unwrap();
    assert!(!data.is_empty());
    assert!(data.iter().all(|p| {
        p["name"].as_str().unwrap().to_lowercase().contains("wireless")
            || p["category"].as_str().unwrap().to_lowercase().contains("wireless")
            || p["description"].as_str().is_some_and(|d| d.to_lowercase().contains("wireless"))
    }));

    let req = test::TestRequest::get()
        .uri("/api/products?limit=100&filters%5Bstatus%5D=active&filters%5BminPrice%5D=50&sortBy=price&sortOrder=asc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let prices: Vec<f64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            assert_eq!(p["status"], "active");
            p["price"].as_f64().unwrap()
        })
        .collect();
    assert!(!prices.is_empty());
    assert!(prices.iter().all(|p| *p >= 50.0));
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[actix_web::test]
async fn test_orders_filter_by_payment_method() {
    let app = app!(AppState::seeded());

    let req = test::TestRequest::get()
        .uri("/api/orders?limit=100&filters%5Bpayment_method%5D=bank_transfer")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], (seed::ORDER_COUNT / 3) as u64);
    assert!(
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|o| o["payment_method"] == "bank_transfer")
    );
}

#[actix_web::test]
async fn test_product_crud_cycle() {
    let state = AppState::seeded();
    let app = app!(state);

    // Create
    let req = test::TestRequest::post()
        .uri("/api/products/create")
        .set_json(json!({
            "name": "Test Widget",
            "description": "Made in a test",
            "price": 12.5,
            "stock": 4,
            "category": "Electronics",
            "status": "active",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["success"], true);
    let id = created["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(state.products.list().len(), seed::PRODUCT_COUNT + 1);

    // New products come first in storage order.
    assert_eq!(state.products.list()[0].id, id);

    // Read
    let req = test::TestRequest::get().uri(&format!("/api/products/{id}")).to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["name"], "Test Widget");

    // Update
    let req = test::TestRequest::put()
        .uri(&format!("/api/products/{id}"))
        .set_json(json!({
            "name": "Renamed Widget",
            "price": 15.0,
            "stock": 0,
            "category": "Electronics",
            "status": "inactive",
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["data"]["name"], "Renamed Widget");
    assert_eq!(updated["data"]["status"], "inactive");
    assert_eq!(updated["data"]["created_at"], created["data"]["created_at"]);

    // Delete
    let req = test::TestRequest::delete().uri(&format!("/api/products/{id}")).to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted["data"]["id"], id.as_str());
    assert_eq!(state.products.list().len(), seed::PRODUCT_COUNT);

    let req = test::TestRequest::get().uri(&format!("/api/products/{id}")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_create_product_validation_errors() {
    let app = app!(AppState::empty());

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "name": "",
            "price": -3.0,
            "stock": 1,
            "category": "Toys",
            "status": "active",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation error");
    assert_eq!(error_fields(&body), vec!["name", "price"]);
    assert_eq!(body["errors"][0]["message"], "Name is required");
}

#[actix_web::test]
async fn test_unparseable_product_body_is_a_json_validation_error() {
    let app = app!(AppState::empty());

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "name": "Lamp",
            "price": 10.0,
            "stock": 1,
            "category": "Home",
            "status": "bogus",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation error");
    assert_eq!(error_fields(&body), vec!["body"]);
    assert!(body["errors"][0]["message"].as_str().unwrap().contains("bogus"));

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({ "price": 10.0, "stock": 1, "category": "Home", "status": "active" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_fields(&body), vec!["name"]);
}

#[actix_web::test]
async fn test_missing_product_returns_not_found() {
    let app = app!(AppState::empty());

    for req in [
        test::TestRequest::delete().uri("/api/products/nope").to_request(),
        test::TestRequest::put()
            .uri("/api/products/nope")
            .set_json(json!({
                "name": "x",
                "price": 1.0,
                "stock": 1,
                "category": "y",
                "status": "active",
            }))
            .to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Product nope not found");
    }
}

#[actix_web::test]
async fn test_empty_store_lists_one_empty_page() {
    let app = app!(AppState::empty());

    let req = test::TestRequest::get().uri("/api/orders").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"data": [], "total": 0, "page": 1, "limit": 10, "totalPages": 1}));
}

#[actix_web::test]
async fn test_health() {
    let app = app!(AppState::empty());
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
}

// ── Waitlist ──

#[actix_web::test]
async fn test_waitlist_signup_then_duplicate() {
    let state = AppState::empty();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/waitlist")
        .set_json(json!({ "email": "early@example.com", "plan": "v1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "early@example.com");
    assert!(body["message"].is_string());
    assert_eq!(state.waitlist.list().len(), 1);

    let req = test::TestRequest::post()
        .uri("/api/waitlist")
        .set_json(json!({ "email": "Early@Example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_fields(&body), vec!["email"]);
    assert_eq!(state.waitlist.list().len(), 1);
}

#[actix_web::test]
async fn test_waitlist_rejects_bad_email_and_plan() {
    let app = app!(AppState::empty());

    let req = test::TestRequest::post()
        .uri("/api/waitlist")
        .set_json(json!({ "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"], json!([{ "field": "email", "message": "Invalid email address" }]));

    let req = test::TestRequest::post()
        .uri("/api/waitlist")
        .set_json(json!({ "email": "ok@example.com", "plan": "enterprise" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── Auth ──

#[actix_web::test]
async fn test_register_validation_and_conflict() {
    let state = AppState::empty();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "email": "bad", "password": "alllowercase1", "name": "X" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_fields(&body), vec!["email", "name", "password"]);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "email": "demo@example.com", "password": "Password123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email already exists");
    assert_eq!(
        body["errors"],
        json!([{ "field": "email", "message": "This email is already registered" }])
    );

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "email": "fresh@example.com", "password": "Password123", "name": "Fresh" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["verificationRequired"], true);
    assert_eq!(state.accounts.list().len(), 3);
}

#[actix_web::test]
async fn test_login_outcomes() {
    let app = app!(AppState::empty());

    let login = |email: &str, password: &str| {
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": email, "password": password }))
            .to_request()
    };

    let resp = test::call_service(&app, login("demo@example.com", "Password123")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "demo@example.com");
    assert!(body["user"].get("password").is_none());
    assert!(!body["token"].as_str().unwrap().is_empty());

    let resp = test::call_service(&app, login("demo@example.com", "WrongPass1")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid credentials");
    assert_eq!(error_fields(&body), vec!["email"]);

    let resp = test::call_service(&app, login("nobody@example.com", "Password123")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(&app, login("test@example.com", "Test1234")).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["errors"],
        json!([{ "field": "email", "message": "Please verify your email address" }])
    );

    let resp = test::call_service(&app, login("demo@example.com", "short")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
