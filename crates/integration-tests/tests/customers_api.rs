//! End-to-end tests for the customer REST API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//!   (`cargo run -p patron-cli -- migrate`)
//! - The server running (`cargo run -p patron-server`)
//!
//! Run with: `cargo test -p patron-integration-tests -- --ignored`

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
fn base_url() -> String {
    std::env::var("PATRON_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A fresh email no earlier run can have claimed.
fn unique_email(tag: &str) -> String {
    format!("{tag}-{}@example.com", Uuid::new_v4())
}

/// Register a customer and return the response status.
async fn register(client: &Client, name: &str, age: i32, email: &str) -> StatusCode {
    client
        .post(format!("{}/api/v1/customers", base_url()))
        .json(&json!({"name": name, "age": age, "email": email}))
        .send()
        .await
        .expect("register request failed")
        .status()
}

/// Find a customer through the list endpoint by email.
///
/// The register endpoint deliberately does not return the generated id, so
/// tests re-query, the same way real callers have to.
async fn find_by_email(client: &Client, email: &str) -> Option<Value> {
    let all: Vec<Value> = client
        .get(format!("{}/api/v1/customers", base_url()))
        .send()
        .await
        .expect("list request failed")
        .json()
        .await
        .expect("list body was not JSON");

    all.into_iter().find(|c| c["email"] == email)
}

/// Register and return the stored customer's id.
async fn register_and_fetch_id(client: &Client, name: &str, age: i32, email: &str) -> i64 {
    assert_eq!(register(client, name, age, email).await, StatusCode::CREATED);
    find_by_email(client, email)
        .await
        .expect("registered customer should be listed")["id"]
        .as_i64()
        .expect("id should be a number")
}

async fn get_customer(client: &Client, id: i64) -> reqwest::Response {
    client
        .get(format!("{}/api/v1/customers/{id}", base_url()))
        .send()
        .await
        .expect("get request failed")
}

async fn put_update(client: &Client, id: i64, body: &Value) -> StatusCode {
    client
        .put(format!("{}/api/v1/customers/{id}", base_url()))
        .json(body)
        .send()
        .await
        .expect("update request failed")
        .status()
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_health_endpoints() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("health request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .expect("readiness request failed");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_register_then_lookup_round_trip() {
    let client = Client::new();
    let email = unique_email("roundtrip");

    let id = register_and_fetch_id(&client, "Nick Tschernikow", 20, &email).await;

    let resp = get_customer(&client, id).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let customer: Value = resp.json().await.expect("customer body was not JSON");
    assert_eq!(customer["id"], id);
    assert_eq!(customer["name"], "Nick Tschernikow");
    assert_eq!(customer["age"], 20);
    assert_eq!(customer["email"], email.as_str());
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_lookup_unknown_id_is_not_found() {
    let client = Client::new();

    let resp = get_customer(&client, 8_888_888_888).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_register_duplicate_email_conflicts() {
    let client = Client::new();
    let email = unique_email("duplicate");

    assert_eq!(
        register(&client, "First Holder", 30, &email).await,
        StatusCode::CREATED
    );
    assert_eq!(
        register(&client, "Second Claimant", 35, &email).await,
        StatusCode::CONFLICT
    );
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_register_invalid_email_is_rejected() {
    let client = Client::new();

    assert_eq!(
        register(&client, "No Address", 28, "not-an-email").await,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_update_with_identical_values_is_rejected() {
    let client = Client::new();
    let email = unique_email("noop");
    let id = register_and_fetch_id(&client, "Ada Lovelace", 36, &email).await;

    let status = put_update(
        &client,
        id,
        &json!({"name": "Ada Lovelace", "age": 36, "email": email}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let status = put_update(&client, id, &json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_update_single_field_keeps_others() {
    let client = Client::new();
    let email = unique_email("partial");
    let id = register_and_fetch_id(&client, "Grace Hopper", 41, &email).await;

    let status = put_update(&client, id, &json!({"age": 22})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let customer: Value = get_customer(&client, id)
        .await
        .json()
        .await
        .expect("customer body was not JSON");
    assert_eq!(customer["age"], 22);
    assert_eq!(customer["name"], "Grace Hopper");
    assert_eq!(customer["email"], email.as_str());
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_update_to_taken_email_conflicts() {
    let client = Client::new();
    let first_email = unique_email("target");
    let second_email = unique_email("holder");

    let first_id = register_and_fetch_id(&client, "Target Customer", 30, &first_email).await;
    let _ = register_and_fetch_id(&client, "Email Holder", 31, &second_email).await;

    let status = put_update(&client, first_id, &json!({"email": second_email})).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Target record is untouched
    let customer: Value = get_customer(&client, first_id)
        .await
        .json()
        .await
        .expect("customer body was not JSON");
    assert_eq!(customer["email"], first_email.as_str());
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_delete_then_lookup_is_not_found() {
    let client = Client::new();
    let email = unique_email("delete");
    let id = register_and_fetch_id(&client, "Short Stay", 50, &email).await;

    let status = client
        .delete(format!("{}/api/v1/customers/{id}", base_url()))
        .send()
        .await
        .expect("delete request failed")
        .status();
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert_eq!(get_customer(&client, id).await.status(), StatusCode::NOT_FOUND);

    // Deleting again surfaces NotFound from the service pre-check
    let status = client
        .delete(format!("{}/api/v1/customers/{id}", base_url()))
        .send()
        .await
        .expect("second delete request failed")
        .status();
    assert_eq!(status, StatusCode::NOT_FOUND);
}
