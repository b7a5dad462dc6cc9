//! GraphQL API integration tests
//!
//! Every test gets its own in-memory store.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use menuql_server::{build_router, build_schema, Database, MenuSchema, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn test_schema() -> MenuSchema {
    build_schema(Database::in_memory().await.expect("in-memory database"))
}

/// Execute a document and return the full response envelope as JSON
async fn execute(schema: &MenuSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    serde_json::to_value(&response).expect("response serializes")
}

fn error_code(response: &Value) -> Option<&str> {
    response["errors"][0]["extensions"]["code"].as_str()
}

async fn add_menu_item(schema: &MenuSchema, name: &str, price: i32, rating: i32) -> Value {
    let query = format!(
        r#"mutation {{ addMenuItem(params: {{ name: "{name}", price: {price}, rating: {rating} }}) {{ id name price rating }} }}"#
    );
    let response = execute(schema, &query).await;
    assert!(response.get("errors").is_none(), "unexpected errors: {response}");
    response["data"]["addMenuItem"].clone()
}

#[tokio::test]
async fn pizza_create_then_delete_scenario() {
    let schema = test_schema().await;

    let created = add_menu_item(&schema, "Pizza", 10, 5).await;
    assert_eq!(
        created,
        json!({ "id": "1", "name": "Pizza", "price": 10, "rating": 5 })
    );

    let response = execute(
        &schema,
        r#"mutation { deleteMenuItem(id: 1) { id name price rating } }"#,
    )
    .await;
    assert_eq!(response["data"]["deleteMenuItem"], created);

    let response = execute(&schema, "{ menuItems { id } }").await;
    assert_eq!(response["data"]["menuItems"], json!([]));
}

#[tokio::test]
async fn add_menu_item_assigns_unique_ids() {
    let schema = test_schema().await;

    let first = add_menu_item(&schema, "Soup", 4, 3).await;
    let second = add_menu_item(&schema, "Soup", 4, 3).await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(second["name"], "Soup");
}

#[tokio::test]
async fn add_menu_item_allows_missing_optional_fields() {
    let schema = test_schema().await;

    let response = execute(
        &schema,
        r#"mutation { addMenuItem(params: { name: "Water" }) { name price rating } }"#,
    )
    .await;

    assert_eq!(
        response["data"]["addMenuItem"],
        json!({ "name": "Water", "price": null, "rating": null })
    );
}

#[tokio::test]
async fn missing_required_input_field_is_rejected_before_resolving() {
    let schema = test_schema().await;

    let response = execute(
        &schema,
        r#"mutation { addMenuItem(params: { price: 3 }) { id } }"#,
    )
    .await;
    assert!(response["errors"].is_array());

    let response = execute(&schema, "{ menuItems { id } }").await;
    assert_eq!(response["data"]["menuItems"], json!([]));
}

#[tokio::test]
async fn missing_params_argument_is_bad_request() {
    let schema = test_schema().await;

    let response = execute(&schema, "mutation { addMenuItem { id } }").await;
    assert_eq!(error_code(&response), Some("BAD_REQUEST"));
}

#[tokio::test]
async fn menu_item_by_id() {
    let schema = test_schema().await;
    let created = add_menu_item(&schema, "Tacos", 7, 4).await;

    let query = format!(
        r#"{{ menuItem(id: "{}") {{ id name price rating }} }}"#,
        created["id"].as_str().unwrap()
    );
    let response = execute(&schema, &query).await;
    assert_eq!(response["data"]["menuItem"], created);

    let response = execute(&schema, r#"{ menuItem(id: "999") { id } }"#).await;
    assert!(response.get("errors").is_none());
    assert_eq!(response["data"]["menuItem"], Value::Null);
}

#[tokio::test]
async fn menu_item_by_name_is_exact_and_first() {
    let schema = test_schema().await;
    let first = add_menu_item(&schema, "Burger", 8, 4).await;
    add_menu_item(&schema, "Burger", 9, 2).await;

    let response = execute(
        &schema,
        r#"{ menuItem(name: "Burger") { id name price rating } }"#,
    )
    .await;
    assert_eq!(response["data"]["menuItem"], first);

    let response = execute(&schema, r#"{ menuItem(name: "burger") { id } }"#).await;
    assert_eq!(response["data"]["menuItem"], Value::Null);
}

#[tokio::test]
async fn menu_item_without_arguments_is_bad_request() {
    let schema = test_schema().await;

    let response = execute(&schema, "{ menuItem { id } }").await;
    assert_eq!(error_code(&response), Some("BAD_REQUEST"));
    assert_eq!(response["data"]["menuItem"], Value::Null);
}

#[tokio::test]
async fn menu_item_with_malformed_id_is_bad_request() {
    let schema = test_schema().await;

    let response = execute(&schema, r#"{ menuItem(id: "pizza") { id } }"#).await;
    assert_eq!(error_code(&response), Some("BAD_REQUEST"));
}

#[tokio::test]
async fn reviews_appear_on_their_menu_item() {
    let schema = test_schema().await;
    let pizza = add_menu_item(&schema, "Pizza", 10, 5).await;
    add_menu_item(&schema, "Salad", 6, 3).await;

    let query = format!(
        r#"mutation {{ addReview(review: {{ comment: "Great crust", authorId: 42, menuItemId: "{}" }}) {{ id comment authorId }} }}"#,
        pizza["id"].as_str().unwrap()
    );
    let response = execute(&schema, &query).await;
    let review = response["data"]["addReview"].clone();
    assert_eq!(review["comment"], "Great crust");
    assert_eq!(review["authorId"], "42");

    let response = execute(
        &schema,
        "{ menuItems { name reviews { id comment authorId } } }",
    )
    .await;
    assert_eq!(
        response["data"]["menuItems"],
        json!([
            { "name": "Pizza", "reviews": [review] },
            { "name": "Salad", "reviews": [] }
        ])
    );

    // Single lookups load reviews on demand
    let response = execute(
        &schema,
        r#"{ menuItem(name: "Pizza") { reviews { comment } } }"#,
    )
    .await;
    assert_eq!(
        response["data"]["menuItem"]["reviews"],
        json!([{ "comment": "Great crust" }])
    );
}

#[tokio::test]
async fn review_for_missing_menu_item_is_accepted() {
    let schema = test_schema().await;

    let response = execute(
        &schema,
        r#"mutation { addReview(review: { comment: "Orphan", authorId: 1, menuItemId: 404 }) { id comment } }"#,
    )
    .await;

    assert!(response.get("errors").is_none(), "unexpected errors: {response}");
    assert_eq!(response["data"]["addReview"]["comment"], "Orphan");
}

#[tokio::test]
async fn review_requires_its_fields() {
    let schema = test_schema().await;

    let response = execute(
        &schema,
        r#"mutation { addReview(review: { comment: "No author", menuItemId: 1 }) { id } }"#,
    )
    .await;
    assert!(response["errors"].is_array());
}

#[tokio::test]
async fn deleting_twice_is_not_found() {
    let schema = test_schema().await;
    add_menu_item(&schema, "Pizza", 10, 5).await;

    let response = execute(&schema, r#"mutation { deleteMenuItem(id: 1) { id } }"#).await;
    assert_eq!(response["data"]["deleteMenuItem"]["id"], "1");

    let response = execute(&schema, r#"mutation { deleteMenuItem(id: 1) { id } }"#).await;
    assert_eq!(error_code(&response), Some("NOT_FOUND"));
    assert_eq!(response["errors"][0]["message"], "menu item '1' not found");
}

#[tokio::test]
async fn failed_mutation_nulls_only_its_own_field() {
    let schema = test_schema().await;

    let response = execute(
        &schema,
        r#"mutation {
            a: addMenuItem(params: { name: "Tea" }) { id }
            b: deleteMenuItem(id: 999) { id }
        }"#,
    )
    .await;

    assert_eq!(response["data"]["a"]["id"], "1");
    assert_eq!(response["data"]["b"], Value::Null);
    assert_eq!(error_code(&response), Some("NOT_FOUND"));
}

#[tokio::test]
async fn http_graphql_endpoint_round_trip() {
    let db = Database::in_memory().await.unwrap();
    let app = build_router(db, &ServerConfig::default());

    let body = json!({
        "query": "mutation Add($params: MenuItemInput) { addMenuItem(params: $params) { id name } }",
        "variables": { "params": { "name": "Ramen", "price": 12 } }
    });
    let request = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body["data"]["addMenuItem"],
        json!({ "id": "1", "name": "Ramen" })
    );
}

#[tokio::test]
async fn http_health_endpoint() {
    let db = Database::in_memory().await.unwrap();
    let app = build_router(db, &ServerConfig::default());

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn graphiql_page_can_be_disabled() {
    let db = Database::in_memory().await.unwrap();
    let config = ServerConfig {
        playground: false,
        ..ServerConfig::default()
    };
    let app = build_router(db, &config);

    let request = Request::builder().uri("/graphql").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
