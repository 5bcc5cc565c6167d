use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use remodel_storefront_api::{
    config::{AppConfig, PoolConfig},
    models::User,
    routes::create_app,
    services::auth_service::issue_token,
    state::AppState,
};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

const SECRET: &str = "router-test-secret";

// Every request here is rejected before the database is touched.
fn app() -> Router {
    let config = AppConfig {
        database_url: String::new(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: SECRET.into(),
        bcrypt_cost: 4,
        checkout_hook: None,
        pool: PoolConfig::default(),
    };
    create_app(AppState::new(DatabaseConnection::Disconnected, config))
}

fn token() -> String {
    let user = User {
        id: Uuid::new_v4(),
        email: "jesse@globalhealth.com".into(),
        full_name: None,
    };
    issue_token(SECRET, &user).expect("token")
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn json_request(method: &str, uri: &str, auth: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

#[tokio::test]
async fn cart_without_token_is_unauthorized() {
    let request = Request::builder()
        .uri("/api/cart")
        .body(Body::empty())
        .expect("request");
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "No token provided" }));
}

#[tokio::test]
async fn session_with_foreign_token_is_forbidden() {
    let user = User {
        id: Uuid::new_v4(),
        email: "rob@dragonsreach.com".into(),
        full_name: None,
    };
    let foreign = issue_token("some-other-secret", &user).expect("token");
    let request = Request::builder()
        .uri("/api/auth/session")
        .header(header::AUTHORIZATION, format!("Bearer {foreign}"))
        .body(Body::empty())
        .expect("request");
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "Invalid token" }));
}

#[tokio::test]
async fn checkout_without_total_is_bad_request() {
    let (status, body) = send(json_request("POST", "/log-checkout", None, "{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Total price is required" }));

    let (status, body) = send(json_request(
        "POST",
        "/log-checkout",
        None,
        r#"{"totalPrice":0}"#,
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Total price is required");
}

#[tokio::test]
async fn checkout_is_acknowledged_immediately() {
    let (status, body) = send(json_request(
        "POST",
        "/log-checkout",
        None,
        r#"{"totalPrice":83000}"#,
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "Checkout logged" }));
}

#[tokio::test]
async fn malformed_checkout_body_is_a_json_bad_request() {
    let (status, body) = send(json_request("POST", "/log-checkout", None, "{totalPrice")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn fractional_cart_price_is_a_json_bad_request() {
    let auth = format!("Bearer {}", token());
    let (status, body) = send(json_request(
        "POST",
        "/api/cart",
        Some(&auth),
        r#"{"room_type":"kitchen","style":"modern","price":1299.99}"#,
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn non_uuid_cart_id_is_a_json_bad_request() {
    let auth = format!("Bearer {}", token());
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/cart/not-a-uuid")
        .header(header::AUTHORIZATION, auth)
        .body(Body::empty())
        .expect("request");
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let request = Request::builder()
        .uri("/nowhere")
        .body(Body::empty())
        .expect("request");
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/nowhere");
}
