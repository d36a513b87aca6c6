//! Shared helpers for the API integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the real
//! router, so every test exercises the same middleware stack (CORS,
//! request ID, timeout, tracing, panic recovery) that production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use reachly_api::auth::jwt::{generate_access_token, JwtConfig};
use reachly_api::config::ServerConfig;
use reachly_api::router::build_app_router;
use reachly_api::state::AppState;
use reachly_db::models::influencer::{CreateInfluencer, CreateSocialAccount, Influencer};
use reachly_db::models::product::{CreateProduct, Product};
use reachly_db::models::store::{CreateStore, Store};
use reachly_db::repositories::{InfluencerRepo, ProductRepo, StoreRepo};
use reachly_events::EventBus;

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors the router construction in `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        events: Arc::new(EventBus::new()),
    };
    build_app_router(state, &config)
}

/// `Authorization` header value for the given account id.
pub fn bearer(user_id: i64) -> String {
    let token = generate_access_token(user_id, &test_config().jwt)
        .expect("token generation should succeed");
    format!("Bearer {token}")
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    user: Option<i64>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user {
        builder = builder.header(header::AUTHORIZATION, bearer(user_id));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.clone()
        .oneshot(request)
        .await
        .expect("request should complete")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, user_id: i64) -> Response<Body> {
    send(app, Method::GET, uri, Some(user_id), None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: &Router, uri: &str, user_id: i64, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(user_id), Some(body)).await
}

pub async fn post_auth(app: &Router, uri: &str, user_id: i64) -> Response<Body> {
    send(app, Method::POST, uri, Some(user_id), None).await
}

pub async fn patch_json_auth(app: &Router, uri: &str, user_id: i64, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(user_id), Some(body)).await
}

pub async fn delete_auth(app: &Router, uri: &str, user_id: i64) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(user_id), None).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

pub async fn seed_store(pool: &PgPool, user_id: i64, name: &str) -> Store {
    StoreRepo::create(
        pool,
        &CreateStore {
            user_id,
            name: name.to_string(),
            category: Some("fashion".to_string()),
        },
    )
    .await
    .expect("store should be created")
}

pub async fn seed_store_with_category(
    pool: &PgPool,
    user_id: i64,
    name: &str,
    category: &str,
) -> Store {
    StoreRepo::create(
        pool,
        &CreateStore {
            user_id,
            name: name.to_string(),
            category: Some(category.to_string()),
        },
    )
    .await
    .expect("store should be created")
}

pub async fn seed_product(pool: &PgPool, store_id: i64, name: &str) -> Product {
    ProductRepo::create(
        pool,
        &CreateProduct {
            store_id,
            name: name.to_string(),
            description: None,
            price: 89.99,
        },
    )
    .await
    .expect("product should be created")
}

pub async fn seed_influencer(pool: &PgPool, user_id: i64, name: &str) -> Influencer {
    InfluencerRepo::create(
        pool,
        &CreateInfluencer {
            user_id,
            display_name: name.to_string(),
            niche: Some("fitness".to_string()),
            bio: Some("Daily workouts".to_string()),
        },
    )
    .await
    .expect("influencer should be created")
}

pub async fn seed_social_account(pool: &PgPool, influencer_id: i64, platform: &str, followers: i64) {
    InfluencerRepo::add_social_account(
        pool,
        &CreateSocialAccount {
            influencer_id,
            platform: platform.to_string(),
            handle: "@handle".to_string(),
            followers,
        },
    )
    .await
    .expect("social account should be created");
}

/// Minimal valid campaign creation body.
pub fn minimal_campaign(title: &str) -> Value {
    json!({
        "title": title,
        "budget": 500.0,
        "currency": "USD",
        "targets": { "awareness": ["reach"] },
    })
}
