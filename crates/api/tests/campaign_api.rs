//! HTTP-level integration tests for the store-side `/campaigns` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete_auth, get_auth, minimal_campaign, patch_json_auth,
    post_json, post_json_auth, post_auth, seed_influencer, seed_product, seed_store,
};
use reachly_db::repositories::ApplicationRepo;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_draft_campaign(pool: PgPool) {
    let store = seed_store(&pool, 1, "Shoe Palace").await;
    let app = build_test_app(pool);

    let response =
        post_json_auth(&app, "/api/v1/campaigns", 1, minimal_campaign("Summer Sale")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["campaign"]["title"], "Summer Sale");
    assert_eq!(json["campaign"]["status"], "DRAFT");
    assert_eq!(json["campaign"]["store_id"], store.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_publish_flag_goes_live_immediately(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    let app = build_test_app(pool);

    let mut body = minimal_campaign("Summer Sale");
    body["publish"] = json!(true);
    let response = post_json_auth(&app, "/api/v1/campaigns", 1, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["campaign"]["status"], "PUBLISHED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_authentication(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/v1/campaigns", minimal_campaign("Summer Sale")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_a_store(pool: PgPool) {
    // Account 1 exists but never registered a store.
    let app = build_test_app(pool);

    let response =
        post_json_auth(&app, "/api/v1/campaigns", 1, minimal_campaign("Summer Sale")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reports_every_invalid_field(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    let app = build_test_app(pool);

    let response = post_json_auth(&app, "/api/v1/campaigns", 1, json!({ "budget": -5 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    let details = json["details"].as_array().expect("details should be a list");
    let fields: Vec<&str> = details
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"budget"));
    assert!(fields.contains(&"title"));
    assert!(fields.contains(&"currency"));
    assert!(fields.contains(&"targets"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_product_campaign_with_own_product(pool: PgPool) {
    let store = seed_store(&pool, 1, "Shoe Palace").await;
    let product = seed_product(&pool, store.id, "Trail Runner").await;
    let app = build_test_app(pool);

    let mut body = minimal_campaign("Summer Sale");
    body["type"] = json!("PRODUCT");
    body["type_specific_data"] = json!({ "product_id": product.id });
    let response = post_json_auth(&app, "/api/v1/campaigns", 1, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["campaign"]["type"], "PRODUCT");
    assert_eq!(json["campaign"]["type_specific_data"]["product_id"], product.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_another_stores_product(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    let other = seed_store(&pool, 2, "Bag Barn").await;
    let foreign_product = seed_product(&pool, other.id, "Tote").await;
    let app = build_test_app(pool.clone());

    let mut body = minimal_campaign("Summer Sale");
    body["type"] = json!("PRODUCT");
    body["type_specific_data"] = json!({ "product_id": foreign_product.id });
    let response = post_json_auth(&app, "/api/v1/campaigns", 1, body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // No campaign row was created.
    let response = get_auth(&app, "/api/v1/campaigns", 1).await;
    let json = body_json(response).await;
    assert_eq!(json["campaigns"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

async fn create_campaign_via_api(app: &axum::Router, user_id: i64, body: serde_json::Value) -> i64 {
    let response = post_json_auth(app, "/api/v1/campaigns", user_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["campaign"]["id"]
        .as_i64()
        .expect("campaign id should be an integer")
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_by_id_enforces_ownership(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    seed_store(&pool, 2, "Bag Barn").await;
    let app = build_test_app(pool);

    let id = create_campaign_via_api(&app, 1, minimal_campaign("Summer Sale")).await;

    let response = get_auth(&app, &format!("/api/v1/campaigns/{id}"), 1).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["campaign"]["id"], id);

    // Another store must not see it.
    let response = get_auth(&app, &format!("/api/v1/campaigns/{id}"), 2).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Unknown ids are 404.
    let response = get_auth(&app, "/api/v1/campaigns/999999", 1).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_scopes_to_own_store_and_paginates(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    seed_store(&pool, 2, "Bag Barn").await;
    let app = build_test_app(pool);

    for i in 0..3 {
        create_campaign_via_api(&app, 1, minimal_campaign(&format!("Mine {i}"))).await;
    }
    create_campaign_via_api(&app, 2, minimal_campaign("Not mine")).await;

    let response = get_auth(&app, "/api/v1/campaigns?page=1&limit=2", 1).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["campaigns"].as_array().unwrap().len(), 2);
    assert_eq!(json["pagination"]["total"], 3);
    assert_eq!(json["pagination"]["total_pages"], 2);
    assert!(json["campaigns"]
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["store_name"] == "Shoe Palace"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_rejects_unknown_status_filter(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    let app = build_test_app(pool);

    let response = get_auth(&app, "/api/v1/campaigns?status=ARCHIVED", 1).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_merges_type_specific_data_shallowly(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    let app = build_test_app(pool);

    let mut body = minimal_campaign("Summer Sale");
    body["type"] = json!("VIDEO");
    body["type_specific_data"] = json!({ "brief": "Show the shoes", "a": 1, "b": 2 });
    let id = create_campaign_via_api(&app, 1, body).await;

    let response = patch_json_auth(
        &app,
        &format!("/api/v1/campaigns/{id}"),
        1,
        json!({ "type_specific_data": { "b": 3, "c": 4 } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["campaign"]["type_specific_data"];
    assert_eq!(data["brief"], "Show the shoes");
    assert_eq!(data["a"], 1);
    assert_eq!(data["b"], 3);
    assert_eq!(data["c"], 4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_validates_budget(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    let app = build_test_app(pool);
    let id = create_campaign_via_api(&app, 1, minimal_campaign("Summer Sale")).await;

    let response = patch_json_auth(
        &app,
        &format!("/api/v1/campaigns/{id}"),
        1,
        json!({ "budget": -5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let details = json["details"].as_array().expect("details should be a list");
    assert!(details.iter().any(|d| d["field"] == "budget"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rejects_published_campaigns_and_leaves_them_unchanged(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    let app = build_test_app(pool);

    let mut body = minimal_campaign("Summer Sale");
    body["publish"] = json!(true);
    let id = create_campaign_via_api(&app, 1, body).await;

    let response = patch_json_auth(
        &app,
        &format!("/api/v1/campaigns/{id}"),
        1,
        json!({ "title": "Renamed", "type": "COUPON" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Only draft campaigns can be edited");

    // The stored record is untouched.
    let response = get_auth(&app, &format!("/api/v1/campaigns/{id}"), 1).await;
    let json = body_json(response).await;
    assert_eq!(json["campaign"]["title"], "Summer Sale");
    assert!(json["campaign"]["type"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_can_change_type_while_draft(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    let app = build_test_app(pool);
    let id = create_campaign_via_api(&app, 1, minimal_campaign("Summer Sale")).await;

    let response = patch_json_auth(
        &app,
        &format!("/api/v1/campaigns/{id}"),
        1,
        json!({
            "type": "COUPON",
            "type_specific_data": { "code": "SAVE20", "discount_percent": 20 },
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["campaign"]["type"], "COUPON");
    assert_eq!(json["campaign"]["type_specific_data"]["code"], "SAVE20");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_validates_merged_payload_against_type(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    let app = build_test_app(pool);

    let mut body = minimal_campaign("Summer Sale");
    body["type"] = json!("COUPON");
    body["type_specific_data"] = json!({ "code": "SAVE20", "discount_percent": 20 });
    let id = create_campaign_via_api(&app, 1, body).await;

    // Pushing the merged discount out of range must fail.
    let response = patch_json_auth(
        &app,
        &format!("/api/v1/campaigns/{id}"),
        1,
        json!({ "type_specific_data": { "discount_percent": 250 } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Publish / delete lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_summer_sale_lifecycle(pool: PgPool) {
    // Create draft -> publish -> publish again fails -> delete fails.
    let store = seed_store(&pool, 1, "Shoe Palace").await;
    let app = build_test_app(pool);

    let id = create_campaign_via_api(&app, 1, minimal_campaign("Summer Sale")).await;

    let response = get_auth(&app, &format!("/api/v1/campaigns/{id}"), 1).await;
    let json = body_json(response).await;
    assert_eq!(json["campaign"]["status"], "DRAFT");
    assert_eq!(json["campaign"]["store_id"], store.id);

    let response = post_auth(&app, &format!("/api/v1/campaigns/{id}/publish"), 1).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["campaign"]["status"], "PUBLISHED");

    // Publication is one-way and idempotence is rejected loudly.
    let response = post_auth(&app, &format!("/api/v1/campaigns/{id}/publish"), 1).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["error"],
        "Only draft campaigns can be published"
    );

    let response = delete_auth(&app, &format!("/api/v1/campaigns/{id}"), 1).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["error"],
        "Only draft campaigns can be deleted"
    );

    // The row survives the rejected delete.
    let response = get_auth(&app, &format!("/api/v1/campaigns/{id}"), 1).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_draft_removes_it(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    let app = build_test_app(pool);
    let id = create_campaign_via_api(&app, 1, minimal_campaign("Summer Sale")).await;

    let response = delete_auth(&app, &format!("/api/v1/campaigns/{id}"), 1).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(&app, &format!("/api/v1/campaigns/{id}"), 1).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_publish_requires_ownership(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    seed_store(&pool, 2, "Bag Barn").await;
    let app = build_test_app(pool);
    let id = create_campaign_via_api(&app, 1, minimal_campaign("Summer Sale")).await;

    let response = post_auth(&app, &format!("/api/v1/campaigns/{id}/publish"), 2).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_campaign_applicants_projection(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    seed_store(&pool, 2, "Bag Barn").await;
    let influencer = seed_influencer(&pool, 100, "Jess Runs").await;
    common::seed_social_account(&pool, influencer.id, "instagram", 120_000).await;
    let app = build_test_app(pool.clone());

    let mut body = minimal_campaign("Summer Sale");
    body["publish"] = json!(true);
    let id = create_campaign_via_api(&app, 1, body).await;

    ApplicationRepo::create(&pool, id, influencer.id)
        .await
        .expect("application should be created");

    let response = get_auth(&app, &format!("/api/v1/campaigns/{id}/applications"), 1).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let applications = json["applications"].as_array().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["display_name"], "Jess Runs");
    assert_eq!(applications[0]["niche"], "fitness");
    assert_eq!(applications[0]["social_accounts"][0]["platform"], "instagram");
    assert_eq!(applications[0]["social_accounts"][0]["followers"], 120_000);

    // Applicant data is ownership-gated.
    let response = get_auth(&app, &format!("/api/v1/campaigns/{id}/applications"), 2).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_store_wide_applications(pool: PgPool) {
    seed_store(&pool, 1, "Shoe Palace").await;
    let influencer = seed_influencer(&pool, 100, "Jess Runs").await;
    let app = build_test_app(pool.clone());

    let mut first = minimal_campaign("Summer Sale");
    first["publish"] = json!(true);
    let first_id = create_campaign_via_api(&app, 1, first).await;
    let mut second = minimal_campaign("Winter Sale");
    second["publish"] = json!(true);
    let second_id = create_campaign_via_api(&app, 1, second).await;

    ApplicationRepo::create(&pool, first_id, influencer.id)
        .await
        .unwrap();
    ApplicationRepo::create(&pool, second_id, influencer.id)
        .await
        .unwrap();

    let response = get_auth(&app, "/api/v1/applications", 1).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["applications"].as_array().unwrap().len(), 2);
}
