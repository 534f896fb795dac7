// ABOUTME: HTTP integration tests for the player CRUD routes
// ABOUTME: Exercises create, read, list, count, update, and delete through the full router
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for player routes
//!
//! Each test builds the full router over a fresh in-memory store and
//! drives it through oneshot requests, asserting both status codes and
//! the JSON envelopes on the wire.

mod common;
mod helpers;

use common::{create_test_resources, seed_player};
use helpers::axum_test::AxumTestRequest;
use player_registry::server::{router, ServerResources};
use serde_json::{json, Value};
use std::sync::Arc;

struct TestSetup {
    resources: Arc<ServerResources>,
}

impl TestSetup {
    async fn new() -> Self {
        let resources = create_test_resources().await.unwrap();
        Self { resources }
    }

    fn app(&self) -> axum::Router {
        router(self.resources.clone())
    }

    async fn seed(&self, name: &str, experience: i32) -> player_registry::models::Player {
        seed_player(self.resources.store.as_ref(), name, experience)
            .await
            .unwrap()
    }
}

fn create_payload(name: &str) -> Value {
    json!({
        "name": name,
        "title": "Tester",
        "race": "HUMAN",
        "profession": "WARRIOR",
        "birthday": 1_000_000_000_000_i64,
        "experience": 100
    })
}

// ============================================================================
// POST /rest/players - Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_player_returns_201_with_derived_fields() {
    let setup = TestSetup::new().await;

    let response = AxumTestRequest::post("/rest/players")
        .json(&create_payload("Aragorn"))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 201);

    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Aragorn");
    assert_eq!(body["race"], "HUMAN");
    assert_eq!(body["birthday"], 1_000_000_000_000_i64);
    assert_eq!(body["experience"], 100);
    // 100 experience crosses the first threshold exactly
    assert_eq!(body["level"], 1);
    assert_eq!(body["experienceUntilNextLevel"], 200);
    assert_eq!(body["banned"], false);
}

#[tokio::test]
async fn test_create_player_missing_field_returns_400() {
    let setup = TestSetup::new().await;

    let mut payload = create_payload("Aragorn");
    payload.as_object_mut().unwrap().remove("race");

    let response = AxumTestRequest::post("/rest/players")
        .json(&payload)
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(body["error"]["details"]["field"], "race");
}

#[tokio::test]
async fn test_create_player_name_too_long_returns_400() {
    let setup = TestSetup::new().await;

    let response = AxumTestRequest::post("/rest/players")
        .json(&create_payload("ThisNameIsWayTooLong"))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_create_player_experience_out_of_range_returns_400() {
    let setup = TestSetup::new().await;

    for experience in [-1_i64, 10_000_001] {
        let mut payload = create_payload("Aragorn");
        payload["experience"] = json!(experience);

        let response = AxumTestRequest::post("/rest/players")
            .json(&payload)
            .send(setup.app())
            .await;

        assert_eq!(response.status(), 400, "experience {experience}");

        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
        assert_eq!(body["error"]["details"]["field"], "experience");
    }
}

#[tokio::test]
async fn test_create_player_negative_birthday_returns_400() {
    let setup = TestSetup::new().await;

    let mut payload = create_payload("Aragorn");
    payload["birthday"] = json!(-1);

    let response = AxumTestRequest::post("/rest/players")
        .json(&payload)
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_create_player_unknown_race_returns_400() {
    let setup = TestSetup::new().await;

    let mut payload = create_payload("Aragorn");
    payload["race"] = json!("VAMPIRE");

    let response = AxumTestRequest::post("/rest/players")
        .json(&payload)
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_create_rejection_persists_nothing() {
    let setup = TestSetup::new().await;

    let mut payload = create_payload("Aragorn");
    payload["experience"] = json!(-1);

    AxumTestRequest::post("/rest/players")
        .json(&payload)
        .send(setup.app())
        .await;

    let response = AxumTestRequest::get("/rest/players/count")
        .send(setup.app())
        .await;
    let count: i64 = response.json();
    assert_eq!(count, 0);
}

// ============================================================================
// GET /rest/players - List Tests
// ============================================================================

#[tokio::test]
async fn test_list_defaults_to_page_size_three() {
    let setup = TestSetup::new().await;
    for i in 0..5 {
        setup.seed(&format!("Player{i}"), i * 100).await;
    }

    let response = AxumTestRequest::get("/rest/players").send(setup.app()).await;

    assert_eq!(response.status(), 200);

    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 3);
    assert_eq!(body[0]["id"], 1);
    assert_eq!(body[2]["id"], 3);
}

#[tokio::test]
async fn test_list_pagination_windows() {
    let setup = TestSetup::new().await;
    for i in 0..10 {
        setup.seed(&format!("Player{i}"), 0).await;
    }

    let page0: Vec<Value> = AxumTestRequest::get("/rest/players?pageNumber=0&pageSize=3")
        .send(setup.app())
        .await
        .json();
    let ids: Vec<i64> = page0.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let page3: Vec<Value> = AxumTestRequest::get("/rest/players?pageNumber=3&pageSize=3")
        .send(setup.app())
        .await
        .json();
    let ids: Vec<i64> = page3.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![10]);

    // Pages past the end are empty, not an error
    let page4: Vec<Value> = AxumTestRequest::get("/rest/players?pageNumber=4&pageSize=3")
        .send(setup.app())
        .await
        .json();
    assert!(page4.is_empty());
}

#[tokio::test]
async fn test_list_filters_combine_with_and() {
    let setup = TestSetup::new().await;
    setup.seed("Aragorn", 5000).await;
    setup.seed("Arwen", 100).await;
    setup.seed("Gimli", 5000).await;

    let body: Vec<Value> = AxumTestRequest::get("/rest/players?name=ar&minExperience=1000")
        .send(setup.app())
        .await
        .json();

    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Aragorn");
}

#[tokio::test]
async fn test_list_name_filter_is_case_insensitive_substring() {
    let setup = TestSetup::new().await;
    setup.seed("Aragorn", 0).await;
    setup.seed("Gimli", 0).await;

    let body: Vec<Value> = AxumTestRequest::get("/rest/players?name=RAG")
        .send(setup.app())
        .await
        .json();

    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Aragorn");
}

#[tokio::test]
async fn test_list_orders_by_name() {
    let setup = TestSetup::new().await;
    setup.seed("Cirdan", 0).await;
    setup.seed("Aragorn", 0).await;
    setup.seed("Boromir", 0).await;

    let body: Vec<Value> = AxumTestRequest::get("/rest/players?order=NAME")
        .send(setup.app())
        .await
        .json();

    let names: Vec<&str> = body.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Aragorn", "Boromir", "Cirdan"]);
}

#[tokio::test]
async fn test_list_orders_by_experience_with_stable_ties() {
    let setup = TestSetup::new().await;
    setup.seed("First", 500).await;
    setup.seed("Second", 100).await;
    setup.seed("Third", 500).await;

    let body: Vec<Value> = AxumTestRequest::get("/rest/players?order=EXPERIENCE")
        .send(setup.app())
        .await
        .json();

    // Equal experience keeps id order
    let ids: Vec<i64> = body.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[tokio::test]
async fn test_list_unknown_order_returns_400() {
    let setup = TestSetup::new().await;

    let response = AxumTestRequest::get("/rest/players?order=LEVEL")
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 400);
}

// ============================================================================
// GET /rest/players/count - Count Tests
// ============================================================================

#[tokio::test]
async fn test_count_returns_bare_number() {
    let setup = TestSetup::new().await;
    setup.seed("Aragorn", 0).await;
    setup.seed("Gimli", 0).await;

    let response = AxumTestRequest::get("/rest/players/count")
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 200);
    let count: i64 = response.json();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_count_honors_filters_and_ignores_pagination() {
    let setup = TestSetup::new().await;
    for i in 0..5 {
        setup.seed(&format!("Player{i}"), i * 1000).await;
    }

    let response = AxumTestRequest::get("/rest/players/count?minExperience=2000&pageSize=1")
        .send(setup.app())
        .await;

    let count: i64 = response.json();
    assert_eq!(count, 3);
}

// ============================================================================
// GET /rest/players/{id} - Get Tests
// ============================================================================

#[tokio::test]
async fn test_get_player_by_id() {
    let setup = TestSetup::new().await;
    let saved = setup.seed("Aragorn", 5000).await;

    let response = AxumTestRequest::get(&format!("/rest/players/{}", saved.id))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["name"], "Aragorn");
    assert_eq!(body["experience"], 5000);
}

#[tokio::test]
async fn test_get_player_malformed_id_returns_400() {
    let setup = TestSetup::new().await;
    setup.seed("Aragorn", 0).await;

    for raw in ["abc", "-5", "0", "1.5"] {
        let response = AxumTestRequest::get(&format!("/rest/players/{raw}"))
            .send(setup.app())
            .await;

        assert_eq!(response.status(), 400, "id {raw}");

        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "INVALID_ID");
    }
}

#[tokio::test]
async fn test_get_player_unknown_id_returns_404() {
    let setup = TestSetup::new().await;
    setup.seed("Aragorn", 0).await;
    setup.seed("Gimli", 0).await;

    let response = AxumTestRequest::get("/rest/players/99")
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 404);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "PLAYER_NOT_FOUND");
}

#[tokio::test]
async fn test_get_rejects_ids_above_count_even_when_record_exists() {
    let setup = TestSetup::new().await;
    setup.seed("Aragorn", 0).await;
    setup.seed("Gimli", 0).await;
    let third = setup.seed("Legolas", 0).await;

    AxumTestRequest::delete("/rest/players/1")
        .send(setup.app())
        .await;

    // Two records remain, so the id-versus-count screen fires before the
    // point lookup and hides id 3 despite the row still existing.
    let response = AxumTestRequest::get(&format!("/rest/players/{}", third.id))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 404);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "PLAYER_NOT_FOUND");

    // The record itself was never touched; it still shows up in a scan.
    let all: Vec<Value> = AxumTestRequest::get("/rest/players?pageSize=10")
        .send(setup.app())
        .await
        .json();
    assert!(all.iter().any(|p| p["id"] == third.id));
}

// ============================================================================
// POST /rest/players/{id} - Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_player_partial_fields() {
    let setup = TestSetup::new().await;
    let saved = setup.seed("Aragorn", 100).await;

    let response = AxumTestRequest::post(&format!("/rest/players/{}", saved.id))
        .json(&json!({"title": "King of Gondor", "banned": true}))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["title"], "King of Gondor");
    assert_eq!(body["banned"], true);
    // Untouched fields survive
    assert_eq!(body["name"], "Aragorn");
    assert_eq!(body["experience"], 100);
}

#[tokio::test]
async fn test_update_experience_rederives_level_fields() {
    let setup = TestSetup::new().await;
    let saved = setup.seed("Aragorn", 100).await;

    let response = AxumTestRequest::post(&format!("/rest/players/{}", saved.id))
        .json(&json!({"experience": 300}))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["experience"], 300);
    assert_eq!(body["level"], 2);
    assert_eq!(body["experienceUntilNextLevel"], 300);
}

#[tokio::test]
async fn test_update_empty_payload_is_noop_read() {
    let setup = TestSetup::new().await;
    let saved = setup.seed("Aragorn", 100).await;

    let response = AxumTestRequest::post(&format!("/rest/players/{}", saved.id))
        .json(&json!({}))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["name"], "Aragorn");
    assert_eq!(body["experience"], 100);
}

#[tokio::test]
async fn test_update_out_of_range_leaves_record_unchanged() {
    let setup = TestSetup::new().await;
    let saved = setup.seed("Aragorn", 100).await;

    let response = AxumTestRequest::post(&format!("/rest/players/{}", saved.id))
        .json(&json!({"name": "Strider", "experience": 10_000_001}))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 400);

    // The whole patch was rejected, including the valid name change
    let fetched: Value = AxumTestRequest::get(&format!("/rest/players/{}", saved.id))
        .send(setup.app())
        .await
        .json();
    assert_eq!(fetched["name"], "Aragorn");
    assert_eq!(fetched["experience"], 100);
}

#[tokio::test]
async fn test_update_birthday_bounds_enforced() {
    let setup = TestSetup::new().await;
    let saved = setup.seed("Aragorn", 100).await;

    // Creation accepts any non-negative birthday; updates do not
    let response = AxumTestRequest::post(&format!("/rest/players/{}", saved.id))
        .json(&json!({"birthday": 0}))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(body["error"]["details"]["field"], "birthday");
}

#[tokio::test]
async fn test_update_unknown_id_returns_404() {
    let setup = TestSetup::new().await;
    setup.seed("Aragorn", 0).await;

    let response = AxumTestRequest::post("/rest/players/99")
        .json(&json!({"banned": true}))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 404);
}

// ============================================================================
// DELETE /rest/players/{id} - Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_player_then_get_returns_404() {
    let setup = TestSetup::new().await;
    let saved = setup.seed("Aragorn", 0).await;

    let response = AxumTestRequest::delete(&format!("/rest/players/{}", saved.id))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 200);

    let response = AxumTestRequest::get(&format!("/rest/players/{}", saved.id))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_delete_malformed_id_returns_400() {
    let setup = TestSetup::new().await;

    for raw in ["abc", "-5"] {
        let response = AxumTestRequest::delete(&format!("/rest/players/{raw}"))
            .send(setup.app())
            .await;

        assert_eq!(response.status(), 400, "id {raw}");
    }
}

#[tokio::test]
async fn test_delete_unknown_id_returns_404() {
    let setup = TestSetup::new().await;

    let response = AxumTestRequest::delete("/rest/players/7")
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 404);
}
