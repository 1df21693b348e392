//! Integration tests for the post resource, run against the real app over an
//! isolated in-memory store per test.

mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test};
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use uuid::Uuid;

use quill_core::ports::PostStore;
use quill_infra::InMemoryPostStore;

use common::{random_post, seed_posts, test_app};

fn rng() -> StdRng {
    StdRng::from_entropy()
}

#[actix_web::test]
async fn health_check_reports_ok() {
    let store = Arc::new(InMemoryPostStore::new());
    let app = test::init_service(test_app(store)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn list_returns_every_seeded_post() {
    let store = Arc::new(InMemoryPostStore::new());
    let seeded = seed_posts(&store, &mut rng(), 5).await;
    let app = test::init_service(test_app(store.clone())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), seeded.len());
    assert_eq!(posts.len(), store.list().await.unwrap().len());

    for element in posts {
        // Exactly the five projection keys
        let obj = element.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["author", "content", "created", "id", "title"]);

        // author is the concatenation of the stored record's name fields
        let id: Uuid = element["id"].as_str().unwrap().parse().unwrap();
        let stored = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(
            element["author"].as_str().unwrap(),
            format!("{} {}", stored.author.first_name, stored.author.last_name)
        );
        assert_eq!(element["title"], stored.title.as_str());
        assert_eq!(element["content"], stored.content.as_str());
    }
}

#[actix_web::test]
async fn list_is_idempotent() {
    let store = Arc::new(InMemoryPostStore::new());
    seed_posts(&store, &mut rng(), 3).await;
    let app = test::init_service(test_app(store)).await;

    let first: Value = test::read_body_json(
        test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await,
    )
    .await;
    let second: Value = test::read_body_json(
        test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await,
    )
    .await;

    assert_eq!(first, second);
}

#[actix_web::test]
async fn create_round_trips_through_the_store() {
    let store = Arc::new(InMemoryPostStore::new());
    let app = test::init_service(test_app(store.clone())).await;

    let candidate = random_post(&mut rng());
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/posts")
            .set_json(&candidate)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();
    assert_eq!(
        body["author"].as_str().unwrap(),
        format!(
            "{} {}",
            candidate.author.first_name, candidate.author.last_name
        )
    );

    let stored = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.title, candidate.title);
    assert_eq!(stored.content, candidate.content);
    assert_eq!(stored.author.first_name, candidate.author.first_name);
    assert_eq!(stored.author.last_name, candidate.author.last_name);

    // created was defaulted by the store and echoed back in RFC 3339 form
    let created: DateTime<Utc> = body["created"].as_str().unwrap().parse().unwrap();
    assert_eq!(created, stored.created);
}

#[actix_web::test]
async fn create_keeps_caller_supplied_timestamp() {
    let store = Arc::new(InMemoryPostStore::new());
    let app = test::init_service(test_app(store.clone())).await;

    let mut candidate = random_post(&mut rng());
    let ts: DateTime<Utc> = "2024-01-15T10:30:00Z".parse().unwrap();
    candidate.created = Some(ts);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/posts")
            .set_json(&candidate)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();

    // Compare through the canonical parsed form, not raw strings
    let echoed: DateTime<Utc> = body["created"].as_str().unwrap().parse().unwrap();
    assert_eq!(echoed, ts);
    assert_eq!(store.find_by_id(id).await.unwrap().unwrap().created, ts);
}

#[actix_web::test]
async fn create_with_missing_fields_persists_nothing() {
    let store = Arc::new(InMemoryPostStore::new());
    let app = test::init_service(test_app(store.clone())).await;

    // No content, no author
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({ "title": "only a title" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(store.list().await.unwrap().is_empty());
}

#[actix_web::test]
async fn create_with_blank_title_is_rejected() {
    let store = Arc::new(InMemoryPostStore::new());
    let app = test::init_service(test_app(store.clone())).await;

    let mut candidate = random_post(&mut rng());
    candidate.title = "   ".to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/posts")
            .set_json(&candidate)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
    assert!(store.list().await.unwrap().is_empty());
}

#[actix_web::test]
async fn update_mutates_record_in_place() {
    let store = Arc::new(InMemoryPostStore::new());
    let seeded = seed_posts(&store, &mut rng(), 1).await;
    let target = &seeded[0];
    let app = test::init_service(test_app(store.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/posts/{}", target.id))
            .set_json(json!({
                "title": "Edited title",
                "content": "Edited content",
                "author": { "firstName": "Niklaus", "lastName": "Wirth" },
                "id": target.id,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let body = test::read_body(resp).await;
    assert!(body.is_empty());

    let stored = store.find_by_id(target.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Edited title");
    assert_eq!(stored.content, "Edited content");
    assert_eq!(stored.author.display_name(), "Niklaus Wirth");
    // id and created survive the update untouched
    assert_eq!(stored.id, target.id);
    assert_eq!(stored.created, target.created);
}

#[actix_web::test]
async fn update_unknown_id_is_not_found() {
    let store = Arc::new(InMemoryPostStore::new());
    let app = test::init_service(test_app(store)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/posts/{}", Uuid::new_v4()))
            .set_json(json!({
                "title": "x",
                "content": "y",
                "author": { "firstName": "A", "lastName": "B" },
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 404);
}

#[actix_web::test]
async fn delete_removes_record() {
    let store = Arc::new(InMemoryPostStore::new());
    let seeded = seed_posts(&store, &mut rng(), 5).await;
    let target = &seeded[2];
    let app = test::init_service(test_app(store.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/posts/{}", target.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(resp).await.is_empty());

    // Subsequent lookup is absent, not an error
    assert!(store.find_by_id(target.id).await.unwrap().is_none());
    assert_eq!(store.list().await.unwrap().len(), 4);
}

#[actix_web::test]
async fn delete_unknown_id_is_idempotent_success() {
    let store = Arc::new(InMemoryPostStore::new());
    let app = test::init_service(test_app(store)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/posts/{}", Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn malformed_id_in_path_is_a_client_error() {
    let store = Arc::new(InMemoryPostStore::new());
    let app = test::init_service(test_app(store)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/posts/not-a-uuid")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
