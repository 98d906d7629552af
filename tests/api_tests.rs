//! Router-level tests for the paths that must terminate before any database
//! operation: the required-field 400s and the liveness route. The driver
//! connects lazily, so handles to an unreachable deployment are fine as long
//! as no query actually runs.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use mongodb::{Client, Collection};
use serde_json::{json, Value};

use event_api::models::{Event, Publisher, User};

async fn test_collections() -> (Collection<Event>, Collection<User>, Collection<Publisher>) {
    let client = Client::with_uri_str("mongodb://localhost:27017")
        .await
        .expect("client options parse");
    let database = client.database("eventDb");
    (
        database.collection("events"),
        database.collection("users"),
        database.collection("publishers"),
    )
}

macro_rules! test_app {
    () => {{
        let (events, users, publishers) = test_collections().await;
        test::init_service(
            App::new()
                .app_data(web::Data::new(events))
                .app_data(web::Data::new(users))
                .app_data(web::Data::new(publishers))
                .configure(event_api::routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn liveness_route_responds_with_plain_text() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, "event db is arranging events");
}

#[actix_web::test]
async fn add_event_without_required_fields_is_rejected() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/add-event")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "eventName, eventDate, location, image, description are required"
    );
}

#[actix_web::test]
async fn add_event_treats_empty_strings_as_missing() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/add-event")
        .set_json(json!({
            "eventName": "RustConf",
            "eventDate": "2026-09-01",
            "location": "",
            "image": "https://example.com/a.png",
            "description": "Annual conference"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "location is required");
}

#[actix_web::test]
async fn create_user_without_email_is_rejected() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "name": "Ada" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "email is required");
}

#[actix_web::test]
async fn create_user_with_empty_email_is_rejected() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "email": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_user_without_email_is_rejected() {
    let app = test_app!();
    let req = test::TestRequest::put()
        .uri("/users")
        .set_json(json!({ "name": "Bob" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "email is required");
}

#[actix_web::test]
async fn create_publisher_reports_every_missing_field() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/all-publishers")
        .set_json(json!({ "name": "Acme Events" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "email, website are required");
}
