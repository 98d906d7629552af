use actix_web::{web, HttpResponse, Responder};

pub mod db;
pub mod events;
pub mod models;
pub mod publishers;
pub mod users;
pub mod validation;

async fn liveness() -> impl Responder {
    HttpResponse::Ok().body("event db is arranging events")
}

/// The full route table. Shared between the server binary and the
/// integration tests so both run against the same wiring.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/add-event", web::post().to(events::add_event))
        .route("/all-events", web::get().to(events::approved_events))
        .route("/events", web::get().to(events::all_events))
        .route("/event/{id}", web::get().to(events::event_by_id))
        .route("/all-publishers", web::post().to(publishers::create_publisher))
        .route("/all-publishers", web::get().to(publishers::list_publishers))
        .route("/users", web::post().to(users::create_user))
        .route("/users", web::get().to(users::list_users))
        .route("/users", web::put().to(users::update_user))
        .route("/users/{email}", web::get().to(users::user_by_email))
        .route("/", web::get().to(liveness));
}
