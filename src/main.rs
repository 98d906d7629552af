use std::env;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;

use event_api::db;
use event_api::models::{Event, Publisher, User};

// Origins allowed to issue credentialed requests; everyone else is rejected
// at the transport boundary.
const ALLOWED_ORIGINS: &[&str] = &["http://localhost:5000"];

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok(); // Load environment variables from .env file
    env_logger::init();

    let database = db::connect().await;
    let event_collection = database.collection::<Event>("events");
    let user_collection = database.collection::<User>("users");
    let publisher_collection = database.collection::<Publisher>("publishers");
    db::ensure_unique_email_index(&user_collection).await;

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    info!("Server is running on port {port}");

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();
        for origin in ALLOWED_ORIGINS {
            cors = cors.allowed_origin(origin);
        }
        App::new()
            .wrap(cors)
            .app_data(web::Data::new(event_collection.clone()))
            .app_data(web::Data::new(user_collection.clone()))
            .app_data(web::Data::new(publisher_collection.clone()))
            .configure(event_api::routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
