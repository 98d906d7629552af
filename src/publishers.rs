use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use log::error;
use mongodb::bson::Bson;
use mongodb::Collection;
use serde_json::json;

use crate::db;
use crate::models::{NewPublisherPayload, Publisher};
use crate::validation;

// POST /all-publishers
pub async fn create_publisher(
    publishers: web::Data<Collection<Publisher>>,
    payload: web::Json<NewPublisherPayload>,
) -> impl Responder {
    let payload = payload.into_inner();
    let missing = payload.missing_required();
    if !missing.is_empty() {
        return validation::required_error(&missing);
    }

    let mut publisher = Publisher::from_payload(&payload, Utc::now());
    match publishers.insert_one(&publisher, None).await {
        Ok(result) => {
            if let Bson::ObjectId(id) = result.inserted_id {
                publisher.id = Some(id);
            }
            HttpResponse::Created().json(
                json!({ "message": "Publisher created successfully", "publisher": publisher }),
            )
        }
        Err(e) => {
            error!("Error creating publisher: {}", e);
            validation::server_error()
        }
    }
}

// GET /all-publishers
pub async fn list_publishers(publishers: web::Data<Collection<Publisher>>) -> impl Responder {
    let found = match publishers.find(None, None).await {
        Ok(cursor) => db::drain(cursor).await,
        Err(e) => Err(e),
    };
    match found {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => {
            error!("Error fetching publishers: {}", e);
            validation::server_error()
        }
    }
}
