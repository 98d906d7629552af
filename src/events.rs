use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use log::error;
use mongodb::bson::{doc, oid::ObjectId, Bson};
use mongodb::options::FindOptions;
use mongodb::Collection;
use serde_json::json;

use crate::db;
use crate::models::{Event, NewEventPayload};
use crate::validation;

// POST /add-event
pub async fn add_event(
    events: web::Data<Collection<Event>>,
    payload: web::Json<NewEventPayload>,
) -> impl Responder {
    let payload = payload.into_inner();
    let missing = payload.missing_required();
    if !missing.is_empty() {
        return validation::required_error(&missing);
    }

    let mut event = Event::from_payload(&payload, Utc::now());
    match events.insert_one(&event, None).await {
        Ok(result) => match result.inserted_id {
            Bson::ObjectId(id) => {
                event.id = Some(id);
                HttpResponse::Created()
                    .json(json!({ "message": "Event added successfully", "event": event }))
            }
            other => {
                error!("Event insert reported a non-ObjectId id: {}", other);
                validation::server_error()
            }
        },
        Err(e) => {
            error!("Error adding event: {}", e);
            validation::server_error()
        }
    }
}

// GET /all-events — the public listing: approved only, most-viewed first.
pub async fn approved_events(events: web::Data<Collection<Event>>) -> impl Responder {
    let options = FindOptions::builder().sort(doc! { "views": -1 }).build();
    let found = match events.find(doc! { "status": "approved" }, options).await {
        Ok(cursor) => db::drain(cursor).await,
        Err(e) => Err(e),
    };
    match found {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => {
            error!("Error fetching approved events: {}", e);
            validation::server_error()
        }
    }
}

// GET /events — every event regardless of status; an empty collection is an
// empty list, same as the filtered listing.
pub async fn all_events(events: web::Data<Collection<Event>>) -> impl Responder {
    let found = match events.find(None, None).await {
        Ok(cursor) => db::drain(cursor).await,
        Err(e) => Err(e),
    };
    match found {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => {
            error!("Error fetching events: {}", e);
            validation::server_error()
        }
    }
}

// GET /event/{id}
pub async fn event_by_id(
    events: web::Data<Collection<Event>>,
    id: web::Path<String>,
) -> impl Responder {
    // No format pre-validation exists for ids; a malformed one is an
    // infrastructure-class failure, not a 404.
    let object_id = match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => oid,
        Err(e) => {
            error!("Malformed event id {:?}: {}", id.as_str(), e);
            return validation::server_error();
        }
    };
    match events.find_one(doc! { "_id": object_id }, None).await {
        Ok(Some(event)) => HttpResponse::Ok().json(event),
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": "Event not found" })),
        Err(e) => {
            error!("Error fetching event: {}", e);
            validation::server_error()
        }
    }
}
