use actix_web::{web, HttpResponse, Responder};
use log::error;
use mongodb::bson::{doc, Bson};
use mongodb::Collection;
use serde_json::json;

use crate::db;
use crate::models::{NewUserPayload, UpdateUserPayload, User};
use crate::validation;

// POST /users
pub async fn create_user(
    users: web::Data<Collection<User>>,
    payload: web::Json<NewUserPayload>,
) -> impl Responder {
    let payload = payload.into_inner();
    if !validation::is_present(payload.email.as_deref()) {
        return validation::required_error(&["email"]);
    }
    let email = payload.email.clone().unwrap_or_default();

    match users.find_one(doc! { "email": &email }, None).await {
        Ok(Some(_)) => HttpResponse::BadRequest().json(json!({ "message": "User already exists" })),
        Ok(None) => {
            let mut user = User::from_payload(&payload);
            match users.insert_one(&user, None).await {
                Ok(result) => {
                    if let Bson::ObjectId(id) = result.inserted_id {
                        user.id = Some(id);
                    }
                    HttpResponse::Created()
                        .json(json!({ "message": "User created successfully", "user": user }))
                }
                // Lost the race to a concurrent create; same outcome as the
                // pre-insert check.
                Err(e) if db::is_duplicate_key(&e) => HttpResponse::BadRequest()
                    .json(json!({ "message": "User already exists" })),
                Err(e) => {
                    error!("Error creating user: {}", e);
                    validation::server_error()
                }
            }
        }
        Err(e) => {
            error!("Error creating user: {}", e);
            validation::server_error()
        }
    }
}

// GET /users
pub async fn list_users(users: web::Data<Collection<User>>) -> impl Responder {
    let found = match users.find(None, None).await {
        Ok(cursor) => db::drain(cursor).await,
        Err(e) => Err(e),
    };
    match found {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => {
            error!("Error fetching users: {}", e);
            validation::server_error()
        }
    }
}

// PUT /users — overwrites every mutable field with what the request carried.
pub async fn update_user(
    users: web::Data<Collection<User>>,
    payload: web::Json<UpdateUserPayload>,
) -> impl Responder {
    let payload = payload.into_inner();
    if !validation::is_present(payload.email.as_deref()) {
        return validation::required_error(&["email"]);
    }
    let email = payload.email.clone().unwrap_or_default();

    match users.find_one(doc! { "email": &email }, None).await {
        Ok(Some(_)) => {
            match users
                .update_one(doc! { "email": &email }, payload.set_document(), None)
                .await
            {
                Ok(result) => HttpResponse::Ok().json(json!({
                    "message": "User updated successfully",
                    "updatedUser": {
                        "matchedCount": result.matched_count,
                        "modifiedCount": result.modified_count,
                    },
                })),
                Err(e) => {
                    error!("Error updating user: {}", e);
                    validation::server_error()
                }
            }
        }
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": "User not found" })),
        Err(e) => {
            error!("Error updating user: {}", e);
            validation::server_error()
        }
    }
}

// GET /users/{email}
pub async fn user_by_email(
    users: web::Data<Collection<User>>,
    email: web::Path<String>,
) -> impl Responder {
    match users
        .find_one(doc! { "email": email.as_str() }, None)
        .await
    {
        Ok(Some(user)) => HttpResponse::Ok()
            .json(json!({ "message": "User profile fetched successfully", "user": user })),
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": "User not found" })),
        Err(e) => {
            error!("Error fetching user profile: {}", e);
            validation::server_error()
        }
    }
}
