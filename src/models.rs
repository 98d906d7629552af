use chrono::{DateTime, Utc};
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};

use crate::validation;

/// A listed event. `_id` is assigned by the store on insert; events are
/// never updated or deleted by this service.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub event_name: String,
    pub event_date: String,
    pub location: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: String,
    pub views: i64,
    pub posted_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEventPayload {
    pub event_name: Option<String>,
    pub event_date: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
    pub views: Option<i64>,
}

impl NewEventPayload {
    pub fn missing_required(&self) -> Vec<&'static str> {
        validation::missing_fields(&[
            ("eventName", self.event_name.as_deref()),
            ("eventDate", self.event_date.as_deref()),
            ("location", self.location.as_deref()),
            ("image", self.image.as_deref()),
            ("description", self.description.as_deref()),
        ])
    }
}

impl Event {
    /// Builds the record to insert. Callers validate required fields first;
    /// optional fields get their fixed defaults here, independently of one
    /// another.
    pub fn from_payload(payload: &NewEventPayload, posted_date: DateTime<Utc>) -> Self {
        Event {
            id: None,
            event_name: payload.event_name.clone().unwrap_or_default(),
            event_date: payload.event_date.clone().unwrap_or_default(),
            location: payload.location.clone().unwrap_or_default(),
            image: payload.image.clone().unwrap_or_default(),
            description: payload.description.clone().unwrap_or_default(),
            tags: payload.tags.clone().unwrap_or_default(),
            status: match payload.status.as_deref() {
                Some(status) if !status.is_empty() => status.to_string(),
                _ => "pending".to_string(),
            },
            views: payload.views.unwrap_or(0),
            posted_date,
        }
    }
}

/// A user profile, keyed by email. Profile fields may be null in the store:
/// the update endpoint overwrites all of them with whatever the request
/// carried, including absent values.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewUserPayload {
    pub email: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl User {
    pub fn from_payload(payload: &NewUserPayload) -> Self {
        User {
            id: None,
            email: payload.email.clone().unwrap_or_default(),
            name: payload.name.clone(),
            image: payload.image.clone(),
            location: Some(payload.location.clone().unwrap_or_default()),
            description: Some(payload.description.clone().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserPayload {
    pub email: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl UpdateUserPayload {
    /// Full-field overwrite, not a merge: every mutable field is written,
    /// and a field the request omitted is written as null rather than kept
    /// from the stored record.
    pub fn set_document(&self) -> Document {
        doc! {
            "$set": {
                "name": string_or_null(&self.name),
                "location": string_or_null(&self.location),
                "description": string_or_null(&self.description),
                "image": string_or_null(&self.image),
            }
        }
    }
}

fn string_or_null(value: &Option<String>) -> Bson {
    match value {
        Some(v) => Bson::String(v.clone()),
        None => Bson::Null,
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub website: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewPublisherPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
}

impl NewPublisherPayload {
    pub fn missing_required(&self) -> Vec<&'static str> {
        validation::missing_fields(&[
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("website", self.website.as_deref()),
        ])
    }
}

impl Publisher {
    pub fn from_payload(payload: &NewPublisherPayload, created_at: DateTime<Utc>) -> Self {
        Publisher {
            id: None,
            name: payload.name.clone().unwrap_or_default(),
            email: payload.email.clone().unwrap_or_default(),
            website: payload.website.clone().unwrap_or_default(),
            description: payload.description.clone().unwrap_or_default(),
            logo: payload.logo.clone().unwrap_or_default(),
            created_at,
        }
    }
}
