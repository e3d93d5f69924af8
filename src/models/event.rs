use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Conference,
    Workshop,
    Seminar,
    Exhibition,
    Networking,
    Cultural,
    Sports,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
    /// Status given to events spawned from an approved public submission.
    Open,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: String,
    pub image_url: Option<String>,
    pub external_link: Option<String>,
    pub is_featured: bool,
    pub category: EventCategory,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Key the public listing groups its sections under, e.g. "2025-12".
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Body of admin create/update calls and of the record spawned by approving
/// a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: String,
    pub image_url: Option<String>,
    pub external_link: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub category: EventCategory,
    pub status: EventStatus,
}

impl EventPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Field '{field}' is required"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EventPayload {
        EventPayload {
            title: "Festival de Inverno".to_string(),
            description: "Programação cultural da serra".to_string(),
            date: "2025-12-01T19:00:00Z".parse().unwrap(),
            end_date: None,
            location: "Praça Central".to_string(),
            image_url: None,
            external_link: None,
            is_featured: false,
            category: EventCategory::Cultural,
            status: EventStatus::Upcoming,
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut p = payload();
        p.title = "   ".to_string();
        assert!(p.validate().is_err());
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&EventCategory::Sports).unwrap();
        assert_eq!(json, "\"sports\"");
    }
}
