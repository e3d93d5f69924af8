use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::event::{EventCategory, EventPayload, EventStatus};
use crate::utils::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "review_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    /// Event requests are write-once: a pending submission moves to one of
    /// the two terminal outcomes and stays there.
    pub fn request_can_transition(self, to: ReviewStatus) -> bool {
        matches!(
            (self, to),
            (
                ReviewStatus::Pending,
                ReviewStatus::Approved | ReviewStatus::Rejected
            )
        )
    }

    /// Associates additionally allow manual correction between the two
    /// reviewed states. Event requests deliberately do not.
    pub fn associate_can_transition(self, to: ReviewStatus) -> bool {
        self.request_can_transition(to)
            || matches!(
                (self, to),
                (ReviewStatus::Approved, ReviewStatus::Rejected)
                    | (ReviewStatus::Rejected, ReviewStatus::Approved)
            )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Submitter {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: String,
    pub image_url: Option<String>,
    pub external_link: Option<String>,
    pub category: EventCategory,
    #[sqlx(flatten)]
    pub submitted_by: Submitter,
    pub status: ReviewStatus,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
}

impl EventRequest {
    /// The event record an approval publishes. Featured placement and a
    /// curated status are admin decisions, never inherited from the
    /// submission, so the copy always starts unfeatured and open.
    pub fn to_event_payload(&self) -> EventPayload {
        EventPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date,
            end_date: self.end_date,
            location: self.location.clone(),
            image_url: self.image_url.clone(),
            external_link: self.external_link.clone(),
            is_featured: false,
            category: self.category,
            status: EventStatus::Open,
        }
    }
}

/// Public submission body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequestPayload {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: String,
    pub image_url: Option<String>,
    pub external_link: Option<String>,
    pub category: EventCategory,
    pub submitted_by: Submitter,
}

impl EventRequestPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("location", &self.location),
            ("submittedBy.name", &self.submitted_by.name),
            ("submittedBy.email", &self.submitted_by.email),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Field '{field}' is required"
                )));
            }
        }
        if !self.submitted_by.email.contains('@') {
            return Err(AppError::ValidationError(
                "Field 'submittedBy.email' must be a valid email address".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_request() -> EventRequest {
        EventRequest {
            id: Uuid::new_v4(),
            title: "Feira de Artesanato".to_string(),
            description: "Exposição de artesãos locais".to_string(),
            date: "2026-03-10T09:00:00Z".parse().unwrap(),
            end_date: Some("2026-03-12T18:00:00Z".parse().unwrap()),
            location: "Centro de Convenções".to_string(),
            image_url: Some("https://cdn.example.org/media/feira.jpg".to_string()),
            external_link: None,
            category: EventCategory::Exhibition,
            submitted_by: Submitter {
                name: "Maria Souza".to_string(),
                email: "maria@example.org".to_string(),
                phone: Some("+55 54 99999-0000".to_string()),
                organization: Some("Associação dos Artesãos".to_string()),
            },
            status: ReviewStatus::Pending,
            submitted_at: Utc::now(),
            reviewed_at: None,
            rejection_reason: None,
        }
    }

    #[test]
    fn request_transitions_are_terminal() {
        use ReviewStatus::*;
        assert!(Pending.request_can_transition(Approved));
        assert!(Pending.request_can_transition(Rejected));
        assert!(!Approved.request_can_transition(Rejected));
        assert!(!Rejected.request_can_transition(Approved));
        assert!(!Approved.request_can_transition(Pending));
    }

    #[test]
    fn associate_transitions_allow_corrections() {
        use ReviewStatus::*;
        assert!(Approved.associate_can_transition(Rejected));
        assert!(Rejected.associate_can_transition(Approved));
        assert!(!Approved.associate_can_transition(Pending));
    }

    #[test]
    fn approval_payload_copies_fields_and_forces_defaults() {
        let request = pending_request();
        let payload = request.to_event_payload();
        assert_eq!(payload.title, request.title);
        assert_eq!(payload.description, request.description);
        assert_eq!(payload.date, request.date);
        assert_eq!(payload.location, request.location);
        assert_eq!(payload.end_date, request.end_date);
        assert_eq!(payload.image_url, request.image_url);
        assert!(payload.external_link.is_none());
        assert!(!payload.is_featured);
        assert_eq!(payload.status, EventStatus::Open);
    }

    #[test]
    fn submission_requires_contact_email() {
        let request = pending_request();
        let mut payload = EventRequestPayload {
            title: request.title.clone(),
            description: request.description.clone(),
            date: request.date,
            end_date: None,
            location: request.location.clone(),
            image_url: None,
            external_link: None,
            category: request.category,
            submitted_by: request.submitted_by.clone(),
        };
        assert!(payload.validate().is_ok());
        payload.submitted_by.email = "not-an-email".to_string();
        assert!(payload.validate().is_err());
        payload.submitted_by.email = String::new();
        assert!(payload.validate().is_err());
    }
}
