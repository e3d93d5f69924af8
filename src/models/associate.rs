use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::event_request::ReviewStatus;
use crate::utils::error::AppError;

const IMAGE_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".svg", ".webp"];

/// Optional membership-registration data collected with the application
/// form. None of it gates approval; it exists for the bureau's records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub razao_social: Option<String>,
    pub cnpj: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub employee_count: Option<i32>,
}

/// A member business of the bureau. The row itself is the published record:
/// the public directory simply filters on `status = approved`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Associate {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub logo_url: String,
    pub instagram: Option<String>,
    pub site_url: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub registration: Registration,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public application body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatePayload {
    pub name: String,
    pub category: String,
    pub logo_url: String,
    pub instagram: Option<String>,
    pub site_url: Option<String>,
    #[serde(flatten)]
    pub registration: Registration,
}

impl AssociatePayload {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("logoUrl", &self.logo_url),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Field '{field}' is required"
                )));
            }
        }

        let logo = self.logo_url.to_lowercase();
        if !IMAGE_EXTENSIONS.iter().any(|ext| logo.ends_with(ext)) {
            return Err(AppError::ValidationError(
                "Field 'logoUrl' must point to an image file".to_string(),
            ));
        }

        if let Some(email) = &self.registration.contact_email {
            if !email.trim().is_empty() && !email.contains('@') {
                return Err(AppError::ValidationError(
                    "Field 'contactEmail' must be a valid email address".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AssociatePayload {
        AssociatePayload {
            name: "Hotel Serra Azul".to_string(),
            category: "Hospedagem".to_string(),
            logo_url: "https://cdn.example.org/media/logos/serra-azul.png".to_string(),
            instagram: Some("https://instagram.com/hotelserraazul".to_string()),
            site_url: None,
            registration: Registration {
                razao_social: Some("Serra Azul Hotelaria Ltda".to_string()),
                cnpj: Some("12.345.678/0001-90".to_string()),
                contact_email: Some("contato@serraazul.com.br".to_string()),
                ..Registration::default()
            },
        }
    }

    #[test]
    fn valid_application_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn non_image_logo_is_blocked() {
        let mut p = payload();
        p.logo_url = "https://cdn.example.org/media/logos/serra-azul.pdf".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn malformed_contact_email_is_blocked() {
        let mut p = payload();
        p.registration.contact_email = Some("contato.serraazul".to_string());
        assert!(p.validate().is_err());
    }
}
