use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::{Associate, EventRequest};
use crate::utils::error::AppError;

pub mod templates;

use templates::Rendered;

/// Which associate notification to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssociateMailAction {
    New,
    Approved,
    Rejected,
}

/// SMTP dispatch for the site's notifications. Without SMTP_HOST the mailer
/// runs disabled: sends are logged and reported as success so local
/// environments work without a provider.
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
    admin: String,
    public_url: String,
}

impl Mailer {
    pub fn from_config(config: &Config) -> Self {
        let smtp = &config.smtp;
        let transport = match &smtp.host {
            Some(host) => match AsyncSmtpTransport::<Tokio1Executor>::relay(host) {
                Ok(builder) => Some(
                    builder
                        .credentials(Credentials::new(
                            smtp.username.clone(),
                            smtp.password.clone(),
                        ))
                        .build(),
                ),
                Err(err) => {
                    tracing::warn!(error = %err, "Invalid SMTP relay host, mail delivery disabled");
                    None
                }
            },
            None => {
                tracing::info!("SMTP_HOST not set, mail delivery disabled");
                None
            }
        };

        Self {
            transport,
            from: smtp.from.clone(),
            admin: smtp.admin_email.clone(),
            public_url: config.public_url.clone(),
        }
    }

    async fn deliver(&self, to: &str, rendered: Rendered) -> Result<(), AppError> {
        let Rendered {
            subject,
            text,
            html,
        } = rendered;

        let Some(transport) = &self.transport else {
            tracing::info!(%to, %subject, "Mail disabled, skipping delivery");
            return Ok(());
        };

        let message = Message::builder()
            .from(self
                .from
                .parse()
                .map_err(|e| AppError::MailError(format!("invalid sender address: {e}")))?)
            .to(to
                .parse()
                .map_err(|e| AppError::MailError(format!("invalid recipient '{to}': {e}")))?)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(text, html))
            .map_err(|e| AppError::MailError(format!("could not build message: {e}")))?;

        transport
            .send(message)
            .await
            .map_err(|e| AppError::MailError(e.to_string()))?;

        Ok(())
    }

    /// Tells the bureau a new event proposal arrived.
    pub async fn send_admin_notification(&self, request: &EventRequest) -> Result<(), AppError> {
        self.deliver(
            &self.admin,
            templates::admin_notification(request, &self.public_url),
        )
        .await
    }

    /// Confirms receipt to the person who proposed the event.
    pub async fn send_confirmation(&self, request: &EventRequest) -> Result<(), AppError> {
        self.deliver(&request.submitted_by.email, templates::confirmation(request))
            .await
    }

    pub async fn send_approval(&self, request: &EventRequest) -> Result<(), AppError> {
        self.deliver(&request.submitted_by.email, templates::approval(request))
            .await
    }

    pub async fn send_rejection(&self, request: &EventRequest, reason: &str) -> Result<(), AppError> {
        self.deliver(
            &request.submitted_by.email,
            templates::rejection(request, reason),
        )
        .await
    }

    /// New applications notify the bureau; review outcomes notify the
    /// associate's contact address when one was provided.
    pub async fn send_associate_email(
        &self,
        associate: &Associate,
        action: AssociateMailAction,
    ) -> Result<(), AppError> {
        match action {
            AssociateMailAction::New => {
                self.deliver(&self.admin, templates::associate_new(associate, &self.public_url))
                    .await
            }
            AssociateMailAction::Approved | AssociateMailAction::Rejected => {
                let Some(to) = associate
                    .registration
                    .contact_email
                    .as_deref()
                    .filter(|e| !e.trim().is_empty())
                else {
                    tracing::warn!(associate_id = %associate.id, "Associate has no contact email, skipping status notification");
                    return Ok(());
                };
                let rendered = if action == AssociateMailAction::Approved {
                    templates::associate_approved(associate)
                } else {
                    templates::associate_rejected(associate)
                };
                self.deliver(to, rendered).await
            }
        }
    }
}

/// Notifications triggered by a committed state change must never undo it:
/// a failed send is logged and the request continues.
pub fn log_failure(result: Result<(), AppError>, context: &'static str) {
    if let Err(err) = result {
        tracing::warn!(error = %err, context, "Email delivery failed (non-fatal)");
    }
}
