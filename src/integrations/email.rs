//! Transactional email delivery.

use askama::Template;
use async_trait::async_trait;
use resend_rs::{Resend, types::CreateEmailBaseOptions};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Missing required credential: {0}. Please set this environment variable.")]
    MissingCredential(&'static str),

    #[error("Email delivery failed: {0}")]
    Delivery(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Invitation to create a registry, sent by a franchise partner.
#[derive(Template)]
#[template(path = "email/invite.html")]
pub struct InviteEmailHtml<'a> {
    pub name: &'a str,
    pub company: &'a str,
    pub link: &'a str,
    pub expires: &'a str,
}

#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Result of a send attempt; failures are reported, never raised.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmailOutcome {
    pub success: bool,
    pub message_id: Option<String>,
    pub error: Option<String>,
}

impl EmailOutcome {
    pub fn failed(err: &EmailError) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(err.to_string()),
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Returns the provider's message id.
    async fn send(&self, message: &EmailMessage) -> Result<String, EmailError>;
}

pub struct ResendMailer {
    client: Option<Resend>,
    from: String,
}

impl ResendMailer {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_key(config.resend_api_key.as_ref(), &config.email_from)
    }

    pub fn with_key(api_key: Option<&SecretString>, from: &str) -> Self {
        Self {
            client: api_key.map(|key| Resend::new(key.expose_secret())),
            from: from.to_string(),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &EmailMessage) -> Result<String, EmailError> {
        let client = self
            .client
            .as_ref()
            .ok_or(EmailError::MissingCredential("RESEND_API_KEY"))?;

        let email = CreateEmailBaseOptions::new(
            self.from.as_str(),
            [message.to.as_str()],
            message.subject.as_str(),
        )
        .with_html(&message.html);

        let response = client
            .emails
            .send(email)
            .await
            .map_err(|e| EmailError::Delivery(e.to_string()))?;
        Ok(response.id.to_string())
    }
}

pub async fn send_email(
    mailer: &dyn Mailer,
    to: &str,
    subject: &str,
    html: String,
) -> EmailOutcome {
    tracing::info!(recipient = to, subject, body_len = html.len(), "sending email");

    let message = EmailMessage {
        to: to.to_string(),
        subject: subject.to_string(),
        html,
    };

    match mailer.send(&message).await {
        Ok(message_id) => {
            tracing::info!(recipient = to, message_id = %message_id, "email sent");
            EmailOutcome {
                success: true,
                message_id: Some(message_id),
                error: None,
            }
        }
        Err(err) => {
            tracing::error!(recipient = to, error = %err, "email send failed");
            EmailOutcome::failed(&err)
        }
    }
}
