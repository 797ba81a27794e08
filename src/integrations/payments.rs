//! Hosted checkout sessions.
//!
//! The registry only ever creates a session and redirects the browser to the
//! provider's hosted page; fulfilment happens on the provider side.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Missing required credential: {0}")]
    MissingCredential(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Checkout session {0} has no redirect url")]
    MissingUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    /// ISO currency code, lowercase.
    pub currency: String,
    /// Amount in the currency's minor unit.
    pub unit_amount: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub line_items: Vec<LineItem>,
    pub payment_method_types: Vec<String>,
    /// Lifetime of a Pix QR code, when Pix is offered.
    pub pix_expires_after_seconds: Option<u32>,
    pub success_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: Option<String>,
}

#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError>;
}

pub struct StripeClient {
    client: reqwest::Client,
    api_base: String,
    secret_key: Option<SecretString>,
}

impl StripeClient {
    pub fn new(config: &AppConfig) -> Result<Self, PaymentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self {
            client,
            api_base: config.stripe_api_base.trim_end_matches('/').to_string(),
            secret_key: config.stripe_secret_key.clone(),
        })
    }
}

#[async_trait]
impl PaymentProvider for StripeClient {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let secret_key = self
            .secret_key
            .as_ref()
            .ok_or(PaymentError::MissingCredential("STRIPE_SECRET_KEY"))?;

        let url = format!("{}/v1/checkout/sessions", self.api_base);
        let response = self
            .client
            .post(&url)
            .bearer_auth(secret_key.expose_secret())
            .form(&form_params(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body
                .pointer("/error/message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error")
                .to_string();
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let session: CheckoutSession = response.json().await?;
        tracing::debug!(session_id = %session.id, "checkout session created");
        Ok(session)
    }
}

/// Flattens a checkout request into the bracketed form encoding the Stripe API expects.
pub fn form_params(request: &CheckoutRequest) -> Vec<(String, String)> {
    let mut params = vec![("mode".to_string(), "payment".to_string())];

    for (i, method) in request.payment_method_types.iter().enumerate() {
        params.push((format!("payment_method_types[{i}]"), method.clone()));
    }

    for (i, item) in request.line_items.iter().enumerate() {
        let prefix = format!("line_items[{i}]");
        params.push((
            format!("{prefix}[price_data][currency]"),
            item.currency.clone(),
        ));
        params.push((
            format!("{prefix}[price_data][product_data][name]"),
            item.name.clone(),
        ));
        params.push((
            format!("{prefix}[price_data][unit_amount]"),
            item.unit_amount.to_string(),
        ));
        params.push((format!("{prefix}[quantity]"), item.quantity.to_string()));
    }

    if let Some(seconds) = request.pix_expires_after_seconds {
        params.push((
            "payment_method_options[pix][expires_after_seconds]".to_string(),
            seconds.to_string(),
        ));
    }

    params.push(("success_url".to_string(), request.success_url.clone()));
    params.push(("cancel_url".to_string(), request.cancel_url.clone()));
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_params_use_bracket_notation() {
        let request = CheckoutRequest {
            line_items: vec![LineItem {
                name: "Gift".into(),
                currency: "brl".into(),
                unit_amount: 5000,
                quantity: 1,
            }],
            payment_method_types: vec!["card".into(), "pix".into()],
            pix_expires_after_seconds: Some(3600),
            success_url: "http://x/ok".into(),
            cancel_url: "http://x/cancel".into(),
        };

        let params = form_params(&request);
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("mode"), Some("payment"));
        assert_eq!(get("payment_method_types[1]"), Some("pix"));
        assert_eq!(get("line_items[0][price_data][unit_amount]"), Some("5000"));
        assert_eq!(get("line_items[0][price_data][product_data][name]"), Some("Gift"));
        assert_eq!(get("payment_method_options[pix][expires_after_seconds]"), Some("3600"));
        assert_eq!(get("cancel_url"), Some("http://x/cancel"));
    }

    #[tokio::test]
    async fn missing_secret_key_fails_before_any_request() {
        let stripe = StripeClient::new(&AppConfig::for_tests("secret")).unwrap();
        let request = CheckoutRequest {
            line_items: vec![],
            payment_method_types: vec!["card".into()],
            pix_expires_after_seconds: None,
            success_url: "http://x/ok".into(),
            cancel_url: "http://x/cancel".into(),
        };
        let err = stripe.create_checkout_session(&request).await.unwrap_err();
        assert!(matches!(err, PaymentError::MissingCredential("STRIPE_SECRET_KEY")));
    }
}
