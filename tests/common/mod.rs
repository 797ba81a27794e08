#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wedding_registry::{
    config::AppConfig,
    integrations::{
        email::{EmailError, EmailMessage, Mailer},
        payments::{CheckoutRequest, CheckoutSession, PaymentError, PaymentProvider},
    },
    models::SessionUser,
    seed::{self, seeded_store},
    state::AppState,
};

pub const TEST_SECRET: &str = "test-session-secret";

/// Records every message instead of delivering it.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<EmailMessage>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("mailer lock").clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<String, EmailError> {
        if self.fail {
            return Err(EmailError::Delivery("smtp down".into()));
        }
        let mut sent = self.sent.lock().expect("mailer lock");
        sent.push(message.clone());
        Ok(format!("msg-{}", sent.len()))
    }
}

/// Returns a canned checkout session, or an API error when `url` is `Err`.
pub struct FakePayments {
    pub url: Result<Option<String>, u16>,
    pub requests: Mutex<Vec<CheckoutRequest>>,
}

impl FakePayments {
    pub fn redirecting_to(url: &str) -> Self {
        Self {
            url: Ok(Some(url.to_string())),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn without_url() -> Self {
        Self {
            url: Ok(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            url: Err(status),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PaymentProvider for FakePayments {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        self.requests
            .lock()
            .expect("payments lock")
            .push(request.clone());
        match &self.url {
            Ok(url) => Ok(CheckoutSession {
                id: "cs_test_1".into(),
                url: url.clone(),
            }),
            Err(status) => Err(PaymentError::Api {
                status: *status,
                message: "declined".into(),
            }),
        }
    }
}

pub struct TestApp {
    pub state: AppState,
    pub mailer: Arc<RecordingMailer>,
    pub payments: Arc<FakePayments>,
}

pub fn test_app() -> anyhow::Result<TestApp> {
    build(
        RecordingMailer::default(),
        FakePayments::redirecting_to("https://checkout.stripe.com/c/pay/cs_test_1"),
    )
}

pub fn build(mailer: RecordingMailer, payments: FakePayments) -> anyhow::Result<TestApp> {
    let mailer = Arc::new(mailer);
    let payments = Arc::new(payments);
    let state = AppState::new(
        AppConfig::for_tests(TEST_SECRET),
        seeded_store()?,
        payments.clone(),
        mailer.clone(),
    );
    Ok(TestApp {
        state,
        mailer,
        payments,
    })
}

pub async fn session_for(state: &AppState, email: &str) -> SessionUser {
    let data = state.store.read().await;
    let user = data.user_by_email(email).expect("seeded user");
    SessionUser::from(user)
}

pub async fn demo_client(state: &AppState) -> SessionUser {
    session_for(state, seed::DEMO_CLIENT_EMAIL).await
}

pub async fn demo_franchisee(state: &AppState) -> SessionUser {
    session_for(state, seed::DEMO_FRANCHISEE_EMAIL).await
}
