use std::sync::Arc;

use crate::{
    config::AppConfig,
    integrations::{email::Mailer, payments::PaymentProvider},
    store::Store,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<Store>,
    pub payments: Arc<dyn PaymentProvider>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Store,
        payments: Arc<dyn PaymentProvider>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            payments,
            mailer,
        }
    }
}
