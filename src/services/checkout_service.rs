use crate::{
    config::AppConfig,
    integrations::payments::{CheckoutRequest, LineItem, PaymentError},
    state::AppState,
};

pub const CHECKOUT_PRODUCT_NAME: &str = "Cadeau voor Brazilië";
pub const CHECKOUT_CURRENCY: &str = "brl";
pub const CHECKOUT_UNIT_AMOUNT: i64 = 5000;
/// Pix QR codes stay payable for one hour.
pub const PIX_EXPIRES_AFTER_SECONDS: u32 = 3600;

pub fn checkout_request(config: &AppConfig) -> CheckoutRequest {
    CheckoutRequest {
        line_items: vec![LineItem {
            name: CHECKOUT_PRODUCT_NAME.to_string(),
            currency: CHECKOUT_CURRENCY.to_string(),
            unit_amount: CHECKOUT_UNIT_AMOUNT,
            quantity: 1,
        }],
        payment_method_types: vec!["card".to_string(), "pix".to_string()],
        pix_expires_after_seconds: Some(PIX_EXPIRES_AFTER_SECONDS),
        success_url: format!(
            "{}/admin?session_id={{CHECKOUT_SESSION_ID}}",
            config.public_url
        ),
        cancel_url: format!("{}/cancel", config.public_url),
    }
}

/// Creates a hosted checkout session and returns the url to send the browser to.
pub async fn start_checkout(state: &AppState) -> Result<String, PaymentError> {
    let request = checkout_request(&state.config);
    let session = state.payments.create_checkout_session(&request).await?;
    session
        .url
        .ok_or_else(|| PaymentError::MissingUrl(session.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_request_carries_the_fixed_line_item() {
        let request = checkout_request(&AppConfig::for_tests("secret"));
        assert_eq!(request.line_items.len(), 1);
        assert_eq!(request.line_items[0].unit_amount, 5000);
        assert_eq!(request.line_items[0].currency, "brl");
        assert_eq!(
            request.success_url,
            "http://localhost:3000/admin?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(request.cancel_url, "http://localhost:3000/cancel");
    }
}
