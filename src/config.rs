use std::env;

use secrecy::SecretString;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Origin used to build absolute links (invite emails, checkout return urls).
    pub public_url: String,
    pub session_secret: SecretString,
    pub cookie_secure: bool,
    pub stripe_secret_key: Option<SecretString>,
    pub stripe_api_base: String,
    pub resend_api_key: Option<SecretString>,
    pub email_from: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let session_secret = env::var("SESSION_SECRET")
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET is not set"))?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let public_url = env::var("PUBLIC_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| format!("http://{host}:{port}"));
        let cookie_secure = env_bool("COOKIE_SECURE").unwrap_or(false);

        Ok(Self {
            host,
            port,
            public_url,
            session_secret: SecretString::from(session_secret),
            cookie_secure,
            stripe_secret_key: env_secret("STRIPE_SECRET_KEY"),
            stripe_api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
            resend_api_key: env_secret("RESEND_API_KEY"),
            email_from: env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "registry@example.com".to_string()),
        })
    }

    /// Configuration for tests and local tooling: no external credentials.
    pub fn for_tests(session_secret: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            public_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from(session_secret.to_string()),
            cookie_secure: false,
            stripe_secret_key: None,
            stripe_api_base: "https://api.stripe.com".to_string(),
            resend_api_key: None,
            email_from: "registry@example.com".to_string(),
        }
    }
}

/// Reads a boolean flag; see [`parse_bool`] for the accepted spellings.
pub fn env_bool(key: &str) -> Option<bool> {
    env::var(key).ok().and_then(|raw| parse_bool(&raw))
}

/// Accepts 1/0, true/false, yes/no, on/off in any case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_secret(key: &str) -> Option<SecretString> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(SecretString::from)
}
