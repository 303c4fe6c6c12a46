use anyhow::{Context, Result};

use crate::portfolio::builder::TemplateProfile;

/// Application configuration loaded from environment variables.
///
/// `GROQ_API_KEY` is deliberately optional at startup: its absence is
/// surfaced per-request as a 500 so the service still boots (and health
/// checks pass) in environments where the secret is provisioned late.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub profile: TemplateProfile,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let profile = match std::env::var("TEMPLATE_PROFILE") {
            Ok(raw) => raw
                .parse::<TemplateProfile>()
                .context("TEMPLATE_PROFILE must be 'mobile-card' or 'saas-theme'")?,
            Err(_) => TemplateProfile::MobileCard,
        };

        Ok(Config {
            groq_api_key: std::env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty()),
            profile,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
