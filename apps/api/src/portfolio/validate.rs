//! Request validation: the only constructor of [`GenerationRequest`].
//!
//! The body is inspected as raw JSON rather than deserialized into a typed
//! struct so that a missing, non-string, or too-short `resumeText` all
//! collapse into the same 400 response instead of an extractor rejection.

use serde_json::Value;

use crate::errors::AppError;

/// Minimum résumé length (in chars) worth sending upstream. Anything
/// shorter produces garbage portfolios.
pub const MIN_RESUME_CHARS: usize = 100;

pub const DEFAULT_PRIMARY: &str = "#1F5EFF";
pub const DEFAULT_ACCENT: &str = "#3B82F6";
pub const DEFAULT_DARK: &str = "#0F172A";

/// A validated generation request. Color fields are always populated;
/// absent ones take the fixed theme defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub resume_text: String,
    pub primary_color: String,
    pub accent_color: String,
    pub dark_color: String,
}

/// Validates the inbound JSON body and applies color defaults.
pub fn validate_request(body: &Value) -> Result<GenerationRequest, AppError> {
    let resume_text = body
        .get("resumeText")
        .and_then(Value::as_str)
        .ok_or(AppError::InvalidResumeText)?;

    if resume_text.chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::InvalidResumeText);
    }

    Ok(GenerationRequest {
        resume_text: resume_text.to_string(),
        primary_color: color_or_default(body, "primaryColor", DEFAULT_PRIMARY),
        accent_color: color_or_default(body, "accentColor", DEFAULT_ACCENT),
        dark_color: color_or_default(body, "darkColor", DEFAULT_DARK),
    })
}

fn color_or_default(body: &Value, key: &str, default: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}
