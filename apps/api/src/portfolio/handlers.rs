//! Axum route handler for the portfolio generation pipeline.
//!
//! Flow: validate body → credential check → build prompt → completion call →
//! sanitize → respond. Every stage failure is terminal for the request and
//! maps to the JSON error contract in `errors.rs`.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::portfolio::builder::build_prompt;
use crate::portfolio::sanitize::sanitize;
use crate::portfolio::validate::validate_request;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GeneratePortfolioResponse {
    pub html: String,
}

/// POST /api/v1/portfolio/generate
///
/// Converts free-text résumé content into a self-contained HTML portfolio
/// document using the deployment's configured template profile.
pub async fn handle_generate_portfolio(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<GeneratePortfolioResponse>, AppError> {
    info!("Portfolio generation request received");

    let request = validate_request(&body)?;

    // Short-circuit before any prompt work when the credential is absent.
    let backend = state.llm.as_ref().ok_or(AppError::MissingApiKey)?;

    let spec = build_prompt(&request, state.config.profile);

    info!(profile = ?state.config.profile, "Calling completion API");
    let raw = backend.complete(&spec).await?;

    info!("Cleaning generated response ({} bytes raw)", raw.len());
    let document = sanitize(&raw)?;

    info!("Portfolio generated ({} bytes html)", document.html.len());

    Ok(Json(GeneratePortfolioResponse {
        html: document.html,
    }))
}
