use crate::config::Config;
use crate::errors::AppError;
use crate::models::*;
use crate::normalizer::{digits_only, format_cpf, format_phone, to_e164, validate_cpf};
use crate::settlement::{calculate_settlement, SettlementQuote, SettlementRequest};
use crate::whatsapp::whatsapp_link as build_whatsapp_link;
use crate::whatsapp::whatsapp_number;
use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    Json,
};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Moment the service started, reported by the health check.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            started_at: Utc::now(),
        }
    }
}

/// Health check endpoint.
///
/// Returns the service status, version and uptime.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<serde_json::Value>) {
    let uptime = Utc::now()
        .signed_duration_since(state.started_at)
        .num_seconds()
        .max(0);

    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "uptime_seconds": uptime
        })),
    )
}

/// GET /api/v1/cpf
///
/// Strips, masks and validates a CPF. Invalid CPFs are not an error here:
/// the answer carries `valid: false` so the form can render a message.
#[utoipa::path(
    get,
    path = "/api/v1/cpf",
    tag = "normalizer",
    params(IdentifierQuery),
    responses((status = 200, description = "CPF normalized", body = CpfNormalization))
)]
pub async fn normalize_cpf(Query(params): Query<IdentifierQuery>) -> Json<CpfNormalization> {
    let valid = validate_cpf(&params.value);
    if !valid {
        tracing::debug!("CPF failed validation: {}", params.value);
    }

    Json(CpfNormalization {
        digits: digits_only(&params.value),
        formatted: format_cpf(&params.value),
        valid,
        input: params.value,
    })
}

/// GET /api/v1/phone
///
/// Strips, masks and validates a phone number. `kind` is reported only for
/// valid numbers; `e164` only when libphonenumber recognises the number.
#[utoipa::path(
    get,
    path = "/api/v1/phone",
    tag = "normalizer",
    params(IdentifierQuery),
    responses((status = 200, description = "Phone normalized", body = PhoneNormalization))
)]
pub async fn normalize_phone(Query(params): Query<IdentifierQuery>) -> Json<PhoneNormalization> {
    let parsed = PhoneNumber::parse(&params.value).ok();

    Json(PhoneNormalization {
        digits: digits_only(&params.value),
        formatted: format_phone(&params.value),
        valid: parsed.is_some(),
        kind: parsed.as_ref().map(PhoneNumber::kind),
        e164: parsed.as_ref().and_then(|p| to_e164(p.as_str())),
        input: params.value,
    })
}

/// GET /api/v1/whatsapp/link
///
/// Builds the `wa.me` link for a customer phone number.
#[utoipa::path(
    get,
    path = "/api/v1/whatsapp/link",
    tag = "whatsapp",
    params(WhatsAppQuery),
    responses(
        (status = 200, description = "Link built", body = WhatsAppLinkResponse),
        (status = 400, description = "Missing or invalid phone number")
    )
)]
pub async fn whatsapp_link(
    Query(params): Query<WhatsAppQuery>,
) -> Result<Json<WhatsAppLinkResponse>, AppError> {
    let url = build_whatsapp_link(&params.telefone, params.message.as_deref())?;

    tracing::debug!("WhatsApp link generated for {}", format_phone(&params.telefone));

    Ok(Json(WhatsAppLinkResponse {
        number: whatsapp_number(&params.telefone),
        url: url.to_string(),
    }))
}

/// POST /calculadora/quitacao
///
/// Quotes the early-settlement value of a loan.
#[utoipa::path(
    post,
    path = "/calculadora/quitacao",
    tag = "calculadora",
    request_body = SettlementRequest,
    responses(
        (status = 200, description = "Settlement quote", body = SettlementQuote),
        (status = 400, description = "Negative or non-finite amounts"),
        (status = 422, description = "Missing or mistyped fields")
    )
)]
pub async fn quitacao(
    Json(payload): Json<SettlementRequest>,
) -> Result<Json<SettlementQuote>, AppError> {
    tracing::info!(
        "POST /calculadora/quitacao - {} installments remaining",
        payload.remaining_installments
    );

    let quote = calculate_settlement(&payload)?;
    Ok(Json(quote))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
