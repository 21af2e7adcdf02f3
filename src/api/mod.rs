//! HTTP surface: route table and OpenAPI document.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{self, AppState};
use crate::models::{CpfNormalization, PhoneKind, PhoneNormalization, WhatsAppLinkResponse};
use crate::settlement::{SettlementQuote, SettlementRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::normalize_cpf,
        handlers::normalize_phone,
        handlers::whatsapp_link,
        handlers::quitacao,
    ),
    components(schemas(
        CpfNormalization,
        PhoneKind,
        PhoneNormalization,
        WhatsAppLinkResponse,
        SettlementRequest,
        SettlementQuote,
    )),
    tags(
        (name = "normalizer", description = "CPF and phone validation and masks"),
        (name = "whatsapp", description = "WhatsApp deep links"),
        (name = "calculadora", description = "Loan settlement quotes"),
        (name = "system", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Application routes, without rate limiting.
///
/// `/health` is merged in by the caller so it can stay outside the
/// governor layer.
pub fn routes(state: &AppState) -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/v1/cpf", get(handlers::normalize_cpf))
        .route("/api/v1/phone", get(handlers::normalize_phone))
        .route("/api/v1/whatsapp/link", get(handlers::whatsapp_link))
        .route("/calculadora/quitacao", post(handlers::quitacao))
        // Request size limit (prevents memory exhaustion)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_bytes))
}

/// Wraps the protected routes with the health check and the shared layers.
pub fn app(state: Arc<AppState>, protected_routes: Router<Arc<AppState>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(protected_routes)
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Dashboard is served from another origin
        .layer(CorsLayer::permissive())
}

/// Full router without rate limiting, as used by tests.
pub fn router(state: Arc<AppState>) -> Router {
    let protected_routes = routes(&state);
    app(state, protected_routes)
}
