use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::debug;

use crate::error::ValidationError;
use crate::libretranslate::LanguageDescriptor;
use crate::state::AppState;
use crate::translate::{TranslatePayload, TranslationResult};

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        .route("/api/health", get(health_check))

        // REST API routes
        .route("/api/translate", post(translate))
        .route("/api/languages", get(get_languages));

    // Static file serving
    match &state.config.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}

/// Full application: routes plus tracing and permissive CORS.
pub fn build_router(state: AppState) -> Router {
    create_routes(&state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    if state.backend.is_healthy().await {
        (
            StatusCode::OK,
            Json(json!({"status": "healthy", "libretranslate": "connected"})),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "unhealthy", "libretranslate": "disconnected"})),
        )
    }
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslatePayload>, JsonRejection>,
) -> Result<Json<TranslationResult>, ValidationError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Rejected translate body: {}", rejection.body_text());
        ValidationError::InvalidBody
    })?;

    let request = state.validator.validate(payload)?;
    let outcome = state
        .translator
        .translate(&request.text, &request.source_lang, &request.target_lang)
        .await;

    Ok(Json(TranslationResult {
        original_text: request.text,
        translated_text: outcome.into_text(),
        source_lang: request.source_lang,
        target_lang: request.target_lang,
    }))
}

async fn get_languages(State(state): State<AppState>) -> Json<Vec<LanguageDescriptor>> {
    Json(state.backend.languages().await)
}
