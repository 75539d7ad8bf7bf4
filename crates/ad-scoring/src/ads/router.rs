use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::repository::AdRepository;
use super::service::{AdsService, AdsServiceError};

/// Router builder exposing scoring and listing endpoints.
pub fn ads_router<R>(service: Arc<AdsService<R>>) -> Router
where
    R: AdRepository + 'static,
{
    Router::new()
        .route("/api/v1/ads/scores", post(score_all_handler::<R>))
        .route("/api/v1/ads/public", get(public_ads_handler::<R>))
        .route("/api/v1/ads/quality", get(quality_ads_handler::<R>))
        .with_state(service)
}

pub(crate) async fn score_all_handler<R>(State(service): State<Arc<AdsService<R>>>) -> Response
where
    R: AdRepository + 'static,
{
    match service.score_all() {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn public_ads_handler<R>(State(service): State<Arc<AdsService<R>>>) -> Response
where
    R: AdRepository + 'static,
{
    match service.list_relevant() {
        Ok(ads) => (StatusCode::OK, axum::Json(ads)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn quality_ads_handler<R>(State(service): State<Arc<AdsService<R>>>) -> Response
where
    R: AdRepository + 'static,
{
    match service.list_irrelevant() {
        Ok(ads) => (StatusCode::OK, axum::Json(ads)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AdsServiceError) -> Response {
    let payload = json!({
        "error": err.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
