use super::index::PhraseIndex;
use super::types::{HealthResponse, Phrase, RootResponse};

use axum::Json;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use std::sync::Arc;

pub async fn handle_root() -> (StatusCode, Json<RootResponse>) {
    (
        StatusCode::OK,
        Json(RootResponse {
            name: "Saffa as a Service".to_string(),
            status: "Sharp sharp!".to_string(),
        }),
    )
}

pub async fn handle_random(
    Extension(index): Extension<Arc<PhraseIndex>>,
) -> (StatusCode, Json<Phrase>) {
    (StatusCode::OK, Json(index.get_random()))
}

pub async fn handle_random_dutch(
    Extension(index): Extension<Arc<PhraseIndex>>,
) -> (StatusCode, Json<Phrase>) {
    (StatusCode::OK, Json(index.get_random_for_dutch()))
}

pub async fn handle_by_term(
    Extension(index): Extension<Arc<PhraseIndex>>,
    Path(term): Path<String>,
) -> (StatusCode, Json<Option<Phrase>>) {
    match index.get_by_term(&term) {
        Some(phrase) => (StatusCode::OK, Json(Some(phrase))),
        None => {
            tracing::debug!("No phrase for term '{}'", term);
            (StatusCode::NOT_FOUND, Json(None))
        }
    }
}

pub async fn handle_by_category(
    Extension(index): Extension<Arc<PhraseIndex>>,
    Path(category): Path<String>,
) -> (StatusCode, Json<Vec<Phrase>>) {
    (StatusCode::OK, Json(index.get_by_category(&category)))
}

pub async fn handle_for_dutch(
    Extension(index): Extension<Arc<PhraseIndex>>,
) -> (StatusCode, Json<Vec<Phrase>>) {
    (StatusCode::OK, Json(index.get_for_dutch()))
}

pub async fn handle_health(
    Extension(index): Extension<Arc<PhraseIndex>>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "Healthy".to_string(),
            phrases: index.len(),
        }),
    )
}
