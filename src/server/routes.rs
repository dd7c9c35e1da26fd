use crate::phrases::handlers::*;
use crate::phrases::index::PhraseIndex;

use axum::{Extension, Router, routing::get};
use std::sync::Arc;

pub const ENDPOINT_ROOT: &str = "/";
pub const ENDPOINT_RANDOM: &str = "/phrase";
pub const ENDPOINT_RANDOM_DUTCH: &str = "/phrase/dutch";
pub const ENDPOINT_BY_TERM: &str = "/phrase/:term";
pub const ENDPOINT_BY_CATEGORY: &str = "/phrase/category/:category";
pub const ENDPOINT_FOR_DUTCH: &str = "/phrases/dutch";
pub const ENDPOINT_HEALTH: &str = "/health";

/// Routes every phrase query to its handler. The index must be fully built
/// before it is handed over here.
pub fn build_router(index: Arc<PhraseIndex>) -> Router {
    Router::new()
        .route(ENDPOINT_ROOT, get(handle_root))
        .route(ENDPOINT_RANDOM, get(handle_random))
        .route(ENDPOINT_RANDOM_DUTCH, get(handle_random_dutch))
        .route(ENDPOINT_BY_TERM, get(handle_by_term))
        .route(ENDPOINT_BY_CATEGORY, get(handle_by_category))
        .route(ENDPOINT_FOR_DUTCH, get(handle_for_dutch))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(index))
}
