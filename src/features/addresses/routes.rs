use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::addresses::handlers;
use crate::features::addresses::services::AddressResolver;

/// Create routes for the addresses feature
pub fn routes(resolver: Arc<AddressResolver>) -> Router {
    Router::new()
        .route(
            "/api/addresses/validate",
            post(handlers::validate_address),
        )
        .route("/api/addresses/format", post(handlers::format_address))
        .with_state(resolver)
}
