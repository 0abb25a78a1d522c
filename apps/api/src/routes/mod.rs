pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::civic::handlers as civic_handlers;
use crate::contacts::handlers as contacts_handlers;
use crate::drafting::handlers as drafting_handlers;
use crate::lookup::handlers as lookup_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Representative lookup
        .route(
            "/api/v1/representatives/lookup",
            post(lookup_handlers::handle_zip_lookup),
        )
        .route(
            "/api/v1/representatives/lookup-batch",
            post(lookup_handlers::handle_batch_zip_lookup),
        )
        // Email drafting
        .route(
            "/api/v1/emails/generate",
            post(drafting_handlers::handle_generate_email),
        )
        .route(
            "/api/v1/emails/subject-lines",
            post(drafting_handlers::handle_subject_lines),
        )
        // Live civic-information lookup
        .route(
            "/api/v1/civic/lookup",
            post(civic_handlers::handle_civic_lookup),
        )
        // Storage notifications
        .route(
            "/api/v1/contacts/object-finalized",
            post(contacts_handlers::handle_object_finalized),
        )
        .with_state(state)
}
