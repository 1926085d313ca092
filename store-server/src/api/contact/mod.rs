//! Contact API module

mod handler;

use axum::{
    routing::{delete, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/contact", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::submit).get(handler::list))
        .route("/{id}/read", put(handler::mark_read))
        .route("/{id}", delete(handler::delete))
}
