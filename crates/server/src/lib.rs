//! A blog rendered from microCMS content.
//!
//! Every page request first passes through [`shared::share_categories`], which
//! loads the category menu, then reaches one of the handlers in [`handlers`].

use std::path::Path;

use axum::{Router, middleware, routing::get};
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod config;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod renderer;
pub mod routes;
pub mod shared;
pub mod state;

pub use config::Config;
pub use renderer::Renderer;
pub use state::AppState;

/// The full application: page routes behind the shared-data middleware,
/// static files under `/static`, and a 404 page for everything else.
pub fn build_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(routes::HOME.path, get(handlers::home))
        .route(routes::CATEGORY.path, get(handlers::category))
        .route(routes::BLOG_DETAIL.path, get(handlers::blog_detail))
        .route(routes::BLOG_DRAFT.path, get(handlers::blog_draft))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            shared::share_categories,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .nest_service("/static", ServeDir::new(public_dir))
        .fallback(handlers::not_found)
        .with_state(state)
}
