use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::error;
use microcms::ContentError;
use site_templates::{NotFoundPage, ServerErrorPage, render_template};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,

    #[error("Content API request failed: {0}")]
    Upstream(#[from] ContentError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Html(render_template(&NotFoundPage::default())),
            )
                .into_response(),
            e => {
                error!("{}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(render_template(&ServerErrorPage::default())),
                )
                    .into_response()
            }
        }
    }
}
