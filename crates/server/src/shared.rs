use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use microcms::Query;
use minijinja::Value;

use crate::error::AppError;
use crate::handlers::CATEGORIES;
use crate::renderer::SharedValues;
use crate::state::AppState;

/// Fetch the category list for the site menu and attach it to the request as
/// [`SharedValues`] before the page handler runs.
///
/// No caching: every request asks the content API again. A failure here is a
/// plain 500; the handler never runs.
pub async fn share_categories(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let categories = state.content.list(CATEGORIES, &Query::new()).await?;

    let mut shared = SharedValues::new();
    shared.set("categories", Value::from_serialize(&categories.contents));
    request.extensions_mut().insert(shared);

    Ok(next.run(request).await)
}
