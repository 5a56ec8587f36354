use axum::{
    Extension,
    extract::{Path, Query as QueryParams, State},
    response::Html,
};
use log::warn;
use microcms::{ContentItem, Fetched, Query};
use minijinja::Value;

use crate::error::AppError;
use crate::renderer::{RenderParams, SharedValues};
use crate::state::AppState;

/// Content API endpoint holding the blog posts.
pub const BLOGS: &str = "blogs";

/// Content API endpoint holding the categories.
pub const CATEGORIES: &str = "categories";

/// Query parameter carrying the draft preview token.
const DRAFT_KEY_PARAM: &str = "key";

// GET /
pub async fn home(
    State(state): State<AppState>,
    Extension(shared): Extension<SharedValues>,
) -> Result<Html<String>, AppError> {
    let blogs = state.content.list(BLOGS, &Query::new()).await?;

    let params = RenderParams::from([(
        "blogs".to_string(),
        Value::from_serialize(&blogs.contents),
    )]);

    Ok(state.renderer.render("index.html", &shared, params)?)
}

// GET /category/:id
pub async fn category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(shared): Extension<SharedValues>,
) -> Result<Html<String>, AppError> {
    let fetched = state.content.get(CATEGORIES, &id, &Query::new()).await;
    let category = found_or_not_found(fetched, CATEGORIES, &id)?;

    let filter = format!("category[equals]{}", id);
    let blogs = state
        .content
        .list(BLOGS, &Query::new().filters(filter))
        .await?;

    let params = RenderParams::from([
        ("category".to_string(), Value::from_serialize(&category)),
        ("blogs".to_string(), Value::from_serialize(&blogs.contents)),
    ]);

    Ok(state.renderer.render("category.html", &shared, params)?)
}

// GET /blog/:id
pub async fn blog_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(shared): Extension<SharedValues>,
) -> Result<Html<String>, AppError> {
    let fetched = state.content.get(BLOGS, &id, &Query::new()).await;
    let blog = found_or_not_found(fetched, BLOGS, &id)?;

    render_detail(&state, &shared, &blog, false)
}

// GET /blog/:id/draft?key=...
pub async fn blog_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
    QueryParams(pairs): QueryParams<Vec<(String, String)>>,
    Extension(shared): Extension<SharedValues>,
) -> Result<Html<String>, AppError> {
    // A repeated `key` takes its last value.
    let key = pairs
        .into_iter()
        .rev()
        .find(|(name, _)| name == DRAFT_KEY_PARAM)
        .map(|(_, value)| value);

    let query = Query::new().draft_key(key);
    let fetched = state.content.get(BLOGS, &id, &query).await;
    let blog = found_or_not_found(fetched, BLOGS, &id)?;

    render_detail(&state, &shared, &blog, true)
}

/// Fallback for every path without a route.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

fn render_detail(
    state: &AppState,
    shared: &SharedValues,
    blog: &ContentItem,
    is_draft: bool,
) -> Result<Html<String>, AppError> {
    let params = RenderParams::from([
        ("blog".to_string(), Value::from_serialize(blog)),
        ("isDraft".to_string(), Value::from(is_draft)),
    ]);

    Ok(state.renderer.render("detail.html", shared, params)?)
}

/// Single-record fetches are the only place upstream failures turn into 404s.
fn found_or_not_found(
    fetched: Fetched<ContentItem>,
    endpoint: &str,
    id: &str,
) -> Result<ContentItem, AppError> {
    match fetched {
        Fetched::Found(item) => Ok(item),
        Fetched::NotFound => Err(AppError::NotFound),
        Fetched::Failed(e) => {
            warn!("Fetching {}/{} failed, answering 404: {}", endpoint, id, e);
            Err(AppError::NotFound)
        }
    }
}
