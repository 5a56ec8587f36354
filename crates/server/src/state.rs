use std::sync::Arc;

use microcms::ContentApi;

use crate::renderer::Renderer;

/// Read-only after startup; cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentApi>,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentApi>, renderer: Renderer) -> Self {
        AppState {
            content,
            renderer: Arc::new(renderer),
        }
    }
}
