use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use axum::response::Html;
use minijinja::{Environment, Error, ErrorKind, Value, path_loader};

use crate::routes;

/// Parameters a handler passes to a single render.
pub type RenderParams = BTreeMap<String, Value>;

/// Values merged into every render of one request.
///
/// Built fresh for each request by the shared-data middleware, so nothing
/// set here outlives the request.
#[derive(Debug, Clone, Default)]
pub struct SharedValues {
    values: BTreeMap<String, Value>,
}

impl SharedValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.values.insert(key.into(), value);
        self
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

/// Page templates loaded from a directory on disk.
pub struct Renderer {
    env: RwLock<Environment<'static>>,
    auto_reload: bool,
}

impl Renderer {
    pub fn new(templates_dir: impl Into<PathBuf>, auto_reload: bool) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(templates_dir.into()));
        env.add_function("route", route);

        Renderer {
            env: RwLock::new(env),
            auto_reload,
        }
    }

    /// Render `template` with `shared` and `params` merged; `params` win on
    /// key collisions.
    pub fn render(
        &self,
        template: &str,
        shared: &SharedValues,
        params: RenderParams,
    ) -> Result<Html<String>, Error> {
        if self.auto_reload {
            self.env
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .clear_templates();
        }

        let mut context = shared.values.clone();
        context.extend(params);

        let env = self.env.read().unwrap_or_else(PoisonError::into_inner);
        let html = env.get_template(template)?.render(Value::from(context))?;

        Ok(Html(html))
    }
}

/// `route(name, params)` inside templates.
fn route(name: &str, params: Option<Value>) -> Result<Value, Error> {
    let mut pairs = BTreeMap::new();
    if let Some(params) = params {
        for key in params.try_iter()? {
            let value = params.get_item(&key)?;
            // Left out so `url_for` reports the parameter as missing.
            if value.is_undefined() || value.is_none() {
                continue;
            }
            pairs.insert(key.to_string(), value.to_string());
        }
    }

    // Parameters are percent-encoded, so the path needs no HTML escaping.
    routes::url_for(name, &pairs)
        .map(Value::from_safe_string)
        .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
}
