use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use thiserror::Error;

/// Characters escaped when a parameter is placed into a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A route with a name templates can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedRoute {
    pub name: &'static str,
    pub path: &'static str,
}

pub const HOME: NamedRoute = NamedRoute {
    name: "home",
    path: "/",
};

pub const CATEGORY: NamedRoute = NamedRoute {
    name: "category",
    path: "/category/:id",
};

pub const BLOG_DETAIL: NamedRoute = NamedRoute {
    name: "blog.detail",
    path: "/blog/:id",
};

pub const BLOG_DRAFT: NamedRoute = NamedRoute {
    name: "blog.draft",
    path: "/blog/:id/draft",
};

pub const ROUTES: [NamedRoute; 4] = [HOME, CATEGORY, BLOG_DETAIL, BLOG_DRAFT];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route named '{0}'")]
    UnknownRoute(String),

    #[error("Route '{route}' needs a value for '{param}'")]
    MissingParam { route: &'static str, param: String },
}

pub fn find(name: &str) -> Option<NamedRoute> {
    ROUTES.iter().copied().find(|route| route.name == name)
}

/// Build the path of a named route, filling `:param` segments from `params`.
///
/// Parameters the pattern doesn't mention are ignored.
pub fn url_for(name: &str, params: &BTreeMap<String, String>) -> Result<String, RouteError> {
    let route = find(name).ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;

    if route.path == "/" {
        return Ok("/".to_string());
    }

    let mut url = String::new();
    for segment in route.path.trim_start_matches('/').split('/') {
        url.push('/');
        match segment.strip_prefix(':') {
            Some(param) => {
                let value = params.get(param).ok_or_else(|| RouteError::MissingParam {
                    route: route.name,
                    param: param.to_string(),
                })?;
                url.extend(utf8_percent_encode(value, SEGMENT));
            }
            None => url.push_str(segment),
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_home() {
        assert_eq!(url_for("home", &BTreeMap::new()).unwrap(), "/");
    }

    #[test]
    fn test_fills_params() {
        let p = params(&[("id", "abc")]);
        assert_eq!(url_for("category", &p).unwrap(), "/category/abc");
        assert_eq!(url_for("blog.detail", &p).unwrap(), "/blog/abc");
        assert_eq!(url_for("blog.draft", &p).unwrap(), "/blog/abc/draft");
    }

    #[test]
    fn test_encodes_params() {
        let p = params(&[("id", "a b/c?")]);
        assert_eq!(url_for("blog.detail", &p).unwrap(), "/blog/a%20b%2Fc%3F");
    }

    #[test]
    fn test_extra_params_are_ignored() {
        let p = params(&[("id", "x"), ("page", "2")]);
        assert_eq!(url_for("blog.detail", &p).unwrap(), "/blog/x");
    }

    #[test]
    fn test_unknown_route() {
        assert_eq!(
            url_for("nope", &BTreeMap::new()),
            Err(RouteError::UnknownRoute("nope".to_string()))
        );
    }

    #[test]
    fn test_missing_param() {
        assert_eq!(
            url_for("category", &BTreeMap::new()),
            Err(RouteError::MissingParam {
                route: "category",
                param: "id".to_string(),
            })
        );
    }
}
