//! Built-in pages compiled into the binary.
//!
//! These never touch the templates directory, so the site can still answer
//! with a proper error page when the page templates themselves are broken.

pub mod templates;

pub use templates::{NotFoundPage, ServerErrorPage};

pub fn render_template<T: askama::Template>(template: &T) -> String {
    match template.render() {
        Ok(html) => html,
        Err(err) => {
            log::error!("Template rendering error: {}", err);
            "<!DOCTYPE html><html><body><h1>Internal Error</h1><p>Failed to render template</p></body></html>"
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_page() {
        let html = render_template(&NotFoundPage::default());
        assert!(html.contains("<title>404 Not Found</title>"));
        assert!(html.contains("could not be found"));
    }

    #[test]
    fn test_server_error_page() {
        let html = render_template(&ServerErrorPage::default());
        assert!(html.contains("<h1>500</h1>"));
        assert!(html.contains("<title>500 Internal Server Error</title>"));
    }
}
