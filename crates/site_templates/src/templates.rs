use askama::Template;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub status: u16,
    pub reason: &'static str,
}

impl Default for NotFoundPage {
    fn default() -> Self {
        NotFoundPage {
            status: 404,
            reason: "Not Found",
        }
    }
}

#[derive(Template)]
#[template(path = "server_error.html")]
pub struct ServerErrorPage {
    pub status: u16,
    pub reason: &'static str,
}

impl Default for ServerErrorPage {
    fn default() -> Self {
        ServerErrorPage {
            status: 500,
            reason: "Internal Server Error",
        }
    }
}
