// src/shared/html.rs
use actix_web::{http::StatusCode, HttpResponse};
use askama::Template;
use tracing::error;

const HTML: &str = "text/html; charset=utf-8";

pub fn render_html<T: Template>(template: &T) -> HttpResponse {
    render_html_with_status(StatusCode::OK, template)
}

pub fn render_html_with_status<T: Template>(status: StatusCode, template: &T) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::build(status).content_type(HTML).body(body),
        Err(e) => {
            error!("Template rendering failed: {}", e);
            HttpResponse::InternalServerError()
                .content_type(HTML)
                .body("<h1>Server Error (500)</h1>")
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate<'a> {
    message: &'a str,
}

/// HTML 404 for the server-rendered pages.
pub fn not_found_page(message: &str) -> HttpResponse {
    render_html_with_status(StatusCode::NOT_FOUND, &NotFoundTemplate { message })
}
