//! Home page handler.

use axum::response::Html;

/// Static single-page frontend.
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET / - Serve the home page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
