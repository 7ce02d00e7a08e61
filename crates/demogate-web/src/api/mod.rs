mod auth_handlers;

use axum::extract::Request;
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn gated_router() -> Router<AppState> {
    Router::new()
        .route(
            "/demo/login",
            get(auth_handlers::login_page).post(auth_handlers::login),
        )
        .route("/demo/logout", post(auth_handlers::logout))
        .route("/demo", get(demo_page))
        .route("/demo/{*rest}", get(demo_page))
}

/// Stand-in for the site's private pages. The real site renders these; the
/// gate only cares that they sit behind the access-gate middleware.
async fn demo_page(req: Request) -> Html<String> {
    Html(format!(
        "<!doctype html><title>Demo</title><h1>Private demo area</h1><p>{}</p>",
        req.uri().path()
    ))
}
