// Placeholder pages for the protected prefixes.
//
// The real frontend renders these; the server only needs the routes to
// exist so the session guard has something to cover.

use axum::response::Html;

pub async fn dashboard() -> Html<&'static str> {
    Html("<!doctype html><title>EcoShare dashboard</title>")
}

pub async fn list_item() -> Html<&'static str> {
    Html("<!doctype html><title>EcoShare - list an item</title>")
}
