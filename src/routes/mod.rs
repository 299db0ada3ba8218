use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{blog::blog_handler, contact::contact_handler},
    AppState,
};

pub fn configure_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/contact", contact_handler())
        .nest("/blog", blog_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new().nest("/api", api_route)
}
