mod handlers;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog::Catalog;

pub fn create_router(catalog: Catalog) -> Router {
    Router::new()
        // Catalog
        .route("/courses", get(handlers::list_courses))
        .route("/course/{course_id}", get(handlers::get_course))
        .route("/course/{course_id}/lab/{lab_id}", get(handlers::get_lab))
        .route(
            "/course/{course_id}/lab/{lab_id}/task/{task_id}",
            get(handlers::get_task),
        )
        .route(
            "/course/{course_id}/lab/{lab_id}/task/{task_id}/step/{step_id}",
            get(handlers::get_step),
        )
        // Flat id search
        .route("/item/{item_id}", get(handlers::get_item))
        // Health
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(catalog)
}
