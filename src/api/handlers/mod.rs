use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::models::*;

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Path lookups
// ============================================================

pub async fn list_courses(State(catalog): State<Catalog>) -> Json<Vec<Course>> {
    Json(catalog.get_all_courses())
}

pub async fn get_course(
    State(catalog): State<Catalog>,
    Path(course_id): Path<String>,
) -> Result<Json<Course>, (StatusCode, String)> {
    catalog
        .get_course(&course_id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Course not found".to_string()))
}

pub async fn get_lab(
    State(catalog): State<Catalog>,
    Path((course_id, lab_id)): Path<(String, String)>,
) -> Result<Json<Lab>, (StatusCode, String)> {
    catalog
        .get_lab(&course_id, &lab_id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Lab not found".to_string()))
}

/// Tasks are served in their step-shaped summary form; the step list is
/// reached through the step endpoint.
pub async fn get_task(
    State(catalog): State<Catalog>,
    Path((course_id, lab_id, task_id)): Path<(String, String, String)>,
) -> Result<Json<TaskSummary>, (StatusCode, String)> {
    catalog
        .get_task(&course_id, &lab_id, &task_id)
        .map(|task| Json(task.into()))
        .ok_or((StatusCode::NOT_FOUND, "Task not found".to_string()))
}

pub async fn get_step(
    State(catalog): State<Catalog>,
    Path((course_id, lab_id, task_id, step_id)): Path<(String, String, String, String)>,
) -> Result<Json<Step>, (StatusCode, String)> {
    catalog
        .get_step(&course_id, &lab_id, &task_id, &step_id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Step not found".to_string()))
}

// ============================================================
// Id search
// ============================================================

/// Query parameters for the item search endpoint.
#[derive(Debug, Deserialize)]
pub struct GetItemQuery {
    /// Traversal order keyword. Unrecognized values fall back to pre-order.
    pub order: Option<String>,
}

pub async fn get_item(
    State(catalog): State<Catalog>,
    Path(item_id): Path<String>,
    Query(query): Query<GetItemQuery>,
) -> Result<Json<FoundItem>, (StatusCode, String)> {
    let order = match query.order {
        Some(keyword) => TraversalOrder::parse_or(&keyword, TraversalOrder::Pre),
        None => TraversalOrder::Pre,
    };

    catalog
        .get_item(&item_id, order)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Item not found".to_string()))
}
