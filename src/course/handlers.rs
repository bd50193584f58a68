use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::Course,
    service::CourseService,
    types::{CoursePatch, CreateCourseRequest},
};
use crate::extract::{Path, ValidatedJson};
use crate::shared::{AppError, AppState, SuccessResponse};

fn service(state: &AppState) -> CourseService {
    CourseService::new(Arc::clone(&state.course_repository))
}

/// GET /api/courses/:userId
#[instrument(name = "list_courses", skip(state))]
pub async fn list_courses(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = service(&state).list_courses(user_id).await?;
    Ok(Json(courses))
}

/// POST /api/courses
#[instrument(name = "create_course", skip(state, request))]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCourseRequest>,
) -> Result<Json<Course>, AppError> {
    let course = service(&state).create_course(request).await?;
    Ok(Json(course))
}

/// PATCH /api/courses/:id
///
/// Marking complete fills in remaining lessons; editing lesson counts
/// recomputes the completed flag.
#[instrument(name = "update_course", skip(state, patch))]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ValidatedJson(patch): ValidatedJson<CoursePatch>,
) -> Result<Json<Course>, AppError> {
    service(&state)
        .update_course(id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
}

/// DELETE /api/courses/:id
#[instrument(name = "delete_course", skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SuccessResponse>, AppError> {
    if !service(&state).delete_course(id).await? {
        return Err(AppError::NotFound("Course not found".to_string()));
    }

    info!(course_id = id, "Course deleted");
    Ok(Json(SuccessResponse::ok()))
}
