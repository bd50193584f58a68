use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    models::{Course, NewCourse},
    repository::CourseRepository,
    types::{CoursePatch, CreateCourseRequest},
};
use crate::shared::AppError;
use crate::stats::progress::resolve_course_patch;

/// Service that keeps lesson counts and the completed flag consistent
pub struct CourseService {
    repository: Arc<dyn CourseRepository + Send + Sync>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn create_course(&self, request: CreateCourseRequest) -> Result<Course, AppError> {
        check_lessons(request.completed_lessons, request.total_lessons)?;

        let course = self
            .repository
            .create_course(NewCourse::from(request))
            .await?;
        info!(course_id = course.id, total_lessons = course.total_lessons, "Course created");
        Ok(course)
    }

    #[instrument(skip(self))]
    pub async fn list_courses(&self, user_id: u64) -> Result<Vec<Course>, AppError> {
        self.repository.list_courses(user_id).await
    }

    /// Applies a patch after resolving it against the completion rules
    #[instrument(skip(self, patch))]
    pub async fn update_course(&self, id: u64, patch: CoursePatch) -> Result<Option<Course>, AppError> {
        let Some(current) = self.repository.get_course(id).await? else {
            debug!(course_id = id, "Course not found");
            return Ok(None);
        };

        let resolved = resolve_course_patch(&current, patch);
        check_lessons(
            resolved.completed_lessons.unwrap_or(current.completed_lessons),
            resolved.total_lessons.unwrap_or(current.total_lessons),
        )?;

        let updated = self.repository.update_course(id, resolved).await?;
        if let Some(course) = &updated {
            debug!(
                course_id = course.id,
                completed_lessons = course.completed_lessons,
                completed = course.completed,
                "Course updated"
            );
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_course(&self, id: u64) -> Result<bool, AppError> {
        self.repository.delete_course(id).await
    }
}

fn check_lessons(completed_lessons: u32, total_lessons: u32) -> Result<(), AppError> {
    if completed_lessons > total_lessons {
        return Err(AppError::invalid_field(
            "completedLessons",
            "Completed lessons cannot exceed total lessons",
        ));
    }
    Ok(())
}
