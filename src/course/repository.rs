use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::{
    models::{Course, NewCourse},
    types::CoursePatch,
};
use crate::shared::AppError;
use crate::table::{lock, Table};

#[async_trait]
pub trait CourseRepository {
    async fn create_course(&self, course: NewCourse) -> Result<Course, AppError>;
    async fn get_course(&self, id: u64) -> Result<Option<Course>, AppError>;

    /// Courses owned by `user_id`, newest first
    async fn list_courses(&self, user_id: u64) -> Result<Vec<Course>, AppError>;

    /// Merges the patch as given; completion rules are the caller's concern
    async fn update_course(&self, id: u64, patch: CoursePatch) -> Result<Option<Course>, AppError>;
    async fn delete_course(&self, id: u64) -> Result<bool, AppError>;
}

pub struct InMemoryCourseRepository {
    courses: Mutex<Table<Course>>,
}

impl Default for InMemoryCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self {
            courses: Mutex::new(Table::new()),
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    #[instrument(skip(self, course), fields(user_id = course.user_id))]
    async fn create_course(&self, course: NewCourse) -> Result<Course, AppError> {
        let mut courses = lock(&self.courses, "courses")?;
        let created = courses
            .insert_with(|id| course.into_course(id, Utc::now()))
            .clone();

        debug!(course_id = created.id, "Course stored in memory");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn get_course(&self, id: u64) -> Result<Option<Course>, AppError> {
        let courses = lock(&self.courses, "courses")?;
        Ok(courses.get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_courses(&self, user_id: u64) -> Result<Vec<Course>, AppError> {
        let courses = lock(&self.courses, "courses")?;
        let mut selected: Vec<Course> = courses
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();

        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(selected)
    }

    #[instrument(skip(self, patch))]
    async fn update_course(&self, id: u64, patch: CoursePatch) -> Result<Option<Course>, AppError> {
        let mut courses = lock(&self.courses, "courses")?;
        Ok(courses.get_mut(id).map(|course| {
            patch.apply_to(course);
            course.clone()
        }))
    }

    #[instrument(skip(self))]
    async fn delete_course(&self, id: u64) -> Result<bool, AppError> {
        let mut courses = lock(&self.courses, "courses")?;
        Ok(courses.remove(id))
    }
}
