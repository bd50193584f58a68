use serde::Deserialize;
use validator::Validate;

use super::models::{Course, NewCourse};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: u64,
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub total_lessons: u32,
    #[serde(default)]
    pub completed_lessons: u32,
    #[serde(default)]
    pub completed: bool,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(request: CreateCourseRequest) -> Self {
        NewCourse {
            user_id: request.user_id,
            title: request.title,
            description: request.description,
            total_lessons: request.total_lessons,
            completed_lessons: request.completed_lessons,
            completed: request.completed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CoursePatch {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    /// `null` clears the field; an absent key leaves it unchanged
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    pub total_lessons: Option<u32>,
    pub completed_lessons: Option<u32>,
    pub completed: Option<bool>,
}

impl CoursePatch {
    pub fn touches_lessons(&self) -> bool {
        self.total_lessons.is_some() || self.completed_lessons.is_some()
    }

    /// Shallow-merges the present fields into `course` without any checks
    pub fn apply_to(self, course: &mut Course) {
        if let Some(title) = self.title {
            course.title = title;
        }
        if let Some(description) = self.description {
            course.description = description;
        }
        if let Some(total_lessons) = self.total_lessons {
            course.total_lessons = total_lessons;
        }
        if let Some(completed_lessons) = self.completed_lessons {
            course.completed_lessons = completed_lessons;
        }
        if let Some(completed) = self.completed {
            course.completed = completed;
        }
    }
}
