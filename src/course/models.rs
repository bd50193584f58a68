use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A study course tracked lesson by lesson.
///
/// `completed_lessons <= total_lessons` and `completed` mirroring the lesson
/// counts are upheld by `CourseService`, not by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub total_lessons: u32,
    pub completed_lessons: u32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub user_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub total_lessons: u32,
    pub completed_lessons: u32,
    pub completed: bool,
}

impl NewCourse {
    pub fn into_course(self, id: u64, created_at: DateTime<Utc>) -> Course {
        Course {
            id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            total_lessons: self.total_lessons,
            completed_lessons: self.completed_lessons,
            completed: self.completed,
            created_at,
        }
    }
}
