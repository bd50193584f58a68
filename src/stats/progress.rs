use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

use crate::course::{models::Course, types::CoursePatch};
use crate::daily_goal::models::DailyGoal;
use crate::goal::models::{Goal, GoalType};

/// Anything with a done/not-done flag
pub trait Completable {
    fn is_completed(&self) -> bool;
}

impl Completable for Goal {
    fn is_completed(&self) -> bool {
        self.completed
    }
}

impl Completable for DailyGoal {
    fn is_completed(&self) -> bool {
        self.completed
    }
}

impl Completable for Course {
    fn is_completed(&self) -> bool {
        self.completed
    }
}

/// `part / whole * 100`, clamped to 0-100 and 0 for an empty whole
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub completed: usize,
    pub total: usize,
    pub percentage: f64,
}

impl CompletionSummary {
    pub fn of<T: Completable>(items: &[T]) -> Self {
        let completed = items.iter().filter(|item| item.is_completed()).count();
        Self {
            completed,
            total: items.len(),
            percentage: percentage(completed as u64, items.len() as u64),
        }
    }
}

/// Lesson-level progress summed across courses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSummary {
    pub completed_lessons: u64,
    pub total_lessons: u64,
    pub percentage: f64,
}

impl LessonSummary {
    pub fn of(courses: &[Course]) -> Self {
        let completed_lessons = courses.iter().map(|c| u64::from(c.completed_lessons)).sum();
        let total_lessons = courses.iter().map(|c| u64::from(c.total_lessons)).sum();
        Self {
            completed_lessons,
            total_lessons,
            percentage: percentage(completed_lessons, total_lessons),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    pub completion: CompletionSummary,
    pub lessons: LessonSummary,
}

impl CourseProgress {
    pub fn of(courses: &[Course]) -> Self {
        Self {
            completion: CompletionSummary::of(courses),
            lessons: LessonSummary::of(courses),
        }
    }
}

/// Everything the dashboard shows about a user's progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub daily_goals: CompletionSummary,
    pub goals: BTreeMap<GoalType, CompletionSummary>,
    pub courses: CourseProgress,
}

impl ProgressReport {
    pub fn build(daily_goals: &[DailyGoal], goals: &[Goal], courses: &[Course]) -> Self {
        let goals = GoalType::iter()
            .map(|goal_type| {
                let of_type: Vec<Goal> = goals
                    .iter()
                    .filter(|g| g.goal_type == goal_type)
                    .cloned()
                    .collect();
                (goal_type, CompletionSummary::of(&of_type))
            })
            .collect();

        Self {
            daily_goals: CompletionSummary::of(daily_goals),
            goals,
            courses: CourseProgress::of(courses),
        }
    }
}

/// Rewrites a course patch so the completion rules hold after it is applied.
///
/// - Changing either lesson count recomputes `completed` from the counts.
/// - Otherwise marking complete fills in the remaining lessons, and marking
///   incomplete only flips the flag.
pub fn resolve_course_patch(course: &Course, mut patch: CoursePatch) -> CoursePatch {
    if patch.touches_lessons() {
        let total = patch.total_lessons.unwrap_or(course.total_lessons);
        let done = patch.completed_lessons.unwrap_or(course.completed_lessons);
        patch.completed = Some(done >= total);
        return patch;
    }

    if patch.completed == Some(true) && course.completed_lessons < course.total_lessons {
        patch.completed_lessons = Some(course.total_lessons);
    }
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn course(total_lessons: u32, completed_lessons: u32, completed: bool) -> Course {
        Course {
            id: 1,
            user_id: 1,
            title: "Endgame fundamentals".to_string(),
            description: None,
            total_lessons,
            completed_lessons,
            completed,
            created_at: Utc::now(),
        }
    }

    fn goal(goal_type: GoalType, completed: bool) -> Goal {
        Goal {
            id: 1,
            user_id: 1,
            title: "goal".to_string(),
            description: None,
            goal_type,
            completed,
            target_date: None,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[case(0, 0, 0.0)]
    #[case(1, 4, 25.0)]
    #[case(3, 3, 100.0)]
    #[case(5, 3, 100.0)]
    fn test_percentage(#[case] part: u64, #[case] whole: u64, #[case] expected: f64) {
        assert_eq!(percentage(part, whole), expected);
    }

    #[test]
    fn test_empty_collection_is_zero_percent() {
        let summary = CompletionSummary::of::<Goal>(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percentage, 0.0);
    }

    #[test]
    fn test_lesson_ratio_across_courses() {
        let courses = vec![course(10, 5, false), course(10, 10, true), course(0, 0, false)];
        let progress = CourseProgress::of(&courses);

        assert_eq!(progress.completion.completed, 1);
        assert_eq!(progress.completion.total, 3);
        assert_eq!(progress.lessons.completed_lessons, 15);
        assert_eq!(progress.lessons.total_lessons, 20);
        assert_eq!(progress.lessons.percentage, 75.0);
    }

    #[test]
    fn test_report_groups_goals_by_type() {
        let goals = vec![
            goal(GoalType::Weekly, true),
            goal(GoalType::Weekly, false),
            goal(GoalType::Yearly, true),
        ];
        let report = ProgressReport::build(&[], &goals, &[]);

        assert_eq!(report.goals[&GoalType::Weekly].percentage, 50.0);
        assert_eq!(report.goals[&GoalType::Monthly].total, 0);
        assert_eq!(report.goals[&GoalType::Yearly].completed, 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["goals"]["weekly"]["total"], 2);
        assert_eq!(json["dailyGoals"]["percentage"], 0.0);
    }

    #[test]
    fn test_mark_complete_fills_lessons() {
        let patch = CoursePatch {
            completed: Some(true),
            ..CoursePatch::default()
        };
        let resolved = resolve_course_patch(&course(12, 4, false), patch);
        assert_eq!(resolved.completed_lessons, Some(12));
        assert_eq!(resolved.completed, Some(true));
    }

    #[test]
    fn test_mark_incomplete_keeps_lessons() {
        let patch = CoursePatch {
            completed: Some(false),
            ..CoursePatch::default()
        };
        let resolved = resolve_course_patch(&course(12, 12, true), patch);
        assert_eq!(resolved.completed_lessons, None);
        assert_eq!(resolved.completed, Some(false));
    }

    #[rstest]
    #[case(Some(10), None, true)]
    #[case(None, Some(20), false)]
    #[case(Some(3), Some(4), false)]
    fn test_lesson_edit_recomputes_completed(
        #[case] completed_lessons: Option<u32>,
        #[case] total_lessons: Option<u32>,
        #[case] expected: bool,
    ) {
        let patch = CoursePatch {
            completed_lessons,
            total_lessons,
            completed: Some(!expected),
            ..CoursePatch::default()
        };
        let resolved = resolve_course_patch(&course(10, 6, false), patch);
        assert_eq!(resolved.completed, Some(expected));
    }
}
