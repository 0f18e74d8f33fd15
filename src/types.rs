use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Progress percentage at or above which an enrollment counts as completed.
pub const COMPLETED_PROGRESS: f64 = 100.0;

/// One unit of a learner's activity time series. The caller does not
/// guarantee ordering; consumers sort internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub date: DateTime<Utc>,
    pub course_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRef {
    pub id: String,
    pub title: String,
    pub duration_minutes: Option<u32>,
    /// Advisory presentation order; array position is the fallback.
    pub order: Option<u32>,
    #[serde(default)]
    pub is_preview: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOutline {
    pub lessons: Vec<LessonRef>,
}

impl CourseOutline {
    /// Lessons in presentation order: sorted by the explicit `order` field
    /// where present, falling back to array position, ties broken by
    /// insertion order.
    pub fn ordered_lessons(&self) -> Vec<&LessonRef> {
        let mut indexed: Vec<(usize, &LessonRef)> = self.lessons.iter().enumerate().collect();
        indexed.sort_by_key(|(idx, lesson)| lesson.order.map(|o| o as usize).unwrap_or(*idx));
        indexed.into_iter().map(|(_, lesson)| lesson).collect()
    }
}

/// The course summary embedded in an enrollment. Category and level are
/// optional in the source data; records missing them are skipped by the
/// histogram builders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: String,
    pub category: Option<String>,
    pub level: Option<String>,
}

/// One learner-course relationship. `progress_percent` is assumed to fall
/// in [0, 100]; this crate does not validate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRecord {
    pub course: CourseSummary,
    pub progress_percent: f64,
    pub enrolled_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl EnrollmentRecord {
    pub fn is_completed(&self) -> bool {
        self.progress_percent >= COMPLETED_PROGRESS
    }
}

/// A recommendation candidate from the catalog. Shares the identity space
/// of `CourseSummary` but carries the popularity/recency/rating fields the
/// scorer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCourse {
    pub id: String,
    pub category: Option<String>,
    pub level: Option<String>,
    pub students_enrolled: u64,
    pub updated_at: DateTime<Utc>,
    pub rating_average: f64,
}
