use serde::{Deserialize, Serialize};

use crate::config::EstimatorConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEstimate {
    pub remaining_lessons: u32,
    /// Rounded to one decimal.
    pub avg_hours_per_lesson: f64,
    /// Rounded to one decimal.
    pub remaining_hours: f64,
    /// Whole days at the configured study pace, rounded up.
    pub estimated_days: u32,
}

/// Projects the remaining time to finish a course from lesson counts and
/// total elapsed hours.
///
/// Returns `None` when nothing remains (`completed_lessons >=
/// total_lessons`) and when `total_lessons` is zero; both mean "no estimate
/// applicable".
pub fn estimate_completion(
    total_lessons: u32,
    completed_lessons: u32,
    total_hours: f64,
    config: &EstimatorConfig,
) -> Option<CompletionEstimate> {
    if total_lessons == 0 || completed_lessons >= total_lessons {
        return None;
    }

    let remaining_lessons = total_lessons - completed_lessons;
    let avg_hours_per_lesson = total_hours / total_lessons as f64;
    let remaining_hours = remaining_lessons as f64 * avg_hours_per_lesson;
    let estimated_days = (remaining_hours / config.study_hours_per_day).ceil() as u32;

    Some(CompletionEstimate {
        remaining_lessons,
        avg_hours_per_lesson: round_tenth(avg_hours_per_lesson),
        remaining_hours: round_tenth(remaining_hours),
        estimated_days,
    })
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
