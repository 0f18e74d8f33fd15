//! 学习模式聚合：品类/难度偏好直方图、完课用时与周内活跃分布

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::EnrollmentRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSummary {
    pub category_counts: HashMap<String, u32>,
    pub level_counts: HashMap<String, u32>,
    /// Mean enrolled-to-updated span in hours over completed enrollments;
    /// 0.0 when none are complete.
    pub avg_completion_hours: f64,
    /// Distinct active calendar days over total enrollments. A crude ratio,
    /// not a normalized probability.
    pub learning_consistency: f64,
    /// Last-accessed counts per weekday, Sunday-first.
    pub weekday_activity: [u32; 7],
}

/// Aggregates a learner's enrollments into preference histograms and
/// activity patterns. Records missing a category or level are skipped by
/// the corresponding histogram. Returns `None` for an empty history.
pub fn analyze_patterns(enrollments: &[EnrollmentRecord]) -> Option<PatternSummary> {
    if enrollments.is_empty() {
        return None;
    }

    let mut category_counts: HashMap<String, u32> = HashMap::new();
    let mut level_counts: HashMap<String, u32> = HashMap::new();
    let mut weekday_activity = [0u32; 7];
    let mut active_days: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut completion_hours = 0.0_f64;
    let mut completed = 0u32;

    for enrollment in enrollments {
        if let Some(category) = &enrollment.course.category {
            *category_counts.entry(category.clone()).or_insert(0) += 1;
        }
        if let Some(level) = &enrollment.course.level {
            *level_counts.entry(level.clone()).or_insert(0) += 1;
        }

        active_days.insert(enrollment.last_accessed_at.date_naive());
        let weekday = enrollment.last_accessed_at.weekday().num_days_from_sunday() as usize;
        weekday_activity[weekday] += 1;

        if enrollment.is_completed() {
            let span = enrollment.updated_at - enrollment.enrolled_at;
            completion_hours += span.num_seconds() as f64 / 3600.0;
            completed += 1;
        }
    }

    let avg_completion_hours = if completed > 0 {
        completion_hours / completed as f64
    } else {
        0.0
    };
    let learning_consistency = active_days.len() as f64 / enrollments.len().max(1) as f64;

    tracing::debug!(
        enrollments = enrollments.len(),
        completed,
        distinct_days = active_days.len(),
        "Aggregated enrollment patterns"
    );

    Some(PatternSummary {
        category_counts,
        level_counts,
        avg_completion_hours,
        learning_consistency,
        weekday_activity,
    })
}
