use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::ActivityRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    /// Length of the run containing the most recent active day.
    pub current_streak: u32,
    /// Longest run anywhere in the history.
    pub longest_streak: u32,
    /// First day of the current run.
    pub current_streak_start: NaiveDate,
}

/// Computes consecutive-day streaks from an unordered activity history.
///
/// Timestamps are truncated to their UTC calendar day and deduplicated, so
/// several records on the same day count once. Two days are consecutive iff
/// they differ by exactly one day. Returns `None` for an empty history.
pub fn calculate_streaks(activity: &[ActivityRecord]) -> Option<StreakSummary> {
    let days: BTreeSet<NaiveDate> = activity.iter().map(|r| r.date.date_naive()).collect();

    // Runs collected newest-first; each entry is (length, earliest day).
    let mut runs: Vec<(u32, NaiveDate)> = Vec::new();
    for &day in days.iter().rev() {
        match runs.last_mut() {
            Some((len, start)) if (*start - day).num_days() == 1 => {
                *len += 1;
                *start = day;
            }
            _ => runs.push((1, day)),
        }
    }

    let &(current_streak, current_streak_start) = runs.first()?;
    let longest_streak = runs.iter().map(|&(len, _)| len).max().unwrap_or(current_streak);

    Some(StreakSummary {
        current_streak,
        longest_streak,
        current_streak_start,
    })
}
