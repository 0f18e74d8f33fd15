use std::collections::HashSet;

use serde::Serialize;

use crate::config::ResolverConfig;
use crate::duration::format_duration;
use crate::types::{CourseOutline, LessonRef};

/// The lesson to present next, enriched for progress-bar UIs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextLessonInfo {
    #[serde(flatten)]
    pub lesson: LessonRef,
    /// Human-readable duration; missing lesson lengths fall back to the
    /// configured default.
    pub estimated_time: String,
    /// 1-based index within the outline.
    pub position: usize,
    pub total: usize,
}

/// Resolves the next lesson for a learner.
///
/// With `current_lesson_id` the resolver is sequential: it returns the
/// lesson after the current one, or `None` when the id is unknown or the
/// current lesson is last (no wrap-around to earlier incomplete lessons).
/// Without it the resolver resumes: the first lesson whose id is absent
/// from `completed_lesson_ids`, or `None` when everything is done.
pub fn next_lesson(
    outline: &CourseOutline,
    completed_lesson_ids: &HashSet<String>,
    current_lesson_id: Option<&str>,
    config: &ResolverConfig,
) -> Option<NextLessonInfo> {
    let ordered = outline.ordered_lessons();
    let total = ordered.len();
    if total == 0 {
        return None;
    }

    let index = match current_lesson_id {
        Some(current) => {
            let at = ordered.iter().position(|lesson| lesson.id == current)?;
            if at + 1 >= total {
                return None;
            }
            at + 1
        }
        None => ordered
            .iter()
            .position(|lesson| !completed_lesson_ids.contains(&lesson.id))?,
    };

    let lesson = ordered[index].clone();
    let minutes = lesson
        .duration_minutes
        .unwrap_or(config.default_lesson_minutes);

    Some(NextLessonInfo {
        estimated_time: format_duration(minutes as f64),
        position: index + 1,
        total,
        lesson,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline(ids: &[&str]) -> CourseOutline {
        CourseOutline {
            lessons: ids
                .iter()
                .enumerate()
                .map(|(i, id)| LessonRef {
                    id: id.to_string(),
                    title: format!("Lesson {id}"),
                    duration_minutes: Some(10 * (i as u32 + 1)),
                    order: None,
                    is_preview: i == 0,
                })
                .collect(),
        }
    }

    fn completed(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_outline_resolves_nothing() {
        let config = ResolverConfig::default();
        let outline = CourseOutline::default();
        assert!(next_lesson(&outline, &HashSet::new(), None, &config).is_none());
        assert!(next_lesson(&outline, &HashSet::new(), Some("l1"), &config).is_none());
    }

    #[test]
    fn resume_mode_picks_first_incomplete() {
        let config = ResolverConfig::default();
        let outline = outline(&["l1", "l2", "l3"]);
        let info = next_lesson(&outline, &completed(&["l1", "l3"]), None, &config)
            .expect("l2 is incomplete");
        assert_eq!(info.lesson.id, "l2");
        assert_eq!(info.position, 2);
        assert_eq!(info.total, 3);
        assert_eq!(info.estimated_time, "20m");
    }

    #[test]
    fn resume_mode_exhausted_outline() {
        let config = ResolverConfig::default();
        let outline = outline(&["l1", "l2"]);
        assert!(next_lesson(&outline, &completed(&["l1", "l2"]), None, &config).is_none());
    }

    #[test]
    fn sequential_mode_advances_by_one() {
        let config = ResolverConfig::default();
        let outline = outline(&["l1", "l2", "l3"]);
        let info =
            next_lesson(&outline, &HashSet::new(), Some("l1"), &config).expect("l2 follows l1");
        assert_eq!(info.lesson.id, "l2");
        assert_eq!(info.position, 2);
    }

    #[test]
    fn sequential_mode_stops_at_last_lesson() {
        let config = ResolverConfig::default();
        let outline = outline(&["l1", "l2", "l3"]);
        assert!(next_lesson(&outline, &HashSet::new(), Some("l3"), &config).is_none());
        assert!(next_lesson(&outline, &HashSet::new(), Some("unknown"), &config).is_none());
    }

    #[test]
    fn missing_duration_falls_back_to_default() {
        let config = ResolverConfig::default();
        let outline = CourseOutline {
            lessons: vec![LessonRef {
                id: "l1".to_string(),
                title: "Intro".to_string(),
                duration_minutes: None,
                order: None,
                is_preview: true,
            }],
        };
        let info = next_lesson(&outline, &HashSet::new(), None, &config).expect("first lesson");
        assert_eq!(info.estimated_time, "5m");
    }

    #[test]
    fn explicit_order_overrides_position() {
        let config = ResolverConfig::default();
        let mut lessons = outline(&["l1", "l2"]).lessons;
        lessons[0].order = Some(2);
        lessons[1].order = Some(1);
        let outline = CourseOutline { lessons };
        let info = next_lesson(&outline, &HashSet::new(), None, &config).expect("reordered first");
        assert_eq!(info.lesson.id, "l2");
        assert_eq!(info.position, 1);
    }
}
