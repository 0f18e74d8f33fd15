//! Learning analytics and recommendation computations for the course
//! platform backend.
//!
//! Every function here is a synchronous, side-effect-free transformation
//! over records the caller has already loaded: streak calculation,
//! completion estimates, next-lesson resolution, recommendation scoring,
//! and enrollment pattern aggregation. Nothing reads the clock or any
//! global state, so identical inputs always produce identical outputs.
//! Absent results are `None`; no function returns an error.

pub mod config;
pub mod duration;
pub mod estimate;
pub mod next_lesson;
pub mod patterns;
pub mod recommend;
pub mod streaks;
pub mod types;

pub use config::{EstimatorConfig, InsightsConfig, RecommendConfig, RecommendWeights, ResolverConfig};
pub use duration::format_duration;
pub use estimate::{estimate_completion, CompletionEstimate};
pub use next_lesson::{next_lesson, NextLessonInfo};
pub use patterns::{analyze_patterns, PatternSummary};
pub use recommend::{recommend, ScoredCourse};
pub use streaks::{calculate_streaks, StreakSummary};
pub use types::{
    ActivityRecord, CatalogCourse, CourseOutline, CourseSummary, EnrollmentRecord, LessonRef,
    COMPLETED_PROGRESS,
};
