//! 课程推荐评分模块：从报名历史推导偏好，对目录候选课程加权评分排序

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::RecommendConfig;
use crate::types::{CatalogCourse, EnrollmentRecord};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCourse {
    #[serde(flatten)]
    pub course: CatalogCourse,
    pub score: u32,
}

/// 为单个学习者生成课程推荐。
///
/// `now` is supplied by the caller so the scorer stays pure; the recency
/// signal is measured against it. Courses already enrolled are excluded,
/// the rest are scored by independent additive signals and stable-sorted
/// descending, so equal scores keep catalog order. Output is truncated to
/// `limit` (falling back to the configured default).
pub fn recommend(
    enrollments: &[EnrollmentRecord],
    catalog: &[CatalogCourse],
    limit: Option<usize>,
    now: DateTime<Utc>,
    config: &RecommendConfig,
) -> Vec<ScoredCourse> {
    let limit = limit.unwrap_or(config.default_limit);

    let enrolled_ids: HashSet<&str> = enrollments.iter().map(|e| e.course.id.as_str()).collect();
    let seen_categories: HashSet<&str> = enrollments
        .iter()
        .filter_map(|e| e.course.category.as_deref())
        .collect();

    // 按首次出现顺序去重：越早接触的难度等级权重越高
    let mut seen_levels: Vec<&str> = Vec::new();
    for enrollment in enrollments {
        if let Some(level) = enrollment.course.level.as_deref() {
            if !seen_levels.contains(&level) {
                seen_levels.push(level);
            }
        }
    }

    let mut scored: Vec<ScoredCourse> = catalog
        .iter()
        .filter(|course| !enrolled_ids.contains(course.id.as_str()))
        .map(|course| ScoredCourse {
            score: score_candidate(course, &seen_categories, &seen_levels, now, config),
            course: course.clone(),
        })
        .collect();

    tracing::debug!(
        candidates = scored.len(),
        enrolled = enrolled_ids.len(),
        limit,
        "Scored recommendation candidates"
    );

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

fn score_candidate(
    course: &CatalogCourse,
    seen_categories: &HashSet<&str>,
    seen_levels: &[&str],
    now: DateTime<Utc>,
    config: &RecommendConfig,
) -> u32 {
    let w = &config.weights;
    let mut score = 0u32;

    if course
        .category
        .as_deref()
        .is_some_and(|c| seen_categories.contains(c))
    {
        score += w.category_affinity;
    }

    if let Some(position) = course
        .level
        .as_deref()
        .and_then(|level| seen_levels.iter().position(|seen| *seen == level))
    {
        score += w
            .level_match_base
            .saturating_sub(w.level_decay_step * position as u32);
    }

    if course.students_enrolled >= config.popularity_threshold {
        score += w.popularity;
    }

    if now - course.updated_at <= Duration::days(config.recency_window_days) {
        score += w.recency;
    }

    if course.rating_average >= config.high_rating_threshold {
        score += w.high_rating;
    }

    score
}
