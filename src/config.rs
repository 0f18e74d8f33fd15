use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tunables for the whole insights module. Every default reproduces the
/// constants the production scoring was calibrated with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsConfig {
    #[serde(default)]
    pub estimator: EstimatorConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatorConfig {
    /// Assumed study pace used to convert remaining hours into days.
    #[serde(default = "default_study_hours_per_day")]
    pub study_hours_per_day: f64,
}

fn default_study_hours_per_day() -> f64 {
    2.0
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            study_hours_per_day: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Fallback duration for lessons with no recorded length.
    #[serde(default = "default_lesson_minutes")]
    pub default_lesson_minutes: u32,
}

fn default_lesson_minutes() -> u32 {
    5
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_lesson_minutes: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendWeights {
    pub category_affinity: u32,
    pub level_match_base: u32,
    /// Per-position decay applied to the level signal: a level first seen at
    /// position i contributes `level_match_base - level_decay_step * i`.
    pub level_decay_step: u32,
    pub popularity: u32,
    pub recency: u32,
    pub high_rating: u32,
}

impl Default for RecommendWeights {
    fn default() -> Self {
        Self {
            category_affinity: 40,
            level_match_base: 30,
            level_decay_step: 5,
            popularity: 15,
            recency: 10,
            high_rating: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendConfig {
    #[serde(default)]
    pub weights: RecommendWeights,
    #[serde(default = "default_popularity_threshold")]
    pub popularity_threshold: u64,
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: i64,
    #[serde(default = "default_high_rating_threshold")]
    pub high_rating_threshold: f64,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

fn default_popularity_threshold() -> u64 {
    1000
}
fn default_recency_window_days() -> i64 {
    30
}
fn default_high_rating_threshold() -> f64 {
    4.5
}
fn default_limit() -> usize {
    12
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            weights: RecommendWeights::default(),
            popularity_threshold: 1000,
            recency_window_days: 30,
            high_rating_threshold: 4.5,
            default_limit: 12,
        }
    }
}

impl InsightsConfig {
    /// Defaults overridden by `INSIGHTS_*` environment variables where set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.estimator.study_hours_per_day = env_or_parse(
            "INSIGHTS_STUDY_HOURS_PER_DAY",
            config.estimator.study_hours_per_day,
        );
        config.resolver.default_lesson_minutes = env_or_parse(
            "INSIGHTS_DEFAULT_LESSON_MINUTES",
            config.resolver.default_lesson_minutes,
        );
        config.recommend.popularity_threshold = env_or_parse(
            "INSIGHTS_POPULARITY_THRESHOLD",
            config.recommend.popularity_threshold,
        );
        config.recommend.recency_window_days = env_or_parse(
            "INSIGHTS_RECENCY_WINDOW_DAYS",
            config.recommend.recency_window_days,
        );
        config.recommend.high_rating_threshold = env_or_parse(
            "INSIGHTS_HIGH_RATING_THRESHOLD",
            config.recommend.high_rating_threshold,
        );
        config.recommend.default_limit =
            env_or_parse("INSIGHTS_RECOMMEND_LIMIT", config.recommend.default_limit);
        config
    }
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}
