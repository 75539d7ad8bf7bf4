mod config;
mod rules;

pub use config::{ScoringRules, WordCountBand};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Ad, AdId};

/// Stateless evaluator that applies the rule table to an advertisement.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    rules: ScoringRules,
}

impl ScoringEngine {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Scores `ad`, stamping irrelevance with the current time.
    pub fn score(&self, ad: &Ad) -> ScoreOutcome {
        self.score_at(ad, Utc::now())
    }

    /// Scores `ad` as of `now`. Depends only on the ad's content fields and `now`.
    pub fn score_at(&self, ad: &Ad, now: DateTime<Utc>) -> ScoreOutcome {
        let (components, raw_score) = rules::score_ad(ad, &self.rules);
        let score = self.rules.clamp(raw_score);

        let irrelevant_since = if self.rules.is_relevant(score) {
            None
        } else {
            Some(now)
        };

        ScoreOutcome {
            ad_id: ad.id,
            score,
            irrelevant_since,
            raw_score,
            components,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Pictures,
    Description,
    WordCount,
    Keyword,
    Completeness,
}

/// Discrete contribution to a score, kept so a result can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: i32,
    pub notes: String,
}

/// Result of scoring one ad. Component points sum to `raw_score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub ad_id: AdId,
    pub score: u8,
    pub irrelevant_since: Option<DateTime<Utc>>,
    pub raw_score: i32,
    pub components: Vec<ScoreComponent>,
}

impl ScoreOutcome {
    pub fn is_relevant(&self) -> bool {
        self.irrelevant_since.is_none()
    }
}
