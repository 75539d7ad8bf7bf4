use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::ScoreOutcome;

/// Identifier wrapper for stored advertisements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdId(pub u32);

impl fmt::Display for AdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Property category of the advertised unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Typology {
    Flat,
    Chalet,
    Garage,
}

impl Typology {
    pub fn name(&self) -> &'static str {
        match self {
            Typology::Flat => "FLAT",
            Typology::Chalet => "CHALET",
            Typology::Garage => "GARAGE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PictureQuality {
    Hd,
    Standard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub url: String,
    pub quality: PictureQuality,
}

impl Picture {
    pub fn new(url: impl Into<String>, quality: PictureQuality) -> Self {
        Self {
            url: url.into(),
            quality,
        }
    }
}

/// Advertisement as held by the ad store.
///
/// Content fields are owned upstream. `score` and `irrelevant_since` are only
/// written through [`Ad::apply_score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    pub id: AdId,
    pub typology: Typology,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pictures: Vec<Picture>,
    #[serde(default)]
    pub house_size: Option<u32>,
    #[serde(default)]
    pub garden_size: Option<u32>,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub score: Option<u8>,
    #[serde(default)]
    pub irrelevant_since: Option<DateTime<Utc>>,
}

impl Ad {
    pub fn new(id: AdId, typology: Typology) -> Self {
        Self {
            id,
            typology,
            description: None,
            pictures: Vec::new(),
            house_size: None,
            garden_size: None,
            is_complete: false,
            score: None,
            irrelevant_since: None,
        }
    }

    pub fn apply_score(&mut self, outcome: &ScoreOutcome) {
        self.score = Some(outcome.score);
        self.irrelevant_since = outcome.irrelevant_since;
    }

    pub fn picture_urls(&self) -> Vec<String> {
        self.pictures
            .iter()
            .map(|picture| picture.url.clone())
            .collect()
    }
}
