use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Ad, AdId};

/// Listing exposed publicly for relevant ads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAd {
    pub id: AdId,
    pub typology: String,
    pub description: Option<String>,
    pub picture_urls: Vec<String>,
    pub house_size: Option<u32>,
    pub garden_size: Option<u32>,
}

impl From<&Ad> for PublicAd {
    fn from(ad: &Ad) -> Self {
        Self {
            id: ad.id,
            typology: ad.typology.name().to_string(),
            description: ad.description.clone(),
            picture_urls: ad.picture_urls(),
            house_size: ad.house_size,
            garden_size: ad.garden_size,
        }
    }
}

/// Listing surfaced to the quality team for irrelevant ads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityAd {
    pub id: AdId,
    pub typology: String,
    pub description: Option<String>,
    pub picture_urls: Vec<String>,
    pub house_size: Option<u32>,
    pub garden_size: Option<u32>,
    pub score: Option<u8>,
    pub irrelevant_since: Option<DateTime<Utc>>,
}

impl From<&Ad> for QualityAd {
    fn from(ad: &Ad) -> Self {
        Self {
            id: ad.id,
            typology: ad.typology.name().to_string(),
            description: ad.description.clone(),
            picture_urls: ad.picture_urls(),
            house_size: ad.house_size,
            garden_size: ad.garden_size,
            score: ad.score,
            irrelevant_since: ad.irrelevant_since,
        }
    }
}
