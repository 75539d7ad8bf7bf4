//! Advertisement scoring, relevance classification, and listing views.
//!
//! The scoring engine is a pure function over an [`Ad`]; the service applies its
//! outcome to each stored ad and persists the result through an [`AdRepository`].

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod seed;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{Ad, AdId, Picture, PictureQuality, Typology};
pub use repository::{AdRepository, RepositoryError};
pub use router::ads_router;
pub use scoring::{
    ScoreComponent, ScoreFactor, ScoreOutcome, ScoringEngine, ScoringRules, WordCountBand,
};
pub use seed::{load_ads, parse_ads, SeedError};
pub use service::{AdsService, AdsServiceError, ScoringSummary};
pub use views::{PublicAd, QualityAd};
