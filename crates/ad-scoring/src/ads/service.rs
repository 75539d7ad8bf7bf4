use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::Ad;
use super::repository::{AdRepository, RepositoryError};
use super::scoring::{ScoreOutcome, ScoringEngine, ScoringRules};
use super::views::{PublicAd, QualityAd};

/// Service composing the ad store and the scoring engine.
pub struct AdsService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
}

impl<R> AdsService<R>
where
    R: AdRepository + 'static,
{
    pub fn new(repository: Arc<R>, rules: ScoringRules) -> Self {
        Self {
            repository,
            engine: Arc::new(ScoringEngine::new(rules)),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn score(&self, ad: &Ad) -> ScoreOutcome {
        self.engine.score(ad)
    }

    /// Rescore every stored ad and persist each one in fetch order.
    ///
    /// The first persist failure aborts the pass; ads already written stay written.
    pub fn score_all(&self) -> Result<ScoringSummary, AdsServiceError> {
        self.run_pass(Utc::now)
    }

    /// Same as [`AdsService::score_all`] with a fixed evaluation timestamp.
    pub fn score_all_at(&self, now: DateTime<Utc>) -> Result<ScoringSummary, AdsServiceError> {
        self.run_pass(|| now)
    }

    fn run_pass<F>(&self, clock: F) -> Result<ScoringSummary, AdsServiceError>
    where
        F: Fn() -> DateTime<Utc>,
    {
        let ads = self.repository.fetch_all()?;
        let mut summary = ScoringSummary::default();

        for mut ad in ads {
            let outcome = self.engine.score_at(&ad, clock());
            ad.apply_score(&outcome);

            debug!(
                ad_id = %ad.id,
                score = outcome.score,
                raw_score = outcome.raw_score,
                relevant = outcome.is_relevant(),
                "scored ad"
            );

            let ad_id = ad.id;
            if let Err(err) = self.repository.persist(ad) {
                warn!(%ad_id, error = %err, "failed to persist scored ad");
                return Err(err.into());
            }

            summary.scored += 1;
            if outcome.is_relevant() {
                summary.relevant += 1;
            } else {
                summary.irrelevant += 1;
            }
        }

        info!(
            scored = summary.scored,
            relevant = summary.relevant,
            irrelevant = summary.irrelevant,
            "scoring pass complete"
        );

        Ok(summary)
    }

    /// Relevant ads ordered by ascending score.
    pub fn list_relevant(&self) -> Result<Vec<PublicAd>, AdsServiceError> {
        let mut ads = self.repository.fetch_relevant()?;
        ads.sort_by_key(|ad| ad.score);
        Ok(ads.iter().map(PublicAd::from).collect())
    }

    pub fn list_irrelevant(&self) -> Result<Vec<QualityAd>, AdsServiceError> {
        let ads = self.repository.fetch_irrelevant()?;
        Ok(ads.iter().map(QualityAd::from).collect())
    }
}

/// Counts reported by a scoring pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoringSummary {
    pub scored: usize,
    pub relevant: usize,
    pub irrelevant: usize,
}

/// Error raised by the ads service.
#[derive(Debug, thiserror::Error)]
pub enum AdsServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
