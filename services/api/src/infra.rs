use ad_scoring::ads::{
    load_ads, parse_ads, Ad, AdId, AdRepository, RepositoryError, ScoringRules, SeedError,
};
use ad_scoring::config::AdsConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::io::Cursor;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

const BUNDLED_ADS: &str = include_str!("../data/ads.json");

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Ad store kept in process memory, iterated in id order.
#[derive(Clone)]
pub(crate) struct InMemoryAdRepository {
    ads: Arc<Mutex<BTreeMap<AdId, Ad>>>,
    relevance_threshold: u8,
}

impl InMemoryAdRepository {
    pub(crate) fn new(rules: &ScoringRules) -> Self {
        Self {
            ads: Arc::new(Mutex::new(BTreeMap::new())),
            relevance_threshold: rules.relevance_threshold,
        }
    }

    pub(crate) fn with_ads(rules: &ScoringRules, ads: Vec<Ad>) -> Self {
        let repository = Self::new(rules);
        if let Ok(mut guard) = repository.ads.lock() {
            guard.extend(ads.into_iter().map(|ad| (ad.id, ad)));
        }
        repository
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<AdId, Ad>>, RepositoryError> {
        self.ads
            .lock()
            .map_err(|_| RepositoryError::Unavailable("ad store lock poisoned".to_string()))
    }

    fn scored(&self, relevant: bool) -> Result<Vec<Ad>, RepositoryError> {
        let threshold = self.relevance_threshold;
        Ok(self
            .lock()?
            .values()
            .filter(|ad| matches!(ad.score, Some(score) if (score >= threshold) == relevant))
            .cloned()
            .collect())
    }
}

impl AdRepository for InMemoryAdRepository {
    fn fetch_all(&self) -> Result<Vec<Ad>, RepositoryError> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn fetch_relevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        self.scored(true)
    }

    fn fetch_irrelevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        self.scored(false)
    }

    fn persist(&self, ad: Ad) -> Result<(), RepositoryError> {
        self.lock()?.insert(ad.id, ad);
        Ok(())
    }
}

/// Loads the configured seed file, or the bundled sample listings.
pub(crate) fn seed_ads(config: &AdsConfig) -> Result<Vec<Ad>, SeedError> {
    let ads = match &config.seed_path {
        Some(path) => {
            info!(path = %path.display(), "loading ads from seed file");
            load_ads(path)?
        }
        None => parse_ads(Cursor::new(BUNDLED_ADS))?,
    };
    info!(count = ads.len(), "ad store seeded");
    Ok(ads)
}
