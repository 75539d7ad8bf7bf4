use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::ads::domain::{Ad, AdId, Picture, PictureQuality, Typology};
use crate::ads::repository::{AdRepository, RepositoryError};
use crate::ads::scoring::{ScoringEngine, ScoringRules};
use crate::ads::service::AdsService;

pub(super) fn evaluated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringRules::default())
}

pub(super) fn bare_ad(id: u32, typology: Typology) -> Ad {
    Ad::new(AdId(id), typology)
}

pub(super) fn hd(n: u32) -> Picture {
    Picture::new(format!("https://cdn.example.com/pictures/{n}"), PictureQuality::Hd)
}

pub(super) fn standard(n: u32) -> Picture {
    Picture::new(
        format!("https://cdn.example.com/pictures/{n}"),
        PictureQuality::Standard,
    )
}

/// Space separated filler text with exactly `count` words and no keywords.
pub(super) fn words(count: usize) -> String {
    vec!["palabra"; count].join(" ")
}

pub(super) fn with_description(mut ad: Ad, description: &str) -> Ad {
    ad.description = Some(description.to_string());
    ad
}

pub(super) fn with_pictures(mut ad: Ad, pictures: Vec<Picture>) -> Ad {
    ad.pictures = pictures;
    ad
}

pub(super) fn complete(mut ad: Ad) -> Ad {
    ad.is_complete = true;
    ad
}

/// Mixed inventory: one ad scoring 0, 30, 40 (complete), 55 and 60.
pub(super) fn inventory() -> Vec<Ad> {
    let mut empty_garage = bare_ad(1, Typology::Garage);
    empty_garage.house_size = Some(15);

    let standard_chalet = with_pictures(
        bare_ad(2, Typology::Chalet),
        vec![standard(20), standard(21), standard(22)],
    );

    let complete_flat = complete(bare_ad(3, Typology::Flat));

    let long_flat = with_description(
        with_pictures(bare_ad(4, Typology::Flat), vec![hd(40)]),
        &words(55),
    );

    let mut hd_chalet = with_pictures(bare_ad(5, Typology::Chalet), vec![hd(50), hd(51), hd(52)]);
    hd_chalet.house_size = Some(210);
    hd_chalet.garden_size = Some(80);

    vec![long_flat, empty_garage, hd_chalet, standard_chalet, complete_flat]
}

pub(super) fn build_service(ads: Vec<Ad>) -> (AdsService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::with_ads(ads));
    let service = AdsService::new(repository.clone(), ScoringRules::default());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) ads: Arc<Mutex<BTreeMap<AdId, Ad>>>,
    pub(super) writes: Arc<Mutex<Vec<AdId>>>,
}

impl MemoryRepository {
    pub(super) fn with_ads(ads: Vec<Ad>) -> Self {
        let repository = Self::default();
        {
            let mut guard = repository.ads.lock().expect("repository mutex poisoned");
            for ad in ads {
                guard.insert(ad.id, ad);
            }
        }
        repository
    }

    pub(super) fn get(&self, id: u32) -> Ad {
        self.ads
            .lock()
            .expect("repository mutex poisoned")
            .get(&AdId(id))
            .cloned()
            .expect("ad present")
    }

    pub(super) fn writes(&self) -> Vec<AdId> {
        self.writes.lock().expect("writes mutex poisoned").clone()
    }

    fn filtered(&self, relevant: bool) -> Vec<Ad> {
        let threshold = ScoringRules::default().relevance_threshold;
        self.ads
            .lock()
            .expect("repository mutex poisoned")
            .values()
            .filter(|ad| matches!(ad.score, Some(score) if (score >= threshold) == relevant))
            .cloned()
            .collect()
    }
}

impl AdRepository for MemoryRepository {
    fn fetch_all(&self) -> Result<Vec<Ad>, RepositoryError> {
        Ok(self
            .ads
            .lock()
            .expect("repository mutex poisoned")
            .values()
            .cloned()
            .collect())
    }

    fn fetch_relevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        Ok(self.filtered(true))
    }

    fn fetch_irrelevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        Ok(self.filtered(false))
    }

    fn persist(&self, ad: Ad) -> Result<(), RepositoryError> {
        self.writes.lock().expect("writes mutex poisoned").push(ad.id);
        self.ads
            .lock()
            .expect("repository mutex poisoned")
            .insert(ad.id, ad);
        Ok(())
    }
}

/// Returns ads in a fixed order and records the order of writes.
pub(super) struct OrderedRepository {
    pub(super) ads: Vec<Ad>,
    pub(super) writes: Mutex<Vec<Ad>>,
}

impl AdRepository for OrderedRepository {
    fn fetch_all(&self) -> Result<Vec<Ad>, RepositoryError> {
        Ok(self.ads.clone())
    }

    fn fetch_relevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        Ok(self
            .ads
            .iter()
            .filter(|ad| ad.score.is_some_and(|score| score >= 40))
            .cloned()
            .collect())
    }

    fn fetch_irrelevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        Ok(Vec::new())
    }

    fn persist(&self, ad: Ad) -> Result<(), RepositoryError> {
        self.writes.lock().expect("writes mutex poisoned").push(ad);
        Ok(())
    }
}

/// Accepts writes until it reaches `reject_id`.
pub(super) struct RejectingRepository {
    pub(super) inner: MemoryRepository,
    pub(super) reject_id: AdId,
}

impl AdRepository for RejectingRepository {
    fn fetch_all(&self) -> Result<Vec<Ad>, RepositoryError> {
        self.inner.fetch_all()
    }

    fn fetch_relevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        self.inner.fetch_relevant()
    }

    fn fetch_irrelevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        self.inner.fetch_irrelevant()
    }

    fn persist(&self, ad: Ad) -> Result<(), RepositoryError> {
        if ad.id == self.reject_id {
            return Err(RepositoryError::Rejected(format!("ad {} is locked", ad.id)));
        }
        self.inner.persist(ad)
    }
}

pub(super) struct UnavailableRepository;

impl AdRepository for UnavailableRepository {
    fn fetch_all(&self) -> Result<Vec<Ad>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_relevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_irrelevant(&self) -> Result<Vec<Ad>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn persist(&self, _ad: Ad) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
