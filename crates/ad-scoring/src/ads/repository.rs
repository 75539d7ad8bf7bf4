use super::domain::Ad;

/// Storage abstraction for advertisements so the service can be exercised in isolation.
///
/// `fetch_relevant` and `fetch_irrelevant` classify on the score stored by the
/// last scoring pass; ads never scored belong to neither set.
pub trait AdRepository: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<Ad>, RepositoryError>;
    fn fetch_relevant(&self) -> Result<Vec<Ad>, RepositoryError>;
    fn fetch_irrelevant(&self) -> Result<Vec<Ad>, RepositoryError>;
    /// Upsert by id.
    fn persist(&self, ad: Ad) -> Result<(), RepositoryError>;
}

/// Error enumeration for ad store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("ad store unavailable: {0}")]
    Unavailable(String),
    #[error("ad store rejected write: {0}")]
    Rejected(String),
}
