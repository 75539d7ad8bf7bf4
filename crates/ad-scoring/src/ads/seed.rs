use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::domain::{Ad, AdId};

/// Parses a JSON array of ads, rejecting duplicate ids.
pub fn parse_ads<R: Read>(reader: R) -> Result<Vec<Ad>, SeedError> {
    let ads: Vec<Ad> = serde_json::from_reader(reader)?;

    let mut seen = BTreeSet::new();
    for ad in &ads {
        if !seen.insert(ad.id) {
            return Err(SeedError::DuplicateId(ad.id));
        }
    }

    Ok(ads)
}

/// Reads ads from a JSON file on disk.
pub fn load_ads(path: &Path) -> Result<Vec<Ad>, SeedError> {
    let file = File::open(path)?;
    parse_ads(BufReader::new(file))
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read ads: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed ads payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate ad id {0}")]
    DuplicateId(AdId),
}
