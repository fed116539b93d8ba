use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;

use super::model::RawListing;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Errors raised while reading the listings file. A missing file is the one
/// distinguished condition: the app reports it and halts without showing any
/// UI. Everything else is a generic fatal parse failure.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("listings file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to read listings CSV")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read the raw listings table from a CSV file.
///
/// Expected layout: header row with at least the columns of [`RawListing`]
/// (extra columns such as `days_listed` are ignored). Empty fields in
/// nullable columns deserialize to `None` and are resolved later by the
/// cleaner.
pub fn load_csv(path: &Path) -> Result<Vec<RawListing>, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut listings = Vec::new();
    for result in reader.deserialize() {
        let raw: RawListing = result?;
        listings.push(raw);
    }

    log::info!("read {} raw listings from {}", listings.len(), path.display());
    Ok(listings)
}

/// Load and clean in one step: the canonical dataset the rest of the app
/// works from.
pub fn load_canonical(path: &Path) -> anyhow::Result<super::model::ListingDataset> {
    let raw = load_csv(path)?;
    let listings = super::clean::clean_listings(raw)
        .with_context(|| format!("cleaning listings from {}", path.display()))?;
    Ok(super::model::ListingDataset::from_listings(listings))
}
