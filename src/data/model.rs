use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// RawListing – one CSV row as read from disk, nulls still present
// ---------------------------------------------------------------------------

/// One row of the source CSV before cleaning. Nullable numeric columns come
/// in as `Option<f64>` (the csv crate maps empty fields to `None`); the
/// upstream export writes them with a `.0` suffix, hence `f64` rather than
/// `i64`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    pub price: i64,
    pub model_year: Option<f64>,
    pub model: String,
    pub condition: String,
    pub cylinders: Option<f64>,
    pub fuel: String,
    pub odometer: Option<f64>,
    pub transmission: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub paint_color: Option<String>,
    pub is_4wd: Option<f64>,
    pub date_posted: String,
}

// ---------------------------------------------------------------------------
// Listing – one canonical (cleaned) row
// ---------------------------------------------------------------------------

/// A single listing after imputation and coercion. No field is nullable.
#[derive(Debug, Clone)]
pub struct Listing {
    pub price: i64,
    pub model_year: i64,
    pub model: String,
    pub condition: String,
    pub cylinders: i64,
    pub fuel: String,
    pub odometer: i64,
    pub transmission: String,
    pub vehicle_type: String,
    pub paint_color: String,
    pub is_4wd: i64,
    pub date_posted: NaiveDate,
}

// ---------------------------------------------------------------------------
// ColumnBounds – per-column filter bounds derived from the canonical data
// ---------------------------------------------------------------------------

/// Inclusive numeric ranges and distinct categorical values, computed once
/// when the dataset is built. These seed the filter widgets.
#[derive(Debug, Clone, Default)]
pub struct ColumnBounds {
    pub model_year: (i64, i64),
    pub price: (i64, i64),
    pub odometer: (i64, i64),
    pub conditions: BTreeSet<String>,
    pub vehicle_types: BTreeSet<String>,
}

// ---------------------------------------------------------------------------
// ListingDataset – the complete canonical dataset
// ---------------------------------------------------------------------------

/// The cleaned, immutable in-memory table plus pre-computed column bounds.
#[derive(Debug, Clone)]
pub struct ListingDataset {
    /// All listings (rows), in original file order.
    pub listings: Vec<Listing>,
    /// Filter bounds derived from the listings.
    pub bounds: ColumnBounds,
}

impl ListingDataset {
    /// Build the dataset and its column bounds from cleaned listings.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut bounds = ColumnBounds::default();

        for (i, l) in listings.iter().enumerate() {
            if i == 0 {
                bounds.model_year = (l.model_year, l.model_year);
                bounds.price = (l.price, l.price);
                bounds.odometer = (l.odometer, l.odometer);
            } else {
                bounds.model_year.0 = bounds.model_year.0.min(l.model_year);
                bounds.model_year.1 = bounds.model_year.1.max(l.model_year);
                bounds.price.0 = bounds.price.0.min(l.price);
                bounds.price.1 = bounds.price.1.max(l.price);
                bounds.odometer.0 = bounds.odometer.0.min(l.odometer);
                bounds.odometer.1 = bounds.odometer.1.max(l.odometer);
            }
            bounds.conditions.insert(l.condition.clone());
            bounds.vehicle_types.insert(l.vehicle_type.clone());
        }

        ListingDataset { listings, bounds }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
