use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::model::{Listing, RawListing};

// ---------------------------------------------------------------------------
// Column cleaning / imputation
// ---------------------------------------------------------------------------

/// Default values for the categorical and flag columns.
const UNKNOWN_COLOR: &str = "unknown";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Median of a slice, pandas-style: mean of the two middle values for an
/// even count. Returns `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

fn column_median(raw: &[RawListing], pick: fn(&RawListing) -> Option<f64>) -> f64 {
    let values: Vec<f64> = raw.iter().filter_map(pick).collect();
    // A column with no values at all only happens on an empty table, where
    // the median is never applied. 0.0 keeps the pipeline total.
    median(&values).unwrap_or(0.0)
}

/// Turn raw rows into canonical listings.
///
/// Imputation medians are computed from the original non-null values of each
/// column before any row is touched, so the result does not depend on row
/// order or on partially-imputed data. Row count is preserved exactly:
/// * null `odometer`, `cylinders`, `model_year` → column median
/// * null `is_4wd` → 0
/// * null `paint_color` → "unknown"
/// * floats coerced to integers by truncation (pandas `astype(int)`)
/// * `date_posted` parsed as `YYYY-MM-DD`
pub fn clean_listings(raw: Vec<RawListing>) -> Result<Vec<Listing>> {
    let median_odometer = column_median(&raw, |r| r.odometer);
    let median_cylinders = column_median(&raw, |r| r.cylinders);
    let median_model_year = column_median(&raw, |r| r.model_year);

    log::debug!(
        "imputation medians: odometer {median_odometer}, cylinders {median_cylinders}, \
         model_year {median_model_year}"
    );

    raw.into_iter()
        .enumerate()
        .map(|(row, r)| {
            let date_posted = NaiveDate::parse_from_str(&r.date_posted, DATE_FORMAT)
                .with_context(|| {
                    format!("row {row}: invalid date_posted '{}'", r.date_posted)
                })?;

            Ok(Listing {
                price: r.price,
                model_year: r.model_year.unwrap_or(median_model_year) as i64,
                model: r.model,
                condition: r.condition,
                cylinders: r.cylinders.unwrap_or(median_cylinders) as i64,
                fuel: r.fuel,
                odometer: r.odometer.unwrap_or(median_odometer) as i64,
                transmission: r.transmission,
                vehicle_type: r.vehicle_type,
                paint_color: r.paint_color.unwrap_or_else(|| UNKNOWN_COLOR.to_string()),
                is_4wd: r.is_4wd.unwrap_or(0.0) as i64,
                date_posted,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(
        model_year: Option<f64>,
        cylinders: Option<f64>,
        odometer: Option<f64>,
        paint_color: Option<&str>,
        is_4wd: Option<f64>,
    ) -> RawListing {
        RawListing {
            price: 9_400,
            model_year,
            model: "bmw x5".to_string(),
            condition: "good".to_string(),
            cylinders,
            fuel: "gas".to_string(),
            odometer,
            transmission: "automatic".to_string(),
            vehicle_type: "SUV".to_string(),
            paint_color: paint_color.map(str::to_string),
            is_4wd,
            date_posted: "2018-06-23".to_string(),
        }
    }

    #[test]
    fn median_of_even_count_averages_the_middles() {
        assert_eq!(median(&[10.0, 30.0]), Some(20.0));
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
    }

    #[test]
    fn median_of_odd_count_is_the_middle() {
        assert_eq!(median(&[30.0, 10.0, 20.0]), Some(20.0));
    }

    #[test]
    fn median_of_empty_is_none() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn null_odometer_gets_median_of_original_values() {
        // Two known odometers, 10 and 30 → median 20 fills the null row.
        let rows = vec![
            raw(Some(2011.0), Some(6.0), Some(10.0), Some("black"), Some(1.0)),
            raw(Some(2012.0), Some(6.0), Some(30.0), Some("white"), Some(0.0)),
            raw(Some(2013.0), Some(6.0), None, Some("red"), Some(0.0)),
        ];
        let cleaned = clean_listings(rows).unwrap();
        assert_eq!(cleaned[2].odometer, 20);
        // Pre-imputation values untouched.
        assert_eq!(cleaned[0].odometer, 10);
        assert_eq!(cleaned[1].odometer, 30);
    }

    #[test]
    fn medians_use_pre_imputation_values_only() {
        // model_year nulls in rows 1 and 3. Median over the original non-null
        // values [2000, 2010, 2020] is 2010; had imputation fed back into the
        // median it would drift.
        let rows = vec![
            raw(Some(2000.0), Some(4.0), Some(1.0), None, None),
            raw(None, Some(4.0), Some(1.0), None, None),
            raw(Some(2010.0), Some(4.0), Some(1.0), None, None),
            raw(None, Some(4.0), Some(1.0), None, None),
            raw(Some(2020.0), Some(4.0), Some(1.0), None, None),
        ];
        let cleaned = clean_listings(rows).unwrap();
        assert_eq!(cleaned[1].model_year, 2010);
        assert_eq!(cleaned[3].model_year, 2010);
    }

    #[test]
    fn flag_and_color_defaults() {
        let rows = vec![raw(Some(2011.0), Some(6.0), Some(100.0), None, None)];
        let cleaned = clean_listings(rows).unwrap();
        assert_eq!(cleaned[0].is_4wd, 0);
        assert_eq!(cleaned[0].paint_color, "unknown");
    }

    #[test]
    fn no_nulls_remain_and_rows_are_preserved() {
        let rows = vec![
            raw(None, None, None, None, None),
            raw(Some(2015.0), Some(8.0), Some(50.0), Some("blue"), Some(1.0)),
        ];
        let cleaned = clean_listings(rows).unwrap();
        // Typed output has no optional fields; preserving the row count is
        // the remaining invariant.
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].model_year, 2015);
        assert_eq!(cleaned[0].cylinders, 8);
        assert_eq!(cleaned[0].odometer, 50);
        assert_eq!(cleaned[1].is_4wd, 1);
    }

    #[test]
    fn date_posted_is_parsed() {
        let rows = vec![raw(Some(2011.0), Some(6.0), Some(100.0), Some("black"), Some(1.0))];
        let cleaned = clean_listings(rows).unwrap();
        assert_eq!(
            cleaned[0].date_posted,
            NaiveDate::from_ymd_opt(2018, 6, 23).unwrap()
        );
    }

    #[test]
    fn malformed_date_is_a_generic_error() {
        let mut bad = raw(Some(2011.0), Some(6.0), Some(100.0), Some("black"), Some(1.0));
        bad.date_posted = "23/06/2018".to_string();
        assert!(clean_listings(vec![bad]).is_err());
    }

    #[test]
    fn empty_table_stays_empty() {
        assert!(clean_listings(Vec::new()).unwrap().is_empty());
    }
}
