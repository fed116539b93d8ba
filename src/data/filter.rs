use std::collections::BTreeSet;

use super::model::ListingDataset;

// ---------------------------------------------------------------------------
// Filter state: numeric ranges plus categorical selections
// ---------------------------------------------------------------------------

/// Current values of all filter controls. Numeric ranges are inclusive on
/// both ends. An EMPTY selection set means "no constraint" (every value
/// passes); this mirrors the multiselect default where nothing checked shows
/// everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub year_min: i64,
    pub year_max: i64,
    pub price_min: i64,
    pub price_max: i64,
    pub odometer_min: i64,
    pub odometer_max: i64,
    pub conditions: BTreeSet<String>,
    pub vehicle_types: BTreeSet<String>,
}

/// Initialise a [`FilterState`] at its widest: full numeric ranges from the
/// dataset bounds, nothing selected in the multi-choice sets.
pub fn init_filter_state(dataset: &ListingDataset) -> FilterState {
    let b = &dataset.bounds;
    FilterState {
        year_min: b.model_year.0,
        year_max: b.model_year.1,
        price_min: b.price.0,
        price_max: b.price.1,
        odometer_min: b.odometer.0,
        odometer_max: b.odometer.1,
        conditions: BTreeSet::new(),
        vehicle_types: BTreeSet::new(),
    }
}

fn in_set(selected: &BTreeSet<String>, value: &str) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Return indices of listings that pass every active filter, in original
/// row order. Non-mutating; the canonical dataset is never touched.
pub fn filtered_indices(dataset: &ListingDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .listings
        .iter()
        .enumerate()
        .filter(|(_, l)| {
            l.model_year >= filters.year_min
                && l.model_year <= filters.year_max
                && l.price >= filters.price_min
                && l.price <= filters.price_max
                && l.odometer >= filters.odometer_min
                && l.odometer <= filters.odometer_max
                && in_set(&filters.conditions, &l.condition)
                && in_set(&filters.vehicle_types, &l.vehicle_type)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::listing;
    use crate::data::model::ListingDataset;

    fn dataset() -> ListingDataset {
        ListingDataset::from_listings(vec![
            listing(9_400, 2005, 145_000, "good", "sedan"),
            listing(25_500, 2010, 12_000, "like new", "pickup"),
            listing(1_500, 2015, 210_000, "fair", "sedan"),
        ])
    }

    #[test]
    fn widest_bounds_pass_every_row() {
        let ds = dataset();
        let filters = init_filter_state(&ds);
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1, 2]);
    }

    #[test]
    fn year_range_is_inclusive() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);
        filters.year_min = 2008;
        filters.year_max = 2015;
        // 2010 and 2015 pass, 2005 does not.
        assert_eq!(filtered_indices(&ds, &filters), vec![1, 2]);
    }

    #[test]
    fn empty_selection_equals_all_selected() {
        let ds = dataset();
        let empty = init_filter_state(&ds);

        let mut all = init_filter_state(&ds);
        all.conditions = ds.bounds.conditions.clone();
        all.vehicle_types = ds.bounds.vehicle_types.clone();

        assert_eq!(filtered_indices(&ds, &empty), filtered_indices(&ds, &all));
    }

    #[test]
    fn selection_restricts_to_members() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);
        filters.vehicle_types.insert("sedan".to_string());
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 2]);

        filters.conditions.insert("fair".to_string());
        assert_eq!(filtered_indices(&ds, &filters), vec![2]);
    }

    #[test]
    fn filtering_is_idempotent_and_never_grows() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);
        filters.price_min = 2_000;

        let once = filtered_indices(&ds, &filters);
        let twice = filtered_indices(&ds, &filters);
        assert_eq!(once, twice);
        assert!(once.len() <= ds.len());
        // Original row order preserved.
        assert!(once.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn conjunction_of_all_predicates() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);
        filters.year_min = 2010;
        filters.odometer_max = 100_000;
        filters.conditions.insert("like new".to_string());
        assert_eq!(filtered_indices(&ds, &filters), vec![1]);
    }
}
