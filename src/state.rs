use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, init_filter_state, FilterState};
use crate::data::model::ListingDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The canonical dataset is
/// loaded once at startup and never mutated; every interaction only changes
/// the filter state and the cached index list derived from it.
pub struct AppState {
    /// Canonical (cleaned) dataset.
    pub dataset: ListingDataset,

    /// Current filter selections.
    pub filters: FilterState,

    /// Indices of listings passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Colour per `condition` value, shared by both scatter plots.
    pub condition_colors: ColorMap,

    /// Chart toggles; any subset may be active.
    pub show_histogram: bool,
    pub show_scatter_odometer: bool,
    pub show_scatter_year: bool,
}

impl AppState {
    /// Build the state for a freshly loaded dataset: widest filters, all
    /// rows visible, no charts active.
    pub fn new(dataset: ListingDataset) -> Self {
        let filters = init_filter_state(&dataset);
        let visible_indices = (0..dataset.len()).collect();
        let condition_colors = ColorMap::new(&dataset.bounds.conditions);

        Self {
            dataset,
            filters,
            visible_indices,
            condition_colors,
            show_histogram: false,
            show_scatter_odometer: false,
            show_scatter_year: false,
        }
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
    }

    /// Restore the default filter state (full ranges, empty selections).
    pub fn reset_filters(&mut self) {
        self.filters = init_filter_state(&self.dataset);
        self.refilter();
    }

    /// Toggle a single value in the condition selection.
    pub fn toggle_condition(&mut self, value: &str) {
        if !self.filters.conditions.remove(value) {
            self.filters.conditions.insert(value.to_string());
        }
        self.refilter();
    }

    /// Toggle a single value in the vehicle-type selection.
    pub fn toggle_vehicle_type(&mut self, value: &str) {
        if !self.filters.vehicle_types.remove(value) {
            self.filters.vehicle_types.insert(value.to_string());
        }
        self.refilter();
    }
}
