use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::state::AppState;

/// Bin count of the odometer histogram, matching the dashboard's fixed
/// resolution.
pub const HISTOGRAM_BINS: usize = 50;

// ---------------------------------------------------------------------------
// Histogram binning (pure helper, plot-library-free)
// ---------------------------------------------------------------------------

/// Fixed-width histogram bins over `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    /// Bin centres, ascending.
    pub centers: Vec<f64>,
    /// Count per bin, same length as `centers`.
    pub counts: Vec<u64>,
    /// Width shared by all bins.
    pub bin_width: f64,
}

/// Bin `values` into `n_bins` equal-width bins spanning [min, max].
/// Empty input yields no bins; a degenerate range (all values equal)
/// collapses into a single unit-width bin.
pub fn histogram_bins(values: &[f64], n_bins: usize) -> HistogramBins {
    if values.is_empty() || n_bins == 0 {
        return HistogramBins {
            centers: Vec::new(),
            counts: Vec::new(),
            bin_width: 1.0,
        };
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < f64::EPSILON {
        return HistogramBins {
            centers: vec![min],
            counts: vec![values.len() as u64],
            bin_width: 1.0,
        };
    }

    let bin_width = (max - min) / n_bins as f64;
    let mut counts = vec![0u64; n_bins];
    for &v in values {
        let idx = (((v - min) / bin_width) as usize).min(n_bins - 1);
        counts[idx] += 1;
    }
    let centers = (0..n_bins)
        .map(|i| min + (i as f64 + 0.5) * bin_width)
        .collect();

    HistogramBins {
        centers,
        counts,
        bin_width,
    }
}

// ---------------------------------------------------------------------------
// Chart builders (each drawn only when its toggle is active)
// ---------------------------------------------------------------------------

/// Odometer distribution of the filtered view, 50 bins.
pub fn odometer_histogram(ui: &mut Ui, state: &AppState) {
    let values: Vec<f64> = state
        .visible_indices
        .iter()
        .map(|&i| state.dataset.listings[i].odometer as f64)
        .collect();
    let bins = histogram_bins(&values, HISTOGRAM_BINS);

    let bars: Vec<Bar> = bins
        .centers
        .iter()
        .zip(&bins.counts)
        .map(|(&center, &count)| Bar::new(center, count as f64).width(bins.bin_width))
        .collect();

    Plot::new("odometer_histogram")
        .height(320.0)
        .x_axis_label("Odometer (miles)")
        .y_axis_label("Listings")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("odometer"));
        });
}

/// Price vs odometer, points grouped and coloured by condition.
pub fn price_vs_odometer(ui: &mut Ui, state: &AppState) {
    scatter(ui, state, "scatter_price_odometer", "Odometer (miles)", |l| {
        l.odometer as f64
    });
}

/// Price vs model year, points grouped and coloured by condition.
pub fn price_vs_model_year(ui: &mut Ui, state: &AppState) {
    scatter(ui, state, "scatter_price_year", "Model year", |l| {
        l.model_year as f64
    });
}

fn scatter(
    ui: &mut Ui,
    state: &AppState,
    id: &str,
    x_label: &str,
    x_value: fn(&crate::data::model::Listing) -> f64,
) {
    // One Points series per condition so the legend doubles as a key to the
    // colour coding.
    let mut by_condition: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &i in &state.visible_indices {
        let l = &state.dataset.listings[i];
        by_condition
            .entry(l.condition.as_str())
            .or_default()
            .push([x_value(l), l.price as f64]);
    }

    Plot::new(id)
        .height(320.0)
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label("Price ($)")
        .show(ui, |plot_ui| {
            for (condition, points) in by_condition {
                plot_ui.points(
                    Points::new(points)
                        .name(condition)
                        .color(state.condition_colors.color_for(condition))
                        .radius(2.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_bin_count_and_total() {
        let values: Vec<f64> = (0..1_000).map(|i| i as f64).collect();
        let bins = histogram_bins(&values, HISTOGRAM_BINS);
        assert_eq!(bins.counts.len(), HISTOGRAM_BINS);
        assert_eq!(bins.counts.iter().sum::<u64>(), 1_000);
        // Centres ascend by one bin width.
        assert!(bins
            .centers
            .windows(2)
            .all(|w| (w[1] - w[0] - bins.bin_width).abs() < 1e-9));
    }

    #[test]
    fn empty_input_yields_no_bins() {
        let bins = histogram_bins(&[], HISTOGRAM_BINS);
        assert!(bins.centers.is_empty());
        assert!(bins.counts.is_empty());
    }

    #[test]
    fn constant_values_collapse_to_one_bin() {
        let bins = histogram_bins(&[42.0, 42.0, 42.0], HISTOGRAM_BINS);
        assert_eq!(bins.centers, vec![42.0]);
        assert_eq!(bins.counts, vec![3]);
    }

    #[test]
    fn max_value_lands_in_the_last_bin() {
        let bins = histogram_bins(&[0.0, 50.0, 100.0], 50);
        assert_eq!(*bins.counts.last().unwrap(), 1);
        assert_eq!(bins.counts.iter().sum::<u64>(), 3);
    }
}
