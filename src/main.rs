mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::CarScopeApp;
use eframe::egui;

/// The listings file is expected next to the executable.
const DATA_PATH: &str = "vehicles_us.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // Load and clean once, before any UI exists. A missing or unreadable
    // file halts the run with a single message.
    let dataset = match data::loader::load_canonical(Path::new(DATA_PATH)) {
        Ok(ds) => ds,
        Err(err) => {
            log::error!("startup load failed: {err:#}");
            eprintln!("Error: {err:#}");
            eprintln!("Make sure {DATA_PATH} is in the working directory.");
            std::process::exit(1);
        }
    };

    log::info!(
        "loaded {} listings, model years {:?}, prices {:?}",
        dataset.len(),
        dataset.bounds.model_year,
        dataset.bounds.price
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CarScope – Vehicle Listings",
        options,
        Box::new(move |_cc| Ok(Box::new(CarScopeApp::new(dataset)))),
    )
}
