mod app;
mod floor_plan;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::plan`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use roomcraft_lib::catalog;
pub use roomcraft_lib::export;
pub use roomcraft_lib::furniture;
pub use roomcraft_lib::geometry;
pub use roomcraft_lib::plan;
pub use roomcraft_lib::state;

use app::RoomcraftApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomcraft=info,roomcraft_lib=info".into()),
        )
        .init();

    // Parse --design <path> argument
    let initial_design = parse_design_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Roomcraft - Furniture Layout Editor")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 560.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "roomcraft",
        native_options,
        Box::new(move |cc| Ok(Box::new(RoomcraftApp::new(cc, initial_design)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_design_arg() -> Option<shared::DesignSnapshot> {
    let args: Vec<String> = std::env::args().collect();
    let path = args
        .windows(2)
        .find(|pair| pair[0] == "--design")
        .map(|pair| pair[1].clone())?;

    match state::scene::read_snapshot_file(std::path::Path::new(&path)) {
        Ok(snapshot) => {
            tracing::info!(
                "Loaded design from {path} ({} items)",
                snapshot.furniture_items.len()
            );
            Some(snapshot)
        }
        Err(e) => {
            tracing::error!("Failed to load design from {path}: {e}");
            None
        }
    }
}
