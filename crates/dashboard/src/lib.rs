//! Inventory dashboard: data loading, screen selection, and plain-text rendering.

pub mod config;
pub mod error;
pub mod render;
pub mod screen;
pub mod source;

pub use config::DashboardConfig;
pub use error::DashboardError;
pub use screen::Screen;
pub use source::{JsonFileSource, MockInventorySource};

use stocktrack_inventory::{InventorySource, InventorySummary};

/// Run one display cycle: load records once, then render the header and the
/// selected screen from that single snapshot.
pub fn run_cycle<S>(config: &DashboardConfig, source: &S) -> Result<String, DashboardError>
where
    S: InventorySource,
    DashboardError: From<S::Error>,
{
    let records = source.load()?;
    tracing::info!(records = records.len(), screen = %config.screen, "loaded inventory snapshot");

    let summary = InventorySummary::from_records(&records, config.today, config.expiry_window_days);

    let mut out = render::render_header(&summary);
    out.push_str(&render::render_screen(config.screen, &records, &summary)?);
    Ok(out)
}
