//! Plain-text rendering of the dashboard.
//!
//! Style constants live here only; the evaluator hands over flags and
//! quantities and never sees how they are drawn.

use std::fmt::{self, Write as _};

use stocktrack_advisor::{AdvisorJob, Insight, RestockAdvisorJob, SuggestionPayload};
use stocktrack_inventory::{InventoryRecord, InventorySummary, decorate_label, evaluate_stock};

use crate::error::DashboardError;
use crate::screen::Screen;

const RULE: &str = "---";
const BAR_GLYPH: char = '█';
const BAR_WIDTH: i64 = 30;
const NAME_WIDTH: usize = 22;
const LOW_STATUS: &str = "LOW";
const OK_STATUS: &str = "ok";

pub const FULLY_STOCKED: &str = "All items are fully stocked.";

fn render(write: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails.
    let _ = write(&mut out);
    out
}

/// Title block plus the three summary tiles.
pub fn render_header(summary: &InventorySummary) -> String {
    render(|out| {
        writeln!(out, "📦 Smart Inventory Tracking")?;
        writeln!(out, "Manage your inventory intelligently with AI agents 🤖")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Inventory Summary")?;
        writeln!(
            out,
            "Total Items: {} | Low Stock Alerts: {} | Upcoming Expirations: {}",
            summary.total_units, summary.low_stock_alerts, summary.upcoming_expirations
        )?;
        writeln!(out, "{RULE}")
    })
}

/// Title and body of the selected screen.
pub fn render_screen(
    screen: Screen,
    records: &[InventoryRecord],
    summary: &InventorySummary,
) -> Result<String, DashboardError> {
    let insight = match screen {
        Screen::RestockSuggestions => Some(RestockAdvisorJob::new(records.to_vec()).run()?),
        _ => None,
    };
    let suggestions: Vec<SuggestionPayload> = match &insight {
        Some(insight) => insight.metadata_field("suggestions")?,
        None => Vec::new(),
    };

    Ok(render(|out| {
        writeln!(out, "{}", screen.title())?;
        match screen {
            Screen::ViewInventory => inventory_table(out, records),
            Screen::RestockSuggestions => restock_suggestions(out, insight.as_ref(), &suggestions),
            Screen::Analytics => analytics(out, records, summary),
            Screen::ChatWithAssistant => writeln!(out, "The inventory assistant is not available yet."),
        }
    }))
}

fn inventory_table(out: &mut String, records: &[InventoryRecord]) -> fmt::Result {
    writeln!(
        out,
        "{:<NAME_WIDTH$} {:<8} {:<10} {:>8} {:>13} {:<12} {:<10} status",
        "Item Name", "SKU", "Category", "Quantity", "Reorder Level", "Supplier", "Expires"
    )?;

    for status in evaluate_stock(records) {
        let record = status.record;
        writeln!(
            out,
            "{:<NAME_WIDTH$} {:<8} {:<10} {:>8} {:>13} {:<12} {:<10} {}",
            decorate_label(record),
            record.sku.as_str(),
            record.category,
            record.quantity,
            record.reorder_level,
            record.supplier,
            record.expiration_date.to_string(),
            if status.is_low_stock { LOW_STATUS } else { OK_STATUS },
        )?;
    }
    Ok(())
}

fn restock_suggestions(
    out: &mut String,
    insight: Option<&Insight>,
    suggestions: &[SuggestionPayload],
) -> fmt::Result {
    if suggestions.is_empty() {
        return writeln!(out, "{FULLY_STOCKED}");
    }

    if let Some(explanation) = insight.and_then(|i| i.explanation.as_deref()) {
        writeln!(out, "{explanation}")?;
    }
    for s in suggestions {
        writeln!(
            out,
            "{:<NAME_WIDTH$} ({}): order {} (on hand {}, reorder level {})",
            s.item_name, s.sku, s.suggested_quantity, s.quantity, s.reorder_level
        )?;
    }
    Ok(())
}

fn analytics(out: &mut String, records: &[InventoryRecord], summary: &InventorySummary) -> fmt::Result {
    writeln!(out, "Units by category")?;

    let max = summary.units_by_category.values().copied().max().unwrap_or(0);
    for (category, units) in &summary.units_by_category {
        writeln!(out, "{category:<NAME_WIDTH$} {} {units}", bar(*units, max))?;
    }

    writeln!(out, "Quantity vs reorder level")?;
    for record in records {
        writeln!(
            out,
            "{:<NAME_WIDTH$} {:>6} / {:<6}",
            record.item_name, record.quantity, record.reorder_level
        )?;
    }

    writeln!(out, "Expired items: {}", summary.expired)
}

fn bar(units: i64, max: i64) -> String {
    if units <= 0 || max <= 0 {
        return String::new();
    }
    let len = (i128::from(units) * i128::from(BAR_WIDTH) / i128::from(max)).max(1);
    std::iter::repeat_n(BAR_GLYPH, len as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_largest_value() {
        assert_eq!(bar(60, 60).chars().count(), BAR_WIDTH as usize);
        assert_eq!(bar(30, 60).chars().count(), 15);
        assert_eq!(bar(1, 1_000).chars().count(), 1);
        assert!(bar(0, 60).is_empty());
        assert!(bar(-5, 60).is_empty());
    }

    #[test]
    fn chat_screen_is_a_stub() {
        let out = render_screen(Screen::ChatWithAssistant, &[], &InventorySummary::default()).unwrap();
        assert!(out.contains("not available yet"));
    }

    #[test]
    fn restock_screen_on_empty_input_reports_fully_stocked() {
        let out = render_screen(Screen::RestockSuggestions, &[], &InventorySummary::default()).unwrap();
        assert!(out.contains(FULLY_STOCKED));
    }

    #[test]
    fn analytics_screen_shows_expired_count() {
        let summary = InventorySummary {
            expired: 3,
            ..InventorySummary::default()
        };
        let out = render_screen(Screen::Analytics, &[], &summary).unwrap();
        assert!(out.lines().any(|l| l == "Expired items: 3"));
    }
}
