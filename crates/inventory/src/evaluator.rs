//! Inventory evaluator: low-stock flags, restock suggestions, decorated labels.
//!
//! Every function here is pure and stateless. Inputs are borrowed and never
//! mutated; outputs are new values in input order.

use crate::record::InventoryRecord;

/// Prefix applied to the labels of low-stock records.
pub const LOW_STOCK_MARKER: &str = "⚠️ ";

/// A record paired with its low-stock flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockStatus<'a> {
    pub record: &'a InventoryRecord,
    pub is_low_stock: bool,
}

/// A low-stock record paired with the quantity to order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderSuggestion<'a> {
    pub record: &'a InventoryRecord,
    pub suggested_quantity: i64,
}

/// Restock sizing policy, applied only to low-stock records.
pub trait RestockPolicy {
    fn suggested_quantity(&self, record: &InventoryRecord) -> i64;
}

/// Provisional heuristic: order up to twice the reorder level.
///
/// Ignores lead time, demand velocity and supplier minimums.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DoubleReorderLevel;

impl RestockPolicy for DoubleReorderLevel {
    fn suggested_quantity(&self, record: &InventoryRecord) -> i64 {
        record
            .reorder_level
            .saturating_mul(2)
            .saturating_sub(record.quantity)
    }
}

/// Flag every record; output has the same length and order as the input.
pub fn evaluate_stock(records: &[InventoryRecord]) -> Vec<StockStatus<'_>> {
    let statuses: Vec<StockStatus<'_>> = records
        .iter()
        .map(|record| StockStatus {
            record,
            is_low_stock: record.is_low_stock(),
        })
        .collect();

    tracing::debug!(
        records = statuses.len(),
        low_stock = statuses.iter().filter(|s| s.is_low_stock).count(),
        "evaluated stock levels"
    );

    statuses
}

/// Suggest restock quantities for low-stock records using [`DoubleReorderLevel`].
///
/// An empty result means everything is fully stocked.
pub fn suggest_reorders(records: &[InventoryRecord]) -> Vec<ReorderSuggestion<'_>> {
    suggest_reorders_with(records, &DoubleReorderLevel)
}

/// Suggest restock quantities for low-stock records using `policy`.
pub fn suggest_reorders_with<'a, P>(
    records: &'a [InventoryRecord],
    policy: &P,
) -> Vec<ReorderSuggestion<'a>>
where
    P: RestockPolicy + ?Sized,
{
    let suggestions: Vec<ReorderSuggestion<'a>> = records
        .iter()
        .filter(|record| record.is_low_stock())
        .map(|record| ReorderSuggestion {
            record,
            suggested_quantity: policy.suggested_quantity(record),
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        suggestions = suggestions.len(),
        "computed restock suggestions"
    );

    suggestions
}

/// Item name, prefixed with [`LOW_STOCK_MARKER`] when the record is low on stock.
pub fn decorate_label(record: &InventoryRecord) -> String {
    if record.is_low_stock() {
        format!("{LOW_STOCK_MARKER}{}", record.item_name)
    } else {
        record.item_name.clone()
    }
}
