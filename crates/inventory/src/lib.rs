//! Inventory domain module.
//!
//! Stock evaluation is implemented purely as deterministic functions over
//! caller-supplied records (no IO, no rendering, no storage).

pub mod evaluator;
pub mod record;
pub mod source;
pub mod summary;

pub use evaluator::{
    DoubleReorderLevel, LOW_STOCK_MARKER, ReorderSuggestion, RestockPolicy, StockStatus,
    decorate_label, evaluate_stock, suggest_reorders, suggest_reorders_with,
};
pub use record::{InventoryRecord, RecordDraft, Sku};
pub use source::InventorySource;
pub use summary::InventorySummary;
