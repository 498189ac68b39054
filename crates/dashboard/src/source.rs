//! Inventory data providers.

use std::path::PathBuf;

use stocktrack_core::DomainError;
use stocktrack_inventory::{InventoryRecord, InventorySource, RecordDraft};

use crate::error::DashboardError;

/// Fixed in-memory beverage table used when no data file is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockInventorySource;

// (item name, sku, quantity, reorder level, supplier, expiration date)
const MOCK_ROWS: [(&str, &str, i64, i64, &str, &str); 4] = [
    ("Coca-Cola 330ml", "CC-330", 25, 20, "Supplier A", "2025-01-10"),
    ("Pepsi 330ml", "PP-330", 15, 20, "Supplier B", "2025-02-15"),
    ("Water Bottle 500ml", "WB-500", 60, 50, "Supplier C", "2024-12-01"),
    ("Energy Drink", "ED-250", 8, 10, "Supplier D", "2024-11-20"),
];

impl InventorySource for MockInventorySource {
    type Error = DomainError;

    fn load(&self) -> Result<Vec<InventoryRecord>, Self::Error> {
        MOCK_ROWS
            .iter()
            .map(|&(name, sku, quantity, reorder_level, supplier, expires)| {
                InventoryRecord::try_from(RecordDraft {
                    item_name: Some(name.to_string()),
                    sku: Some(sku.to_string()),
                    category: Some("Beverage".to_string()),
                    quantity: Some(quantity),
                    reorder_level: Some(reorder_level),
                    supplier: Some(supplier.to_string()),
                    expiration_date: Some(expires.to_string()),
                })
            })
            .collect()
    }
}

/// Reads a JSON array of records from disk.
///
/// Every row must carry every field; the first absent one aborts the load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InventorySource for JsonFileSource {
    type Error = DashboardError;

    fn load(&self) -> Result<Vec<InventoryRecord>, Self::Error> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| DashboardError::Io {
            path: self.path.clone(),
            source,
        })?;

        let drafts: Vec<RecordDraft> =
            serde_json::from_str(&raw).map_err(|source| DashboardError::Json {
                path: self.path.clone(),
                source,
            })?;

        let records = drafts
            .into_iter()
            .map(InventoryRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(path = %self.path.display(), records = records.len(), "read inventory file");
        Ok(records)
    }
}
