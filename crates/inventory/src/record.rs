use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stocktrack_core::{DomainError, DomainResult, ValueObject};

/// Stock keeping unit. Natural key of a record, though uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Sku {}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the inventory table (one per SKU).
///
/// `quantity` and `reorder_level` are expected to be non-negative, but values
/// are carried as supplied; validating them is the data provider's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub item_name: String,
    pub sku: Sku,
    pub category: String,
    pub quantity: i64,
    pub reorder_level: i64,
    pub supplier: String,
    pub expiration_date: NaiveDate,
}

impl ValueObject for InventoryRecord {}

impl InventoryRecord {
    /// True iff on-hand quantity is strictly below the reorder level.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.reorder_level
    }

    /// `reorder_level * 2 - quantity`, only for low-stock records.
    pub fn suggested_reorder_quantity(&self) -> Option<i64> {
        self.is_low_stock().then(|| {
            self.reorder_level
                .saturating_mul(2)
                .saturating_sub(self.quantity)
        })
    }
}

/// A record as it arrives from an upstream provider, before every field is known
/// to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub item_name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub reorder_level: Option<i64>,
    pub supplier: Option<String>,
    /// `YYYY-MM-DD`.
    pub expiration_date: Option<String>,
}

fn required<T>(value: Option<T>, field: &'static str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::missing_field(field))
}

impl TryFrom<RecordDraft> for InventoryRecord {
    type Error = DomainError;

    fn try_from(draft: RecordDraft) -> Result<Self, Self::Error> {
        let item_name = required(draft.item_name, "item_name")?;
        let sku = required(draft.sku, "sku")?;
        let category = required(draft.category, "category")?;
        let quantity = required(draft.quantity, "quantity")?;
        let reorder_level = required(draft.reorder_level, "reorder_level")?;
        let supplier = required(draft.supplier, "supplier")?;
        let raw_date = required(draft.expiration_date, "expiration_date")?;

        let expiration_date = NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d").map_err(|e| {
            DomainError::validation(format!("expiration_date {raw_date:?} for {sku}: {e}"))
        })?;

        Ok(Self {
            item_name,
            sku: Sku::new(sku),
            category,
            quantity,
            reorder_level,
            supplier,
            expiration_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> RecordDraft {
        RecordDraft {
            item_name: Some("Pepsi 330ml".to_string()),
            sku: Some("PP-330".to_string()),
            category: Some("Beverage".to_string()),
            quantity: Some(15),
            reorder_level: Some(20),
            supplier: Some("Supplier B".to_string()),
            expiration_date: Some("2025-02-15".to_string()),
        }
    }

    #[test]
    fn complete_draft_converts() {
        let record = InventoryRecord::try_from(full_draft()).unwrap();
        assert_eq!(record.sku, Sku::new("PP-330"));
        assert_eq!(record.expiration_date, NaiveDate::from_ymd_opt(2025, 2, 15).unwrap());
        assert!(record.is_low_stock());
        assert_eq!(record.suggested_reorder_quantity(), Some(25));
    }

    #[test]
    fn missing_field_fails_fast_with_its_name() {
        let draft = RecordDraft {
            reorder_level: None,
            ..full_draft()
        };
        let err = InventoryRecord::try_from(draft).unwrap_err();
        assert_eq!(err, DomainError::MissingField("reorder_level"));
    }

    #[test]
    fn first_missing_field_is_reported() {
        let err = InventoryRecord::try_from(RecordDraft::default()).unwrap_err();
        assert_eq!(err, DomainError::MissingField("item_name"));
    }

    #[test]
    fn unparseable_date_is_a_validation_error() {
        let draft = RecordDraft {
            expiration_date: Some("15/02/2025".to_string()),
            ..full_draft()
        };
        match InventoryRecord::try_from(draft).unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("PP-330")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn negative_values_are_carried_as_is() {
        let draft = RecordDraft {
            quantity: Some(-3),
            ..full_draft()
        };
        let record = InventoryRecord::try_from(draft).unwrap();
        assert_eq!(record.quantity, -3);
        assert_eq!(record.suggested_reorder_quantity(), Some(43));
    }

    #[test]
    fn stocked_record_has_no_suggestion() {
        let draft = RecordDraft {
            quantity: Some(20),
            ..full_draft()
        };
        let record = InventoryRecord::try_from(draft).unwrap();
        assert!(!record.is_low_stock());
        assert_eq!(record.suggested_reorder_quantity(), None);
    }

    #[test]
    fn deserializing_a_row_without_a_field_fails() {
        let json = r#"{"item_name":"Energy Drink","sku":"ED-250","category":"Beverage",
            "quantity":8,"supplier":"Supplier D","expiration_date":"2024-11-20"}"#;
        let err = serde_json::from_str::<InventoryRecord>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `reorder_level`"));
    }
}
