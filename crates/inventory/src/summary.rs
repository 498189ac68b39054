//! Dashboard summary metrics derived from a record snapshot.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use crate::record::InventoryRecord;

/// Aggregate figures for the summary tiles and the analytics view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySummary {
    pub total_skus: usize,
    pub total_units: i64,
    pub low_stock_alerts: usize,
    /// Records expiring within `[today, today + window]`.
    pub upcoming_expirations: usize,
    pub expired: usize,
    pub units_by_category: BTreeMap<String, i64>,
}

impl InventorySummary {
    /// A negative `expiry_window_days` is treated as zero.
    pub fn from_records(records: &[InventoryRecord], today: NaiveDate, expiry_window_days: i64) -> Self {
        let window = u64::try_from(expiry_window_days).unwrap_or(0);
        let horizon = today.checked_add_days(Days::new(window)).unwrap_or(NaiveDate::MAX);

        let mut summary = Self {
            total_skus: records.len(),
            ..Self::default()
        };

        for record in records {
            summary.total_units = summary.total_units.saturating_add(record.quantity);

            if record.is_low_stock() {
                summary.low_stock_alerts += 1;
            }

            if record.expiration_date < today {
                summary.expired += 1;
            } else if record.expiration_date <= horizon {
                summary.upcoming_expirations += 1;
            }

            let units = summary
                .units_by_category
                .entry(record.category.clone())
                .or_insert(0);
            *units = units.saturating_add(record.quantity);
        }

        tracing::debug!(
            total_skus = summary.total_skus,
            low_stock_alerts = summary.low_stock_alerts,
            upcoming_expirations = summary.upcoming_expirations,
            "summarized inventory"
        );

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Sku;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_record(sku: &str, category: &str, quantity: i64, reorder_level: i64, expires: NaiveDate) -> InventoryRecord {
        InventoryRecord {
            item_name: sku.to_string(),
            sku: Sku::new(sku),
            category: category.to_string(),
            quantity,
            reorder_level,
            supplier: "Supplier A".to_string(),
            expiration_date: expires,
        }
    }

    #[test]
    fn empty_input_yields_zero_summary() {
        let summary = InventorySummary::from_records(&[], date(2024, 11, 1), 30);
        assert_eq!(summary, InventorySummary::default());
    }

    #[test]
    fn counts_units_alerts_and_expirations() {
        let records = vec![
            test_record("CC-330", "Beverage", 25, 20, date(2025, 1, 10)),
            test_record("PP-330", "Beverage", 15, 20, date(2025, 2, 15)),
            test_record("WB-500", "Beverage", 60, 50, date(2024, 12, 1)),
            test_record("ED-250", "Beverage", 8, 10, date(2024, 11, 20)),
            test_record("CH-100", "Snack", 40, 10, date(2024, 10, 1)),
        ];

        let summary = InventorySummary::from_records(&records, date(2024, 11, 1), 30);

        assert_eq!(summary.total_skus, 5);
        assert_eq!(summary.total_units, 148);
        assert_eq!(summary.low_stock_alerts, 2);
        assert_eq!(summary.upcoming_expirations, 2);
        assert_eq!(summary.expired, 1);
        assert_eq!(summary.units_by_category.get("Beverage"), Some(&108));
        assert_eq!(summary.units_by_category.get("Snack"), Some(&40));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let today = date(2024, 11, 1);
        let records = vec![
            test_record("A", "Beverage", 1, 0, today),
            test_record("B", "Beverage", 1, 0, date(2024, 11, 8)),
            test_record("C", "Beverage", 1, 0, date(2024, 11, 9)),
        ];
        let summary = InventorySummary::from_records(&records, today, 7);
        assert_eq!(summary.upcoming_expirations, 2);
    }

    #[test]
    fn negative_window_only_counts_today() {
        let today = date(2024, 11, 1);
        let records = vec![
            test_record("A", "Beverage", 1, 0, today),
            test_record("B", "Beverage", 1, 0, date(2024, 11, 2)),
        ];
        let summary = InventorySummary::from_records(&records, today, -5);
        assert_eq!(summary.upcoming_expirations, 1);
    }
}
