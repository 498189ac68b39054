use serde::{Deserialize, Serialize};
use serde_json::json;

use stocktrack_inventory::{
    DoubleReorderLevel, InventoryRecord, ReorderSuggestion, RestockPolicy, suggest_reorders_with,
};

use crate::job::AdvisorJob;
use crate::result::{AdvisorError, Insight};

/// Confidence attached to restock insights; the sizing heuristic is provisional.
const RESTOCK_CONFIDENCE: f64 = 0.5;

/// One suggestion as carried in the insight metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionPayload {
    pub sku: String,
    pub item_name: String,
    pub quantity: i64,
    pub reorder_level: i64,
    pub suggested_quantity: i64,
}

impl From<&ReorderSuggestion<'_>> for SuggestionPayload {
    fn from(s: &ReorderSuggestion<'_>) -> Self {
        Self {
            sku: s.record.sku.to_string(),
            item_name: s.record.item_name.clone(),
            quantity: s.record.quantity,
            reorder_level: s.record.reorder_level,
            suggested_quantity: s.suggested_quantity,
        }
    }
}

/// Restock advisory over an inventory snapshot.
///
/// Model:
/// - Keep records whose quantity is below their reorder level.
/// - Size each order with the configured [`RestockPolicy`].
pub struct RestockAdvisorJob {
    input: Vec<InventoryRecord>,
    policy: Box<dyn RestockPolicy>,
}

impl RestockAdvisorJob {
    pub fn new(input: Vec<InventoryRecord>) -> Self {
        Self {
            input,
            policy: Box::new(DoubleReorderLevel),
        }
    }

    pub fn with_policy(mut self, policy: Box<dyn RestockPolicy>) -> Self {
        self.policy = policy;
        self
    }
}

impl core::fmt::Debug for RestockAdvisorJob {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RestockAdvisorJob")
            .field("input", &self.input.len())
            .finish_non_exhaustive()
    }
}

impl AdvisorJob for RestockAdvisorJob {
    type Input = Vec<InventoryRecord>;

    fn input(&self) -> &Self::Input {
        &self.input
    }

    fn run(&self) -> Result<Insight, AdvisorError> {
        let suggestions = suggest_reorders_with(&self.input, self.policy.as_ref());

        let payload: Vec<SuggestionPayload> = suggestions.iter().map(SuggestionPayload::from).collect();

        let explanation = if payload.is_empty() {
            "all items are fully stocked".to_string()
        } else {
            format!(
                "{} of {} item(s) are below their reorder level",
                payload.len(),
                self.input.len()
            )
        };

        tracing::info!(
            records = self.input.len(),
            suggestions = payload.len(),
            "restock advisory completed"
        );

        Ok(Insight::new(payload.len() as f64, RESTOCK_CONFIDENCE)
            .with_explanation(explanation)
            .with_metadata(json!({
                "kind": "inventory.restock_suggestions",
                "suggestions": payload,
            })))
    }
}
