use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Output of an advisory job.
///
/// An insight is something to display, not a change to inventory data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Primary score (job-specific meaning).
    pub score: f64,

    /// Confidence in \[0, 1\].
    pub confidence: f64,

    /// Optional human-readable explanation.
    pub explanation: Option<String>,

    /// Free-form structured payload.
    pub metadata: JsonValue,
}

impl Insight {
    pub fn new(score: f64, confidence: f64) -> Self {
        Self {
            score,
            confidence,
            explanation: None,
            metadata: JsonValue::Null,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }

    /// Decode one top-level metadata field.
    pub fn metadata_field<T: DeserializeOwned>(&self, key: &str) -> Result<T, AdvisorError> {
        let value = self
            .metadata
            .get(key)
            .cloned()
            .ok_or_else(|| AdvisorError::Internal(format!("insight metadata has no {key:?} field")))?;
        serde_json::from_value(value)
            .map_err(|e| AdvisorError::Internal(format!("insight metadata field {key:?}: {e}")))
    }
}

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("internal error: {0}")]
    Internal(String),
}
