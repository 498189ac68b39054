use std::path::PathBuf;

use thiserror::Error;

use stocktrack_advisor::AdvisorError;
use stocktrack_core::DomainError;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Advisor(#[from] AdvisorError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unknown screen {0:?} (expected one of: view-inventory, restock, analytics, chat)")]
    UnknownScreen(String),
}
