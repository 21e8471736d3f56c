use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outcome of a delete-all cleanup attempt against a core. A refused
/// connection is recorded here instead of surfacing as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupStatus {
    Completed,
    Failed,
}

impl std::fmt::Display for CleanupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanupStatus::Completed => write!(f, "completed"),
            CleanupStatus::Failed => write!(f, "failed"),
        }
    }
}

#[async_trait]
pub trait IndexClient: Send + Sync {
    /// Submit a batch of records to the named core.
    async fn update(&self, core: &str, records: &[Record]) -> Result<()>;

    /// Delete all documents in the named core and commit.
    async fn cleanup(&self, core: &str) -> Result<CleanupStatus>;
}
