pub mod importer;
pub mod timestamp;

pub use crate::domain::model::Record;
pub use crate::domain::ports::{CleanupStatus, IndexClient};
pub use crate::utils::error::Result;
