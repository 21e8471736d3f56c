pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::solr::SolrClient;
pub use crate::config::{cli::CliConfig, SecretsConfig};
pub use crate::core::{importer::BatchImporter, timestamp::timestamp};
pub use crate::domain::model::Record;
pub use crate::domain::ports::{CleanupStatus, IndexClient};
pub use crate::utils::error::{ImportError, Result};
