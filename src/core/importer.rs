use crate::core::timestamp::timestamp;
use crate::domain::model::Record;
use crate::domain::ports::IndexClient;
use crate::utils::error::{ImportError, Result};
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub records: usize,
    pub duration: Duration,
}

/// Reads a JSON export and submits every record to the index, one update
/// call per record. A failure anywhere aborts the run; records already
/// submitted stay in the index.
pub struct BatchImporter<C: IndexClient> {
    client: C,
    core: String,
}

impl<C: IndexClient> BatchImporter<C> {
    pub fn new(client: C, core: impl Into<String>) -> Self {
        Self {
            client,
            core: core.into(),
        }
    }

    pub async fn run<P: AsRef<Path>>(&self, path: P) -> Result<ImportSummary> {
        let started = Instant::now();

        let content = std::fs::read_to_string(&path)?;
        let mut records: Vec<Record> = serde_json::from_str(&content)?;
        tracing::info!(
            records = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "loaded import file"
        );

        let total = records.len();
        for (index, record) in records.iter_mut().enumerate() {
            prepare_record(record, index)?;
            self.client
                .update(&self.core, std::slice::from_ref(record))
                .await?;

            if (index + 1) % 100 == 0 {
                tracing::info!("{} / {} records submitted", index + 1, total);
            }
        }

        let summary = ImportSummary {
            records: total,
            duration: started.elapsed(),
        };
        tracing::info!(
            records = summary.records,
            elapsed_ms = summary.duration.as_millis() as u64,
            "import finished"
        );
        Ok(summary)
    }
}

/// Stamp the login timestamp and drop the index-internal version field.
/// The export is required to carry `_version_` on every record.
fn prepare_record(record: &mut Record, index: usize) -> Result<()> {
    let lastlogin = format!("{}Z", timestamp().trim().replace(' ', "T"));
    record
        .data
        .insert("lastlogin".to_string(), serde_json::Value::String(lastlogin));

    if record.data.remove("_version_").is_none() {
        return Err(ImportError::MissingFieldError {
            index,
            field: "_version_".to_string(),
        });
    }

    Ok(())
}
