use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One user record from the export: a plain mapping of field names to JSON
/// values. Transparent so the file and wire form is the bare object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}
