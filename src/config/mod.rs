pub mod cli;

use crate::utils::error::{ImportError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Local override, consulted first.
pub const LOCAL_SECRETS_FILE: &str = "local_import_secrets.toml";
/// Default secrets file.
pub const SECRETS_FILE: &str = "import_secrets.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretsConfig {
    pub solr: SolrConfig,
    pub import: ImportConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolrConfig {
    pub host: String,
    pub port: u16,
    pub application: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    pub data_file: String,
    #[serde(default = "default_core")]
    pub core: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub file: String,
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    #[serde(default = "default_backup_count")]
    pub backup_count: usize,
}

fn default_core() -> String {
    "hb2_users".to_string()
}

fn default_max_bytes() -> u64 {
    10_000
}

fn default_backup_count() -> usize {
    1
}

impl SolrConfig {
    /// 索引服務的基底 URL,例如 `http://localhost:8983/search/`
    pub fn base_url(&self) -> String {
        format!(
            "http://{}:{}/{}/",
            self.host,
            self.port,
            self.application.trim_matches('/')
        )
    }
}

impl SecretsConfig {
    /// 解析秘密設定:優先讀取本地覆寫檔,否則回退到預設檔
    pub fn resolve<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let local = dir.as_ref().join(LOCAL_SECRETS_FILE);
        if local.exists() {
            return Self::from_file(local);
        }
        Self::from_file(dir.as_ref().join(SECRETS_FILE))
    }

    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ImportError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ImportError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SOLR_HOST})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for SecretsConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("solr.host", &self.solr.host)?;
        validation::validate_positive_number("solr.port", self.solr.port as usize, 1)?;
        validation::validate_non_empty_string("solr.application", &self.solr.application)?;
        validation::validate_url("solr", &self.solr.base_url())?;
        validation::validate_path("import.data_file", &self.import.data_file)?;
        validation::validate_non_empty_string("import.core", &self.import.core)?;
        validation::validate_path("log.file", &self.log.file)?;
        Ok(())
    }
}
