use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "user-import")]
#[command(about = "Bulk import of user records into a search-index core")]
pub struct CliConfig {
    /// Directory holding import_secrets.toml (and an optional
    /// local_import_secrets.toml override)
    #[arg(long, default_value = ".")]
    pub secrets_dir: String,

    /// Input JSON export; overrides import.data_file from the secrets config
    #[arg(long)]
    pub input: Option<String>,

    /// Target core; overrides import.core from the secrets config
    #[arg(long)]
    pub core: Option<String>,

    /// Delete all documents in the target core before importing
    #[arg(long)]
    pub cleanup: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
