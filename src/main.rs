use clap::Parser;
use user_import::utils::{logger, validation::Validate};
use user_import::{BatchImporter, CliConfig, IndexClient, SecretsConfig, SolrClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 解析秘密設定(本地覆寫優先)
    let secrets = match SecretsConfig::resolve(&cli.secrets_dir) {
        Ok(secrets) => secrets,
        Err(e) => {
            eprintln!("❌ Failed to load secrets config: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let _log_writer = logger::init_import_logger(&secrets.log, cli.verbose)?;

    tracing::info!("Starting user-import");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = secrets.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let core = cli
        .core
        .clone()
        .unwrap_or_else(|| secrets.import.core.clone());
    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| secrets.import.data_file.clone());

    let client = SolrClient::new(&secrets.solr)?;

    if cli.cleanup {
        let status = client.cleanup(&core).await?;
        tracing::info!("cleanup of core '{}' {}", core, status);
    }

    let importer = BatchImporter::new(client, core);

    match importer.run(&input).await {
        Ok(summary) => {
            tracing::info!("✅ Import completed: {} records", summary.records);
            println!("✅ Imported {} records from {}", summary.records, input);
        }
        Err(e) => {
            tracing::error!("❌ Import failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
