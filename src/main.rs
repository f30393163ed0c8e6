use clap::Parser;
use devteam_defaults::utils::{error::exit_status, logger, validation::Validate};
use devteam_defaults::{CliConfig, MongoSource, Result, Settings, Showcase};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting devteam-defaults");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let settings = match cli.resolve().and_then(|settings| {
        settings.validate()?;
        Ok(settings)
    }) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    let result = run(settings).await;
    match &result {
        Ok(written) => tracing::debug!("Printed {} record(s)", written),
        Err(e) if e.is_not_found() => tracing::warn!("No documents found"),
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            eprintln!("{}", e);
        }
    }

    let status = exit_status(&result);
    if status != 0 {
        std::process::exit(status);
    }

    Ok(())
}

async fn run(settings: Settings) -> Result<usize> {
    let source = MongoSource::connect(&settings.mongo).await?;
    tracing::info!(
        "Reading {}.{}",
        settings.mongo.database,
        settings.mongo.collection
    );

    let showcase = Showcase::new(source, settings.record_id).with_strategies(settings.strategies);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = showcase.execute(&mut out).await?;
    Ok(written)
}
