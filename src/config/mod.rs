pub mod toml_config;

use crate::core::strategy::DefaultStrategy;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::time::Duration;
use toml_config::FileConfig;

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "databaseNameTest";
pub const DEFAULT_COLLECTION: &str = "collectionNameTest";
pub const DEFAULT_RECORD_ID: &str = "663c385af3dad2d0510a7216";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_APP_NAME: &str = "devteam-defaults";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "devteam-defaults")]
#[command(about = "Fetch one team record and print it with three devTeam defaulting strategies")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// MongoDB connection string [default: mongodb://localhost:27017]
    #[arg(long)]
    pub uri: Option<String>,

    /// Database name [default: databaseNameTest]
    #[arg(long)]
    pub database: Option<String>,

    /// Collection name [default: collectionNameTest]
    #[arg(long)]
    pub collection: Option<String>,

    /// `_id` of the record to fetch [default: 663c385af3dad2d0510a7216]
    #[arg(long)]
    pub id: Option<String>,

    /// Strategies to run, in order [default: preset,field-default,post-decode]
    #[arg(long = "strategy", value_enum, value_delimiter = ',')]
    pub strategies: Vec<DefaultStrategy>,

    /// Server selection timeout [default: 10]
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoSettings {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub timeout: Duration,
    pub app_name: String,
}

impl Default for MongoSettings {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mongo: MongoSettings,
    pub record_id: String,
    pub strategies: Vec<DefaultStrategy>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mongo: MongoSettings::default(),
            record_id: DEFAULT_RECORD_ID.to_string(),
            strategies: DefaultStrategy::ALL.to_vec(),
        }
    }
}

impl CliConfig {
    /// 讀取設定檔（若有）並合併：命令列 > 設定檔 > 預設值
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };
        Ok(self.resolve_with(file))
    }

    pub fn resolve_with(&self, file: FileConfig) -> Settings {
        let defaults = Settings::default();
        let mongo = file.mongo;
        let query = file.query;

        let timeout_seconds = self
            .timeout_seconds
            .or(mongo.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        let strategies = if !self.strategies.is_empty() {
            self.strategies.clone()
        } else {
            query.strategies.unwrap_or(defaults.strategies)
        };

        Settings {
            mongo: MongoSettings {
                uri: pick(&self.uri, mongo.uri, defaults.mongo.uri),
                database: pick(&self.database, mongo.database, defaults.mongo.database),
                collection: pick(&self.collection, mongo.collection, defaults.mongo.collection),
                timeout: Duration::from_secs(timeout_seconds),
                app_name: mongo.app_name.unwrap_or(defaults.mongo.app_name),
            },
            record_id: pick(&self.id, query.id, defaults.record_id),
            strategies,
        }
    }
}

fn pick(cli: &Option<String>, file: Option<String>, default: String) -> String {
    cli.clone().or(file).unwrap_or(default)
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_mongo_uri("mongo.uri", &self.mongo.uri)?;
        validation::validate_database_name("mongo.database", &self.mongo.database)?;
        validation::validate_collection_name("mongo.collection", &self.mongo.collection)?;
        validation::validate_range("mongo.timeout_seconds", self.mongo.timeout.as_secs(), 1, 300)?;
        validation::validate_non_empty_string("mongo.app_name", &self.mongo.app_name)?;
        validation::validate_non_empty_string("query.id", &self.record_id)?;
        Ok(())
    }
}
