pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{memory::InMemorySource, mongo::MongoSource};
pub use crate::config::{CliConfig, MongoSettings, Settings};
pub use crate::core::{showcase::Showcase, strategy::DefaultStrategy};
pub use crate::domain::model::{RawTeamRecord, TeamRecord};
pub use crate::domain::ports::RecordSource;
pub use crate::utils::error::{AppError, Result};
