pub mod showcase;
pub mod strategy;

pub use crate::domain::model::{RawTeamRecord, TeamRecord};
pub use crate::domain::ports::RecordSource;
pub use crate::utils::error::Result;
