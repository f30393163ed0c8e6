use crate::domain::model::{RawTeamRecord, TeamRecord};
use crate::utils::error::Result;
use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the `devTeam` default gets applied to a fetched document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultStrategy {
    /// Start from `TeamRecord::new()` and overlay the decoded fields.
    Preset,
    /// Decode straight into `TeamRecord`; the serde field default fills the gap.
    FieldDefault,
    /// Decode the stored shape, then swap a missing list for `[]`.
    PostDecode,
}

impl DefaultStrategy {
    pub const ALL: [DefaultStrategy; 3] = [
        DefaultStrategy::Preset,
        DefaultStrategy::FieldDefault,
        DefaultStrategy::PostDecode,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DefaultStrategy::Preset => "preset",
            DefaultStrategy::FieldDefault => "field-default",
            DefaultStrategy::PostDecode => "post-decode",
        }
    }

    pub fn decode(self, document: Document) -> Result<TeamRecord> {
        match self {
            DefaultStrategy::Preset => {
                let mut record = TeamRecord::new();
                record.merge(bson::from_document::<RawTeamRecord>(document)?);
                Ok(record)
            }
            DefaultStrategy::FieldDefault => Ok(bson::from_document::<TeamRecord>(document)?),
            DefaultStrategy::PostDecode => {
                let raw: RawTeamRecord = bson::from_document(document)?;
                Ok(TeamRecord::from(raw))
            }
        }
    }
}

impl fmt::Display for DefaultStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
