use serde::{Deserialize, Serialize};

/// A team record in its printed shape. `devTeam` is always a list.
///
/// Deserializing applies the default at the field: a document whose
/// `devTeam` is missing or `null` yields an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(
        rename = "devTeam",
        default,
        deserialize_with = "crate::utils::null_default::deserialize"
    )]
    pub dev_team: Vec<String>,
}

impl TeamRecord {
    /// An empty record whose `dev_team` starts out as `[]`.
    pub fn new() -> Self {
        Self {
            id: String::new(),
            dev_team: Vec::new(),
        }
    }

    /// Overlay the fields present in `raw`. An absent list keeps the current one.
    pub fn merge(&mut self, raw: RawTeamRecord) {
        self.id = raw.id;
        if let Some(dev_team) = raw.dev_team {
            self.dev_team = dev_team;
        }
    }
}

/// A team record as stored. Both a missing and a `null` `devTeam` decode to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTeamRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "devTeam", default)]
    pub dev_team: Option<Vec<String>>,
}

impl From<RawTeamRecord> for TeamRecord {
    fn from(raw: RawTeamRecord) -> Self {
        Self {
            id: raw.id,
            dev_team: raw.dev_team.unwrap_or_default(),
        }
    }
}
