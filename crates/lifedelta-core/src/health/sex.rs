use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Biological sex as reported by the device health store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum BiologicalSex {
    #[default]
    NotSet,
    Male,
    Female,
    Other,
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotSet => "notSet",
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}
