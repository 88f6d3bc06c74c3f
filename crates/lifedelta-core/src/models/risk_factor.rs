use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One named contributor to a `LifeDelta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskFactor {
    pub name: String,
    /// Signed days, full precision.
    pub impact: f64,
    pub description: String,
    /// Whether the app should render this factor as beneficial.
    pub is_positive: bool,
}

impl RiskFactor {
    pub fn new(
        name: impl Into<String>,
        impact: f64,
        description: impl Into<String>,
        is_positive: bool,
    ) -> Self {
        Self {
            name: name.into(),
            impact,
            description: description.into(),
            is_positive,
        }
    }

    /// Ranking key.
    pub fn magnitude(&self) -> f64 {
        self.impact.abs()
    }
}
