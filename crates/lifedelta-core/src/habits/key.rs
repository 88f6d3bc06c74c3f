use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::errors::LifeDeltaError;

/// The fixed set of habits a change set may adjust.
///
/// Declaration order is the evaluation order used by the delta calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitKey {
    Smoking,
    Exercise,
    Sleep,
    Weight,
    Alcohol,
}

impl HabitKey {
    pub const ALL: [HabitKey; 5] = [
        HabitKey::Smoking,
        HabitKey::Exercise,
        HabitKey::Sleep,
        HabitKey::Weight,
        HabitKey::Alcohol,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smoking => "smoking",
            Self::Exercise => "exercise",
            Self::Sleep => "sleep",
            Self::Weight => "weight",
            Self::Alcohol => "alcohol",
        }
    }

    /// Natural unit of a change value for this habit.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Smoking => "pack-equivalent",
            Self::Exercise => "minutes/week",
            Self::Sleep => "hours/night",
            Self::Weight => "kg",
            Self::Alcohol => "drinks/week",
        }
    }

    /// Slider bounds the app presents for this habit.
    ///
    /// Informational only: the calculator accepts any value.
    pub fn reference_range(self) -> RangeInclusive<f64> {
        match self {
            Self::Smoking => 0.0..=1.0,
            Self::Exercise => 0.0..=300.0,
            Self::Sleep => 5.0..=10.0,
            Self::Weight => -20.0..=20.0,
            Self::Alcohol => 0.0..=14.0,
        }
    }
}

impl fmt::Display for HabitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HabitKey {
    type Err = LifeDeltaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| LifeDeltaError::UnknownHabit { key: s.to_string() })
    }
}
