use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::HabitKey;

/// Proposed habit changes, keyed by habit, in each habit's natural unit.
///
/// Absent keys contribute nothing. Unknown keys supplied through
/// [`HabitChangeSet::from_raw`] or deserialization are dropped and remembered
/// in [`HabitChangeSet::ignored_keys`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct HabitChangeSet {
    changes: BTreeMap<HabitKey, f64>,
    ignored: Vec<String>,
}

impl HabitChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from string-keyed pairs, as produced by the slider surface.
    pub fn from_raw<I, K>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut set = Self::new();
        for (key, value) in raw {
            let key = key.as_ref();
            match key.parse::<HabitKey>() {
                Ok(habit) => {
                    set.changes.insert(habit, value);
                }
                Err(_) => {
                    debug!(key, value, "ignoring unknown habit key");
                    set.ignored.push(key.to_string());
                }
            }
        }
        set
    }

    /// Builder-style insert.
    pub fn with(mut self, key: HabitKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a change, returning the previous value.
    pub fn set(&mut self, key: HabitKey, value: f64) -> Option<f64> {
        self.changes.insert(key, value)
    }

    pub fn get(&self, key: HabitKey) -> Option<f64> {
        self.changes.get(&key).copied()
    }

    pub fn remove(&mut self, key: HabitKey) -> Option<f64> {
        self.changes.remove(&key)
    }

    /// Reset every slider. Also forgets ignored keys.
    pub fn clear(&mut self) {
        self.changes.clear();
        self.ignored.clear();
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Changes in habit evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (HabitKey, f64)> + '_ {
        self.changes.iter().map(|(k, v)| (*k, *v))
    }

    /// Raw keys that were not recognized when this set was built.
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored
    }

    /// Keys whose value lies outside [`HabitKey::reference_range`].
    /// NaN values count as outside.
    pub fn outside_reference_range(&self) -> Vec<HabitKey> {
        self.iter()
            .filter(|(k, v)| !k.reference_range().contains(v))
            .map(|(k, _)| k)
            .collect()
    }
}

impl From<BTreeMap<String, f64>> for HabitChangeSet {
    fn from(raw: BTreeMap<String, f64>) -> Self {
        Self::from_raw(raw)
    }
}

impl From<HabitChangeSet> for BTreeMap<String, f64> {
    fn from(set: HabitChangeSet) -> Self {
        set.changes
            .into_iter()
            .map(|(k, v)| (k.as_str().to_string(), v))
            .collect()
    }
}

impl FromIterator<(HabitKey, f64)> for HabitChangeSet {
    fn from_iter<T: IntoIterator<Item = (HabitKey, f64)>>(iter: T) -> Self {
        Self {
            changes: iter.into_iter().collect(),
            ignored: Vec::new(),
        }
    }
}
