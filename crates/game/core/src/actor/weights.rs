//! Named integer parameters configuring an actor instance.

use std::collections::BTreeMap;

/// Well-known weight names.
pub mod keys {
    /// Reach in grid steps (move distance, attack distance).
    pub const RANGE: &str = "range";
    /// Damage dealt per hit.
    pub const DAMAGE: &str = "damage";
    /// Action points consumed when the actor completes.
    pub const ACT_POINT: &str = "actPoint";
}

/// Name → value map with a permissive read: unknown names read as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Weights {
    values: BTreeMap<String, i32>,
}

impl Weights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds weights from parallel name / value lists.
    ///
    /// Names without a value are installed as 0, surplus values are ignored,
    /// and a repeated name keeps its last value.
    pub fn from_lists(names: &[String], values: &[i32]) -> Self {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), values.get(index).copied().unwrap_or(0)))
            .collect()
    }

    /// Returns the value for `key`, or 0 if it was never set.
    pub fn get(&self, key: &str) -> i32 {
        self.values.get(key).copied().unwrap_or(0)
    }

    pub fn set(&mut self, key: impl Into<String>, value: i32) {
        self.values.insert(key.into(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Copies every entry of `other` over this map.
    pub fn install(&mut self, other: Weights) {
        self.values.extend(other.values);
    }

    /// First key of `required` that is absent.
    pub fn first_missing(&self, required: &[&'static str]) -> Option<&'static str> {
        required.iter().copied().find(|key| !self.contains(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.values.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for Weights {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        let mut weights = Weights::new();
        for (key, value) in iter {
            weights.set(key, value);
        }
        weights
    }
}
