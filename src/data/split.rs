//! Split values to output partitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Output partition of a tokenized dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Train,
    Validation,
    Test,
}

impl Partition {
    pub const ALL: [Partition; 3] = [Partition::Train, Partition::Validation, Partition::Test];

    /// Fixed corpus mapping: `train`, `dev` and `test`. Anything else has no partition.
    pub fn from_split(value: &str) -> Option<Self> {
        match value {
            "train" => Some(Partition::Train),
            "dev" => Some(Partition::Validation),
            "test" => Some(Partition::Test),
            _ => None,
        }
    }

    /// Look up a partition by its output name (`validation`, not `dev`)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Partition::Train => "train",
            Partition::Validation => "validation",
            Partition::Test => "test",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rows left out of every partition, counted per split value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedRows {
    by_split: BTreeMap<String, usize>,
}

impl DroppedRows {
    pub fn record(&mut self, split_value: &str) {
        *self.by_split.entry(split_value.to_string()).or_insert(0) += 1;
    }

    pub fn total(&self) -> usize {
        self.by_split.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_split.is_empty()
    }

    pub fn count(&self, split_value: &str) -> usize {
        self.by_split.get(split_value).copied().unwrap_or(0)
    }

    pub fn by_split(&self) -> &BTreeMap<String, usize> {
        &self.by_split
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_mapping() {
        assert_eq!(Partition::from_split("train"), Some(Partition::Train));
        assert_eq!(Partition::from_split("dev"), Some(Partition::Validation));
        assert_eq!(Partition::from_split("test"), Some(Partition::Test));
        assert_eq!(Partition::from_split("validation"), None);
        assert_eq!(Partition::from_split("Train"), None);
        assert_eq!(Partition::from_split("unused"), None);
    }

    #[test]
    fn test_names() {
        for partition in Partition::ALL {
            assert_eq!(Partition::from_name(partition.name()), Some(partition));
        }
        assert_eq!(Partition::from_name("dev"), None);
        assert_eq!(Partition::Validation.to_string(), "validation");
    }

    #[test]
    fn test_dropped_rows() {
        let mut dropped = DroppedRows::default();
        assert!(dropped.is_empty());

        dropped.record("unused");
        dropped.record("unused");
        dropped.record("holdout");

        assert_eq!(dropped.total(), 3);
        assert_eq!(dropped.count("unused"), 2);
        assert_eq!(dropped.count("train"), 0);
    }
}
