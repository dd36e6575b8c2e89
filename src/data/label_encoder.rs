//! Bijective label encoding: sorted distinct labels to dense ids

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// A class label as found in a corpus.
///
/// Integers order before text, so a mixed column still has one total order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Integer(i64),
    Text(String),
}

impl Label {
    /// Read a label from a cell. Floats, booleans, null and nested values are rejected.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Label::Text(s.clone())),
            Value::Number(n) => n.as_i64().map(Label::Integer),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Integer(i) => write!(f, "{i}"),
            Label::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Text(s)
    }
}

impl From<i64> for Label {
    fn from(i: i64) -> Self {
        Label::Integer(i)
    }
}

/// Maps each distinct label to its rank among the sorted distinct labels.
///
/// `classes[id]` is the label encoded as `id`. Serializes as the class list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "Vec<L>",
    into = "Vec<L>",
    bound(serialize = "L: Serialize + Clone", deserialize = "L: Deserialize<'de>")
)]
pub struct LabelEncoder<L: Ord = Label> {
    classes: Vec<L>,
}

impl<L: Ord + Clone> LabelEncoder<L> {
    /// Fit over every label in `labels`; duplicates collapse to one class
    pub fn fit<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a L>,
        L: 'a,
    {
        let distinct: BTreeSet<&L> = labels.into_iter().collect();
        Self {
            classes: distinct.into_iter().cloned().collect(),
        }
    }
}

impl<L: Ord> LabelEncoder<L> {
    pub fn transform(&self, label: &L) -> Option<u32> {
        self.classes
            .binary_search(label)
            .ok()
            .map(|idx| idx as u32)
    }

    pub fn inverse_transform(&self, id: u32) -> Option<&L> {
        self.classes.get(id as usize)
    }

    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<L: Ord> From<Vec<L>> for LabelEncoder<L> {
    fn from(mut classes: Vec<L>) -> Self {
        classes.sort();
        classes.dedup();
        Self { classes }
    }
}

impl<L: Ord> From<LabelEncoder<L>> for Vec<L> {
    fn from(encoder: LabelEncoder<L>) -> Self {
        encoder.classes
    }
}
