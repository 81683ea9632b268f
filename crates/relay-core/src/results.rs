//! Test outcomes keyed by identifier, in first-seen order.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Outcome of a single test attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "pass"),
            Outcome::Fail => write!(f, "fail"),
        }
    }
}

/// Mapping from test identifier to outcome.
///
/// Identifiers keep the order in which they were first seen; inserting an
/// identifier again overwrites its outcome in place (the source log carries
/// one line per attempt, and the last attempt wins). Keys are non-empty and
/// unique by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestResults {
    order: Vec<String>,
    by_id: HashMap<String, Outcome>,
}

impl TestResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite one result. Empty identifiers are ignored.
    pub fn insert(&mut self, identifier: impl Into<String>, outcome: Outcome) {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return;
        }
        if !self.by_id.contains_key(&identifier) {
            self.order.push(identifier.clone());
        }
        self.by_id.insert(identifier, outcome);
    }

    pub fn get(&self, identifier: &str) -> Option<Outcome> {
        self.by_id.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Outcome)> {
        self.order
            .iter()
            .map(|id| (id.as_str(), self.by_id[id.as_str()]))
    }

    /// Identifiers that failed, in first-seen order.
    pub fn failed(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, outcome)| *outcome == Outcome::Fail)
            .map(|(id, _)| id)
    }

    pub fn passed_count(&self) -> usize {
        self.iter()
            .filter(|(_, outcome)| *outcome == Outcome::Pass)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.len() - self.passed_count()
    }

    pub fn has_failures(&self) -> bool {
        self.iter().any(|(_, outcome)| outcome == Outcome::Fail)
    }
}

impl Serialize for TestResults {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (id, outcome) in self.iter() {
            map.serialize_entry(id, &outcome)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TestResults {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ResultsVisitor;

        impl<'de> Visitor<'de> for ResultsVisitor {
            type Value = TestResults;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of test identifier to \"pass\" or \"fail\"")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut results = TestResults::new();
                while let Some((id, outcome)) = access.next_entry::<String, Outcome>()? {
                    results.insert(id, outcome);
                }
                Ok(results)
            }
        }

        deserializer.deserialize_map(ResultsVisitor)
    }
}
