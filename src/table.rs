//! Exact-match translation tables built from the curated city lists.
//!
//! A table remembers the order in which keys were first seen, so deriving the
//! reverse mapping is deterministic: with `LastWins` the value inserted last for
//! a key survives but the key keeps its original position.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::cities;

/// How to resolve two entries that share a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Later entries replace earlier ones.
    #[default]
    LastWins,
    /// The first entry is kept, later ones are ignored.
    FirstWins,
    /// Any collision is an error.
    Reject,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastWins => "last-wins",
            Self::FirstWins => "first-wins",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("duplicate table key `{key}`: already maps to `{existing}`, refusing `{rejected}`")]
    DuplicateKey {
        key: String,
        existing: String,
        rejected: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    map: HashMap<String, String>,
    order: Vec<String>,
    collisions: usize,
}

impl TranslationTable {
    /// Build a table from `(source, target)` pairs in the given order.
    pub fn from_entries<'a, I>(entries: I, policy: CollisionPolicy) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::default();
        for (source, target) in entries {
            table.insert(source.to_string(), target.to_string(), policy)?;
        }
        Ok(table)
    }

    pub fn chinese_to_english(policy: CollisionPolicy) -> Result<Self, TableError> {
        Self::from_entries(cities::CHINESE_TO_ENGLISH.iter().copied(), policy)
    }

    pub fn english_to_chinese(policy: CollisionPolicy) -> Result<Self, TableError> {
        Self::from_entries(cities::ENGLISH_TO_CHINESE.iter().copied(), policy)
    }

    /// Exact, case-sensitive lookup. No whitespace or punctuation folding.
    pub fn translate(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    /// Derive the target -> source table.
    ///
    /// Several sources can share one target (`秦皇岛` and `秦皇岛市` both map to
    /// `Qinhuangdao`); `policy` picks which source the reverse entry points to.
    pub fn reversed(&self, policy: CollisionPolicy) -> Result<Self, TableError> {
        let mut reverse = Self::default();
        for (source, target) in self.iter() {
            reverse.insert(target.to_string(), source.to_string(), policy)?;
        }
        Ok(reverse)
    }

    /// Entries in first-insertion order of their keys.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .filter_map(|key| self.map.get(key).map(|value| (key.as_str(), value.as_str())))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Number of conflicting entries resolved while building the table.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    fn insert(
        &mut self,
        key: String,
        value: String,
        policy: CollisionPolicy,
    ) -> Result<(), TableError> {
        match self.map.entry(key) {
            Entry::Vacant(slot) => {
                self.order.push(slot.key().clone());
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => {
                if *slot.get() == value {
                    return Ok(());
                }
                match policy {
                    CollisionPolicy::Reject => {
                        return Err(TableError::DuplicateKey {
                            key: slot.key().clone(),
                            existing: slot.get().clone(),
                            rejected: value,
                        });
                    }
                    CollisionPolicy::LastWins => {
                        tracing::debug!(
                            "table key `{}`: `{}` replaces `{}`",
                            slot.key(),
                            value,
                            slot.get()
                        );
                        slot.insert(value);
                    }
                    CollisionPolicy::FirstWins => {
                        tracing::debug!(
                            "table key `{}`: keeping `{}`, ignoring `{}`",
                            slot.key(),
                            slot.get(),
                            value
                        );
                    }
                }
                self.collisions += 1;
            }
        }
        Ok(())
    }
}
