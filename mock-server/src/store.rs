//! In-memory versioned argument storage.
//!
//! Each argument keeps every version of itself. Version numbers start at 1;
//! the last entry is the live version. The conclusion never changes across
//! versions, only the premises do.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Argument {
    #[serde(default)]
    pub conclusion: String,
    #[serde(default)]
    pub premises: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArgumentWithId {
    pub id: u64,
    #[serde(flatten)]
    pub argument: Argument,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArgumentList {
    pub arguments: Vec<ArgumentWithId>,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    arguments: BTreeMap<u64, Vec<Argument>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids start at 1.
    pub fn save(&mut self, argument: Argument) -> u64 {
        self.next_id += 1;
        self.arguments.insert(self.next_id, vec![argument]);
        self.next_id
    }

    pub fn live(&self, id: u64) -> Option<&Argument> {
        self.arguments.get(&id).and_then(|versions| versions.last())
    }

    pub fn version(&self, id: u64, version: u16) -> Option<&Argument> {
        let index = usize::from(version).checked_sub(1)?;
        self.arguments.get(&id)?.get(index)
    }

    /// Live versions whose conclusion matches exactly, ordered by id.
    pub fn find(&self, conclusion: &str) -> Vec<ArgumentWithId> {
        self.arguments
            .iter()
            .filter_map(|(id, versions)| {
                let live = versions.last()?;
                (live.conclusion == conclusion).then(|| ArgumentWithId {
                    id: *id,
                    argument: live.clone(),
                })
            })
            .collect()
    }

    /// Appends a new version with `premises` and returns its number, or
    /// `None` when the argument does not exist or has run out of versions.
    pub fn update_premises(&mut self, id: u64, premises: Vec<String>) -> Option<u16> {
        let versions = self.arguments.get_mut(&id)?;
        let next = u16::try_from(versions.len() + 1).ok()?;
        let conclusion = versions.last()?.conclusion.clone();
        versions.push(Argument {
            conclusion,
            premises,
        });
        Some(next)
    }

    /// Removes every version. Returns whether the argument existed.
    pub fn delete(&mut self, id: u64) -> bool {
        self.arguments.remove(&id).is_some()
    }
}
