// ABOUTME: Hand-authored US/UK ingredient synonym groups as an equivalence-class table
// ABOUTME: Built once at process start; read-only afterwards, safe to share across threads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

//! # Synonym Table
//!
//! Known interchangeable ingredient names, mostly US/UK pairs. The table is
//! stored as equivalence classes with a canonical representative per term
//! rather than hand-symmetric pairs, so adding a name to a group can never
//! leave the relation half-defined. Each term is indexed under both its
//! written form and its plural stem, which is what the match cascade looks
//! up ("green onions" arrives stemmed as "green onion").

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::normalize;

/// One group per line; the first entry is the canonical representative
const GROUPS: &[&[&str]] = &[
    &["scallions", "green onions", "spring onions"],
    &["cilantro", "coriander", "fresh coriander", "fresh cilantro"],
    &["bell pepper", "pepper", "capsicum"],
    &["zucchini", "courgette"],
    &["eggplant", "aubergine"],
    &["arugula", "rocket"],
    &["heavy cream", "double cream", "whipping cream"],
    &["confectioners sugar", "powdered sugar", "icing sugar"],
    &["ground beef", "mince", "beef mince"],
    &["shrimp", "prawns"],
];

static TABLE: OnceLock<SynonymTable> = OnceLock::new();

/// Process-wide, read-only ingredient synonym lookup
#[derive(Debug)]
pub struct SynonymTable {
    index: HashMap<String, usize>,
}

impl SynonymTable {
    /// Shared table, built on first access
    #[must_use]
    pub fn global() -> &'static Self {
        TABLE.get_or_init(Self::build)
    }

    fn build() -> Self {
        let mut index = HashMap::new();
        for (group_id, group) in GROUPS.iter().enumerate() {
            for term in *group {
                index.entry((*term).to_owned()).or_insert(group_id);
                index.entry(normalize::stem(term)).or_insert(group_id);
            }
        }
        Self { index }
    }

    /// Group id for a name, trying the written form then its plural stem
    fn group_of(&self, name: &str) -> Option<usize> {
        self.index
            .get(name)
            .or_else(|| self.index.get(&normalize::stem(name)))
            .copied()
    }

    /// Whether two canonical names denote interchangeable ingredients
    #[must_use]
    pub fn are_synonyms(&self, a: &str, b: &str) -> bool {
        match (self.group_of(a), self.group_of(b)) {
            (Some(ga), Some(gb)) => ga == gb,
            _ => false,
        }
    }

    /// Canonical representative of the group a name belongs to
    #[must_use]
    pub fn canonical(&self, name: &str) -> Option<&'static str> {
        self.group_of(name).map(|id| GROUPS[id][0])
    }

    /// All names in the same group, excluding the queried one
    #[must_use]
    pub fn synonyms_of(&self, name: &str) -> Vec<&'static str> {
        self.group_of(name).map_or_else(Vec::new, |id| {
            GROUPS[id]
                .iter()
                .filter(|term| **term != name)
                .copied()
                .collect()
        })
    }
}
