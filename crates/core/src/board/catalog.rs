// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Piece catalog supplied by the host application

use super::{BoardError, MatchKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A matching key and the visual content a presenter shows for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub key: MatchKey,
    #[serde(default)]
    pub content: String,
}

impl CatalogEntry {
    pub fn new(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: MatchKey(key.into()),
            content: content.into(),
        }
    }
}

/// Read-only, ordered collection of catalog entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Catalog of `count` generated keys ("k0", "k1", ...)
    pub fn numbered(count: usize) -> Self {
        Self::new(
            (0..count)
                .map(|i| CatalogEntry::new(format!("k{i}"), format!("#{i}")))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// First entry of each distinct key, in catalog order
    pub fn usable(&self) -> Vec<&CatalogEntry> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|e| seen.insert(&e.key))
            .collect()
    }

    /// Content registered for `key`
    pub fn content(&self, key: &MatchKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| &e.key == key)
            .map(|e| e.content.as_str())
    }

    /// Select the keys for `pairs` distinct pairs
    pub fn select(&self, pairs: usize) -> Result<Vec<MatchKey>, BoardError> {
        let usable = self.usable();
        if usable.len() < pairs {
            return Err(BoardError::CatalogTooSmall {
                required: pairs,
                available: usable.len(),
            });
        }
        Ok(usable
            .into_iter()
            .take(pairs)
            .map(|e| e.key.clone())
            .collect())
    }
}

impl From<Vec<CatalogEntry>> for Catalog {
    fn from(entries: Vec<CatalogEntry>) -> Self {
        Self::new(entries)
    }
}
