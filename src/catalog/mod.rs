// SPDX-License-Identifier: MPL-2.0
//! Read-only catalog of animation records.
//!
//! The catalog is built once at startup, either from one of the built-in
//! variants or from a TOML manifest, and is never mutated afterwards. All
//! queries borrow from it and preserve catalog order.
//!
//! # Examples
//!
//! ```
//! use motion_gallery::catalog::Catalog;
//!
//! let catalog = Catalog::classic();
//! let physics: Vec<u32> = catalog
//!     .by_category("Physics")
//!     .map(|record| record.id.value())
//!     .collect();
//! assert_eq!(physics, vec![2, 4]);
//! ```

mod builtin;
pub mod manifest;
mod record;

pub use builtin::AI_CATEGORY;
pub use manifest::{from_manifest_str, load_manifest};
pub use record::{AnimationRecord, Category, MediaRef, RecordId};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Which built-in catalog to display when no manifest is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Six mathematics clips without formulas.
    Classic,
    /// AI concepts plus mathematics and physics, with formulas and explanations.
    #[default]
    AiInMotion,
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "ai" | "ai-in-motion" => Ok(Variant::AiInMotion),
            other => Err(Error::Config(format!("unknown catalog variant: {other}"))),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Classic => f.write_str("classic"),
            Variant::AiInMotion => f.write_str("ai-in-motion"),
        }
    }
}

/// A gallery section: every record sharing one category, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub category: &'a Category,
    pub records: Vec<&'a AnimationRecord>,
}

/// Immutable ordered list of animation records with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<AnimationRecord>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(records: Vec<AnimationRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(Error::Catalog(format!("duplicate record id {}", record.id)));
            }
        }
        Ok(Self { records })
    }

    /// The original six-clip showcase (ids 1..=6).
    #[must_use]
    pub fn classic() -> Self {
        Self {
            records: builtin::classic_records(),
        }
    }

    /// The "AI in Motion" catalog with formulas and explanations.
    #[must_use]
    pub fn ai_in_motion() -> Self {
        Self {
            records: builtin::ai_in_motion_records(),
        }
    }

    #[must_use]
    pub fn builtin(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::AiInMotion => Self::ai_in_motion(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[AnimationRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&AnimationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Lazily yields the records matching `predicate`, in catalog order.
    pub fn filter<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a AnimationRecord>
    where
        P: FnMut(&AnimationRecord) -> bool + 'a,
    {
        self.records.iter().filter(move |record| predicate(record))
    }

    /// Records whose category label equals `category`, in catalog order.
    pub fn by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a AnimationRecord> {
        self.filter(move |record| record.category.as_str() == category)
    }

    /// Splits the catalog into matching and non-matching records.
    ///
    /// Both halves keep catalog order; together they contain every record
    /// exactly once.
    pub fn partition<P>(&self, mut predicate: P) -> (Vec<&AnimationRecord>, Vec<&AnimationRecord>)
    where
        P: FnMut(&AnimationRecord) -> bool,
    {
        self.records.iter().partition(|record| predicate(record))
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = Vec::new();
        for record in &self.records {
            if !categories.contains(&&record.category) {
                categories.push(&record.category);
            }
        }
        categories
    }

    /// Groups the catalog into one section per distinct category.
    #[must_use]
    pub fn sections(&self) -> Vec<Section<'_>> {
        self.categories()
            .into_iter()
            .map(|category| Section {
                category,
                records: self
                    .filter(move |record| record.category == *category)
                    .collect(),
            })
            .collect()
    }
}
