// SPDX-License-Identifier: MPL-2.0
//! Animation record and its newtypes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Catalog-unique identifier of an animation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u32);

impl RecordId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display label used for grouping records into gallery sections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether records of this category get the AI card treatment.
    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.0 == super::AI_CATEGORY
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a clip on disk.
///
/// Relative references are resolved against the configured media directory;
/// absolute ones are used as-is. Existence is never checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(PathBuf);

impl MediaRef {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Returns the playable path for this reference under `media_dir`.
    #[must_use]
    pub fn resolve(&self, media_dir: &Path) -> PathBuf {
        if self.0.is_absolute() {
            self.0.clone()
        } else {
            media_dir.join(&self.0)
        }
    }
}

/// One animation clip with its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationRecord {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(alias = "video")]
    pub media: MediaRef,
    /// Math markup handed to the formula renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Key concept label shown in the detail view.
    #[serde(default, alias = "math_concept", skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
}

impl AnimationRecord {
    #[must_use]
    pub fn new(
        id: u32,
        title: &str,
        description: &str,
        category: &str,
        media: &str,
    ) -> Self {
        Self {
            id: RecordId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            category: Category::new(category),
            media: MediaRef::new(media),
            formula: None,
            explanation: None,
            concept: None,
        }
    }

    #[must_use]
    pub fn with_formula(mut self, formula: &str) -> Self {
        self.formula = Some(formula.to_string());
        self
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: &str) -> Self {
        self.explanation = Some(explanation.to_string());
        self
    }

    #[must_use]
    pub fn with_concept(mut self, concept: &str) -> Self {
        self.concept = Some(concept.to_string());
        self
    }
}
