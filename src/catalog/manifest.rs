// SPDX-License-Identifier: MPL-2.0
//! TOML manifest loading for custom catalogs.
//!
//! A manifest lists records as `[[animation]]` tables:
//!
//! ```toml
//! [[animation]]
//! id = 1
//! title = "Fractal Tree"
//! description = "Recursive branching structure"
//! category = "Fractals"
//! media = "FractalTree.mp4"
//! formula = '\text{Branch}(n) = 2 \cdot \text{Branch}(n-1)'
//! ```
//!
//! Validation happens here, once, so the running catalog never has to.

use super::{AnimationRecord, Catalog};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "animation", default)]
    animations: Vec<AnimationRecord>,
}

/// Parses and validates a manifest.
pub fn from_manifest_str(content: &str) -> Result<Catalog> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::Catalog(format!("invalid manifest: {e}")))?;

    if manifest.animations.is_empty() {
        return Err(Error::Catalog("manifest contains no animations".to_string()));
    }

    for record in &manifest.animations {
        if record.title.trim().is_empty() {
            return Err(Error::Catalog(format!("record {} has an empty title", record.id)));
        }
        if record.category.as_str().trim().is_empty() {
            return Err(Error::Catalog(format!(
                "record {} has an empty category",
                record.id
            )));
        }
        if record.media.as_path().as_os_str().is_empty() {
            return Err(Error::Catalog(format!(
                "record {} has no media reference",
                record.id
            )));
        }
    }

    Catalog::new(manifest.animations)
}

/// Reads a manifest file from disk.
pub fn load_manifest(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    from_manifest_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TWO_RECORDS: &str = r#"
[[animation]]
id = 7
title = "Lorenz"
description = "Chaos"
category = "Chaos Theory"
media = "Lorenz.mp4"
math_concept = "Differential Equations"

[[animation]]
id = 8
title = "Sort"
description = "Bubble sort"
category = "Computer Science"
video = "Sort.mp4"
formula = 'T(n) = O(n^2)'
"#;

    #[test]
    fn parses_records_in_order() {
        let catalog = from_manifest_str(TWO_RECORDS).expect("manifest is valid");
        let ids: Vec<u32> = catalog.records().iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![7, 8]);
        assert_eq!(
            catalog.records()[0].concept.as_deref(),
            Some("Differential Equations")
        );
        assert_eq!(catalog.records()[1].formula.as_deref(), Some("T(n) = O(n^2)"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let content = TWO_RECORDS.replace("id = 8", "id = 7");
        assert!(matches!(from_manifest_str(&content), Err(Error::Catalog(_))));
    }

    #[test]
    fn rejects_empty_title() {
        let content = TWO_RECORDS.replace("title = \"Sort\"", "title = \"  \"");
        let err = from_manifest_str(&content).expect_err("empty title must fail");
        assert!(err.to_string().contains("empty title"));
    }

    #[test]
    fn rejects_empty_manifest() {
        assert!(matches!(from_manifest_str(""), Err(Error::Catalog(_))));
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(matches!(
            from_manifest_str("[[animation]\nid ="),
            Err(Error::Catalog(_))
        ));
    }

    #[test]
    fn load_manifest_reads_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("catalog.toml");
        fs::write(&path, TWO_RECORDS).expect("failed to write manifest");

        let catalog = load_manifest(&path).expect("manifest loads");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_manifest_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = load_manifest(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
