//! Key-value backing for the template store
//!
//! A catalog is a single JSON document holding three tables: template bodies
//! by id, language names by id and extensions by id. It is what
//! `boil-prepare` produces from a plates directory, and it loads into exactly
//! the same [`TemplateStore`](super::TemplateStore) as the directory does.

use crate::BoilError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub templates: BTreeMap<usize, String>,
    pub names: BTreeMap<String, usize>,
    pub extensions: BTreeMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a catalog file; unreadable or malformed files are load errors
    pub fn read(path: &Path) -> crate::Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BoilError::Load(format!("cannot read catalog {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            BoilError::Load(format!("malformed catalog {}: {}", path.display(), e))
        })
    }

    pub fn write(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check table references and case-insensitive key uniqueness
    pub fn validate(&self) -> crate::Result<()> {
        check_table("name", &self.names, &self.templates, super::fold_name)?;
        check_table("extension", &self.extensions, &self.templates, super::normalize_extension)?;
        Ok(())
    }
}

fn check_table(
    kind: &str,
    table: &BTreeMap<String, usize>,
    templates: &BTreeMap<usize, String>,
    normalize: fn(&str) -> String,
) -> crate::Result<()> {
    let mut seen = BTreeMap::new();

    for (key, id) in table {
        if !templates.contains_key(id) {
            return Err(BoilError::Load(format!(
                "{} '{}' refers to missing template {}",
                kind, key, id
            )));
        }
        let folded = normalize(key);
        if folded.is_empty() {
            return Err(BoilError::Load(format!("empty {} in catalog", kind)));
        }
        if let Some(previous) = seen.insert(folded, key) {
            return Err(BoilError::Load(format!(
                "duplicate {} in catalog: '{}' and '{}'",
                kind, previous, key
            )));
        }
    }

    Ok(())
}
