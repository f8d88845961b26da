use crate::BoilError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lookup keys encoded in a plate file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateKeys {
    pub names: Vec<String>,
    pub extensions: Vec<String>,
}

/// Parse a plate file name of the form `name[,name2].ext1[.ext2...]`.
///
/// The name part ends at the first `.`; empty segments are dropped.
pub fn parse_plate_name(file_name: &str) -> crate::Result<PlateKeys> {
    let (names, extensions) = file_name.split_once('.').ok_or_else(|| {
        BoilError::Load(format!("plate file name has no extension: {}", file_name))
    })?;

    let keys = PlateKeys {
        names: split_keys(names, ','),
        extensions: split_keys(extensions, '.'),
    };

    if keys.names.is_empty() && keys.extensions.is_empty() {
        return Err(BoilError::Load(format!(
            "plate file name has no language or extension: {}",
            file_name
        )));
    }

    Ok(keys)
}

fn split_keys(part: &str, separator: char) -> Vec<String> {
    part.split(separator)
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug)]
pub struct PlateDiscovery;

impl PlateDiscovery {
    pub fn new() -> Self {
        Self
    }

    /// Find all plate files directly inside a directory, sorted by file name
    pub fn find_plate_files(&self, root_path: &Path) -> crate::Result<Vec<PathBuf>> {
        let mut plate_files = Vec::new();

        for entry in WalkDir::new(root_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                BoilError::Load(format!("cannot scan {}: {}", root_path.display(), e))
            })?;
            if self.is_plate_file(entry.path()) {
                plate_files.push(entry.into_path());
            }
        }

        Ok(plate_files)
    }

    /// Regular, non-hidden files are plates
    pub fn is_plate_file(&self, path: &Path) -> bool {
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with('.'))
            .unwrap_or(true);

        path.is_file() && !hidden
    }
}

impl Default for PlateDiscovery {
    fn default() -> Self {
        Self::new()
    }
}
