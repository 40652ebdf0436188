use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::{CedarError, Result};

/// Ordered ids of entries that have already been announced for one section.
/// Append-only: ids are never removed, the record only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeenIds(Vec<String>);

impl SeenIds {
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|seen| seen == id)
    }

    /// Append an id. Does not guard against duplicates; callers check
    /// `contains` first.
    pub fn append(&mut self, id: impl Into<String>) {
        self.0.push(id.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

/// Per-section announcement cache, one JSON array of ids per section file.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn section_path(&self, section: &str) -> PathBuf {
        self.dir.join(format!("{section}.json"))
    }

    /// Load the cache for `section`. A missing or empty file is an empty
    /// record; malformed content or any other filesystem error is a store
    /// error.
    pub fn load(&self, section: &str) -> Result<SeenIds> {
        let path = self.section_path(section);

        let text = match fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SeenIds::default()),
            Err(e) => {
                return Err(CedarError::Store(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        if text.trim().is_empty() {
            return Ok(SeenIds::default());
        }

        serde_json::from_str(&text).map_err(|e| {
            CedarError::Store(format!("Malformed cache file {}: {e}", path.display()))
        })
    }

    /// Persist the full record for `section`, replacing the previous file.
    /// Writes to a temporary sibling first and renames it into place so an
    /// interrupted write cannot truncate the cache.
    pub fn persist(&self, record: &SeenIds, section: &str) -> Result<()> {
        self.ensure_dir()?;

        let path = self.section_path(section);
        let tmp = self.dir.join(format!("{section}.json.tmp"));

        let json = serde_json::to_string(record)
            .map_err(|e| CedarError::Store(format!("Failed to serialize cache: {e}")))?;

        write_owner_only(&tmp, json.as_bytes()).map_err(|e| {
            CedarError::Store(format!("Failed to write {}: {e}", tmp.display()))
        })?;

        fs::rename(&tmp, &path).map_err(|e| {
            CedarError::Store(format!("Failed to replace {}: {e}", path.display()))
        })
    }

    fn ensure_dir(&self) -> Result<()> {
        create_dir_owner_only(&self.dir).map_err(|e| {
            CedarError::Store(format!(
                "Failed to create cache directory {}: {e}",
                self.dir.display()
            ))
        })
    }
}

#[cfg(unix)]
fn create_dir_owner_only(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_dir_owner_only(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn write_owner_only(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(bytes)
}

#[cfg(not(unix))]
fn write_owner_only(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    fs::write(path, bytes)
}
