//! Versioned on-disk flag store.
//!
//! DESIGN
//! ======
//! Replaces ad hoc local-storage booleans with an explicit persisted
//! record: one JSON file holding `{ version, flags }`. Version-less
//! legacy files (a bare string→string map, the shape of a raw
//! localStorage dump) are migrated on open; files written by a newer
//! library version are a typed error, never silently reinterpreted.
//!
//! ERROR HANDLING
//! ==============
//! Writes go to a temp file in the same directory and are renamed into
//! place, so a crash mid-write leaves the previous file intact.
//! Durability over convenience: setters persist immediately.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Version written by this library.
pub const CURRENT_VERSION: u32 = 1;

/// A stored flag: the corpus only ever kept booleans and short strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Text(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct FlagFile {
    version: u32,
    flags: HashMap<String, FlagValue>,
}

/// Errors from flag store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store file is corrupt: {0}")]
    Corrupt(String),
    #[error("store version {found} is newer than supported version {supported}")]
    VersionTooNew { found: u32, supported: u32 },
}

/// Persisted boolean/string flags keyed by name.
#[derive(Debug)]
pub struct FlagStore {
    path: PathBuf,
    flags: HashMap<String, FlagValue>,
}

impl FlagStore {
    /// Open (or create) the store at `path`. A missing file yields an
    /// empty store; a legacy version-less file is migrated in place.
    ///
    /// # Errors
    ///
    /// `Corrupt` when the file is neither a current nor a legacy shape,
    /// `VersionTooNew` when written by a newer library.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let flags = match std::fs::read_to_string(&path) {
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
            Ok(raw) => parse_or_migrate(&raw)?,
        };
        Ok(Self { path, flags })
    }

    /// The boolean flag under `key`, if present and boolean-typed.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.flags.get(key) {
            Some(FlagValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// The text flag under `key`, if present and text-typed.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.flags.get(key) {
            Some(FlagValue::Text(v)) => Some(v),
            _ => None,
        }
    }

    /// Set a boolean flag and persist.
    ///
    /// # Errors
    ///
    /// `Io` when the write or rename fails.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) -> Result<(), StoreError> {
        self.flags.insert(key.into(), FlagValue::Bool(value));
        self.persist()
    }

    /// Set a text flag and persist.
    ///
    /// # Errors
    ///
    /// `Io` when the write or rename fails.
    pub fn set_text(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.flags.insert(key.into(), FlagValue::Text(value.into()));
        self.persist()
    }

    /// Remove one flag and persist. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// `Io` when the write or rename fails.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.flags.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    /// Explicit clear semantics: drop every flag and persist the empty
    /// (still versioned) record.
    ///
    /// # Errors
    ///
    /// `Io` when the write or rename fails.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.flags.clear();
        self.persist()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let file = FlagFile { version: CURRENT_VERSION, flags: self.flags.clone() };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let mut tmp = self.path.clone();
        tmp.set_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn parse_or_migrate(raw: &str) -> Result<HashMap<String, FlagValue>, StoreError> {
    if let Ok(file) = serde_json::from_str::<FlagFile>(raw) {
        if file.version > CURRENT_VERSION {
            return Err(StoreError::VersionTooNew {
                found: file.version,
                supported: CURRENT_VERSION,
            });
        }
        return Ok(file.flags);
    }

    // Legacy shape: a bare string→string map. "true"/"false" become real
    // booleans, everything else stays text.
    match serde_json::from_str::<HashMap<String, String>>(raw) {
        Ok(legacy) => {
            tracing::info!(entries = legacy.len(), "migrating legacy flag file");
            Ok(legacy
                .into_iter()
                .map(|(key, value)| (key, migrate_value(value)))
                .collect())
        }
        Err(e) => Err(StoreError::Corrupt(e.to_string())),
    }
}

fn migrate_value(value: String) -> FlagValue {
    match value.as_str() {
        "true" => FlagValue::Bool(true),
        "false" => FlagValue::Bool(false),
        _ => FlagValue::Text(value),
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
