// SPDX-License-Identifier: MIT
//
// Saved presets, kept as one pretty-printed JSON array on disk.
//
// The whole file is read on load and rewritten on save. A missing file is
// an empty store; the file and its parent directory are created on first
// save.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use huekit_palette::Preset;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access preset store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("preset store {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no saved preset matches {0:?}")]
    NotFound(String),
}

/// A file-backed list of presets, newest last.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every saved preset. A missing file yields an empty list.
    pub fn load(&self) -> Result<Vec<Preset>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "preset store not found; starting empty");
                return Ok(Vec::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the file's contents with `presets`.
    pub fn save(&self, presets: &[Preset]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let json = serde_json::to_string_pretty(presets).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;
        debug!(path = %self.path.display(), count = presets.len(), "saved preset store");
        Ok(())
    }

    /// Append `preset` and persist.
    pub fn add(&self, preset: Preset) -> Result<(), StoreError> {
        let mut presets = self.load()?;
        info!(id = %preset.id, name = %preset.name, "saving preset");
        presets.push(preset);
        self.save(&presets)
    }

    /// Find a saved preset by id or, failing that, by name (most recent wins).
    pub fn find(&self, key: &str) -> Result<Preset, StoreError> {
        let presets = self.load()?;
        let by_id = Uuid::parse_str(key.trim())
            .ok()
            .and_then(|id| presets.iter().find(|p| p.id == id));
        by_id
            .or_else(|| presets.iter().rev().find(|p| p.name == key))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_owned()))
    }

    /// Remove the preset with `id` and persist, returning it.
    pub fn remove(&self, id: Uuid) -> Result<Preset, StoreError> {
        let mut presets = self.load()?;
        let index = presets
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let removed = presets.remove(index);
        self.save(&presets)?;
        info!(id = %removed.id, name = %removed.name, "deleted preset");
        Ok(removed)
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
