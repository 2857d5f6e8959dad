//! Properties File Repository
//!
//! Persists the endpoint file at `~/.kafka-avro-decorator.properties`.
//!
//! Saves take an advisory lock on a sibling `<file>.lock`. The lock file is
//! left in place after a save: removing it would let two writers lock
//! different inodes. `config path` reports it next to the endpoint file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::ports::{Properties, PropertiesRepository, StoreError};
use crate::infrastructure::fs::default_properties_path;
use crate::infrastructure::properties::{parse_properties, render_properties};

const FILE_COMMENT: &str = "Schema registry per cluster endpoints";

pub struct PropertiesFileRepository {
    path: PathBuf,
}

impl PropertiesFileRepository {
    pub fn new() -> Self {
        Self {
            path: default_properties_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Sibling file locked while saving.
    pub fn lock_path(&self) -> PathBuf {
        lock_path_for(&self.path)
    }

    fn access_error(&self, err: impl std::fmt::Display) -> StoreError {
        StoreError::AccessError {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }

    fn load_from_disk(&self) -> Result<Properties, StoreError> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| self.access_error(e))?;
            }
            fs::File::create(&self.path).map_err(|e| self.access_error(e))?;
            tracing::info!(path = %self.path.display(), "created empty endpoint file");
            return Ok(Properties::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.access_error(e))?;
        parse_properties(&content).map_err(|e| StoreError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Write to a sibling temp file, then rename over the target.
    fn save_to_disk(&self, properties: &Properties) -> Result<(), StoreError> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| self.access_error(e))?;

        let timestamp = chrono::Local::now()
            .format("%a %b %d %H:%M:%S %z %Y")
            .to_string();
        let content = render_properties(properties, &[FILE_COMMENT, &timestamp]);

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| self.access_error(e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| self.access_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.access_error(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.access_error(e.error))?;
        Ok(())
    }
}

/// `<file>.lock` next to `path`.
pub fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}

impl Default for PropertiesFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertiesRepository for PropertiesFileRepository {
    fn load(&self) -> Result<Properties, StoreError> {
        self.load_from_disk()
    }

    fn save(&self, properties: &Properties) -> Result<(), StoreError> {
        let lock_path = self.lock_path();
        let lock_file = fs::File::create(&lock_path).map_err(|e| self.access_error(e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| self.access_error(e))?;

        let result = self.save_to_disk(properties);

        let _ = lock_file.unlock();
        result
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
