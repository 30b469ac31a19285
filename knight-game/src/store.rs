//! Key-value preference storage and solution row storage, in memory or as
//! JSON files.
//!
//! File stores load eagerly on open and write through on every change. A
//! write goes to a sibling temp file first and is then renamed over the
//! target, so a crash never leaves a half-written state file.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::GameError;

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Integer preferences by key.
pub trait PreferenceStore {
    fn get_int(&self, key: &str) -> Option<i32>;
    fn put_int(&mut self, key: &str, value: i32) -> Result<(), GameError>;

    fn contains(&self, key: &str) -> bool {
        self.get_int(key).is_some()
    }
}

/// Encoded solution rows.
pub trait SolutionStore {
    fn rows(&self) -> Vec<String>;
    /// Append rows after any already stored.
    fn insert_rows(&mut self, rows: Vec<String>) -> Result<(), GameError>;
    fn delete_rows(&mut self) -> Result<(), GameError>;
}

// ---------------------------------------------------------------------------
// In-memory stores
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, i32>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_int(&self, key: &str) -> Option<i32> {
        self.values.get(key).copied()
    }

    fn put_int(&mut self, key: &str, value: i32) -> Result<(), GameError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySolutions {
    rows: Vec<String>,
}

impl MemorySolutions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolutionStore for MemorySolutions {
    fn rows(&self) -> Vec<String> {
        self.rows.clone()
    }

    fn insert_rows(&mut self, rows: Vec<String>) -> Result<(), GameError> {
        self.rows.extend(rows);
        Ok(())
    }

    fn delete_rows(&mut self) -> Result<(), GameError> {
        self.rows.clear();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JSON file stores
// ---------------------------------------------------------------------------

/// Preferences kept as a JSON object in a file.
#[derive(Debug)]
pub struct JsonPreferences {
    path: PathBuf,
    values: BTreeMap<String, i32>,
}

impl JsonPreferences {
    /// Open `path`, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, GameError> {
        let path = path.into();
        let values = read_json(&path)?;
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonPreferences {
    fn get_int(&self, key: &str) -> Option<i32> {
        self.values.get(key).copied()
    }

    fn put_int(&mut self, key: &str, value: i32) -> Result<(), GameError> {
        self.values.insert(key.to_string(), value);
        write_json(&self.path, &self.values)
    }
}

/// Solution rows kept as a JSON array of strings in a file.
#[derive(Debug)]
pub struct JsonSolutions {
    path: PathBuf,
    rows: Vec<String>,
}

impl JsonSolutions {
    /// Open `path`, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, GameError> {
        let path = path.into();
        let rows = read_json(&path)?;
        Ok(Self { path, rows })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SolutionStore for JsonSolutions {
    fn rows(&self) -> Vec<String> {
        self.rows.clone()
    }

    fn insert_rows(&mut self, rows: Vec<String>) -> Result<(), GameError> {
        self.rows.extend(rows);
        write_json(&self.path, &self.rows)
    }

    fn delete_rows(&mut self) -> Result<(), GameError> {
        self.rows.clear();
        write_json(&self.path, &self.rows)
    }
}

fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, GameError> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} not found, starting empty", path.display());
            return Ok(T::default());
        }
        Err(source) => {
            return Err(GameError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_slice(&data).map_err(|source| GameError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), GameError> {
    let io_err = |source: io::Error| GameError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let data = serde_json::to_vec_pretty(value).map_err(|source| GameError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, data).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    log::trace!("wrote {}", path.display());
    Ok(())
}
