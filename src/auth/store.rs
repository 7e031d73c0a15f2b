//! Session storage backends.
//!
//! The client core only sees the `SessionStore` capability, so tests can
//! inject an in-memory store instead of touching the real session file.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::warn;

/// Session file name in the config directory
const SESSION_FILE: &str = "session.json";

/// Durable string-keyed storage for the session slots.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Write-through store over a plain JSON file.
///
/// The file is read once at construction; reads are served from memory,
/// writes rewrite the whole file.
pub struct FileSessionStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    pub fn new(dir: PathBuf) -> Self {
        let path = dir.join(SESSION_FILE);
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(e) => {
                    warn!(error = %e, "Session file is not valid JSON, starting fresh");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn persist(&self, values: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create session directory")?;
        }
        let contents = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, contents).context("Failed to write session file")?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_string(), value.to_string());
        self.persist(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap();
        values.remove(key);
        self.persist(&values)
    }

    fn clear(&self) -> Result<()> {
        let mut values = self.values.lock().unwrap();
        values.clear();
        if self.path.exists() {
            std::fs::remove_file(&self.path).context("Failed to remove session file")?;
        }
        Ok(())
    }
}

/// In-memory store. Backs the test suite; nothing survives the process.
#[derive(Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.values.lock().unwrap().clear();
        Ok(())
    }
}
