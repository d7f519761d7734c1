use relative_path::{Component, RelativePath};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key holding the last encoded card
pub const CONFIG_KEY: &str = "config";
/// Key holding the Home Assistant host address
pub const HOST_KEY: &str = "homeAssistantHost";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Invalid store key: {0}")]
    InvalidKey(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// String key-value storage for editor state that outlives a session
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, IoError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), IoError>;
}

/// In-process store, nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, IoError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), IoError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store keeping one file per key inside a state directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, IoError> {
        let relative = RelativePath::new(key);
        let mut components = relative.components();
        // Keys name a single file directly under the root
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !key.contains('\\') => {
                Ok(relative.to_path(&self.root))
            }
            _ => Err(IoError::InvalidKey(key.to_string())),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, IoError> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path).map(Some).map_err(IoError::Io)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), IoError> {
        let path = self.key_path(key)?;

        // Create the state directory on first write
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(IoError::Io)?;
        }

        fs::write(&path, value).map_err(IoError::Io)
    }
}
