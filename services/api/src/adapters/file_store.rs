//! services/api/src/adapters/file_store.rs
//!
//! A `SessionStore` that keeps each key in its own JSON file under a directory,
//! standing in for the browser's local storage.

use astrology_core::ports::{PortError, PortResult, SessionStore};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

#[derive(Clone, Debug)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Creates a new `FileSessionStore` rooted at `dir`. The directory is
    /// created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PortResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PortError::Unexpected(format!("invalid session key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

fn io_error(action: &str, e: std::io::Error) -> PortError {
    PortError::Unexpected(format!("Failed to {} session file: {}", action, e))
}

//=========================================================================================
// SessionStore Implementation
//=========================================================================================

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> PortResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)?).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            // Non-UTF-8 bytes are handed back as garbage so the caller discards them.
            Err(e) if e.kind() == ErrorKind::InvalidData => Ok(Some(String::new())),
            Err(e) => Err(io_error("read", e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> PortResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error("create directory for", e))?;

        // Write to a sibling file first so a crash never leaves a half-written session.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .await
            .map_err(|e| io_error("write", e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_error("replace", e))
    }

    async fn remove(&self, key: &str) -> PortResult<()> {
        match fs::remove_file(self.path_for(key)?).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("remove", e)),
        }
    }
}
