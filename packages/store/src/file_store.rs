//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in its
//! own file below a base directory. It is used on desktop and mobile platforms
//! so the session token survives app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>          # raw UTF-8 value
//! ```
//!
//! ## Platform data directories
//!
//! [`FileStore::default_location`] resolves a base below [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/mindcheck/` |
//! | Linux | `~/.local/share/mindcheck/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\mindcheck\` |
//! | Android | App-internal storage (via `dirs`) |

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::token::KeyValueStore;

/// Directory name used below the platform data directory.
pub const APP_DIR: &str = "mindcheck";

/// Filesystem-backed key-value store for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted at `<data_dir>/mindcheck`, or `./mindcheck` when the
    /// platform has no data directory.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

fn io_error(key: &str, source: std::io::Error) -> StoreError {
    StoreError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base).map_err(|e| io_error(key, e))?;
        std::fs::write(self.key_path(key), value).map_err(|e| io_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}
