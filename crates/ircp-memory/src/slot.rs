//! Single-value key slot for the last shown suggestion hash.
//!
//! The suggestion engine itself stays pure; whoever drives a session loads
//! the previous hash from a slot and writes the new one back.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

pub trait HashSlot: Send + Sync {
    /// Last stored value. Missing or blank slots read as `None`.
    fn load(&self) -> Option<String>;

    /// Overwrite the slot. Failures are logged, never surfaced.
    fn store(&self, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryHashSlot {
    value: Mutex<Option<String>>,
}

impl MemoryHashSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }
}

impl HashSlot for MemoryHashSlot {
    fn load(&self) -> Option<String> {
        let guard = self.value.lock().ok()?;
        guard.clone().filter(|v| !v.is_empty())
    }

    fn store(&self, value: &str) {
        if let Ok(mut guard) = self.value.lock() {
            *guard = Some(value.to_string());
        }
    }
}

/// Slot persisted as a one-line file, e.g. `data/last-try-one-hash`.
#[derive(Debug, Clone)]
pub struct FileHashSlot {
    path: PathBuf,
}

impl FileHashSlot {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let value = content.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err)
                .with_context(|| format!("failed to read hash slot: {}", self.path.display())),
        }
    }

    fn write(&self, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create hash slot dir: {}", parent.display())
            })?;
        }
        fs::write(&self.path, format!("{value}\n"))
            .with_context(|| format!("failed to write hash slot: {}", self.path.display()))
    }
}

impl HashSlot for FileHashSlot {
    fn load(&self) -> Option<String> {
        match self.read() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("{err:#}");
                None
            }
        }
    }

    fn store(&self, value: &str) {
        if let Err(err) = self.write(value) {
            tracing::warn!("{err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slot_starts_empty_and_overwrites() {
        let slot = MemoryHashSlot::new();
        assert_eq!(slot.load(), None);
        slot.store("a|b|c");
        assert_eq!(slot.load().as_deref(), Some("a|b|c"));
        slot.store("d|e|f");
        assert_eq!(slot.load().as_deref(), Some("d|e|f"));
    }

    #[test]
    fn memory_slot_blank_reads_as_none() {
        let slot = MemoryHashSlot::with_value("");
        assert_eq!(slot.load(), None);
    }

    #[test]
    fn file_slot_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileHashSlot::new(dir.path().join("nope"));
        assert_eq!(slot.load(), None);
    }

    #[test]
    fn file_slot_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/last-try-one-hash");

        FileHashSlot::new(&path).store("x|y|z");
        let reopened = FileHashSlot::new(&path);
        assert_eq!(reopened.load().as_deref(), Some("x|y|z"));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn file_slot_unwritable_path_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file").unwrap();
        let slot = FileHashSlot::new(blocker.join("child"));
        slot.store("a|b|c");
        assert_eq!(slot.load(), None);
    }
}
