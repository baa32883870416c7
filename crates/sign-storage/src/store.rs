//! Sign store: lists, creates, reads, and rewrites sign records.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use sign_core::constants::{FEATURE_DELIMITER, RECORD_EXTENSION, RECORD_FILE_SUFFIX, RESERVED_NAME_CHARS};
use sign_core::errors::StorageError;
use sign_core::{FeatureSetState, SignConfig};

use crate::codec;

/// Directory of sign records, one `<name>.txt` file per sign.
#[derive(Debug, Clone)]
pub struct SignStore {
    root: PathBuf,
}

impl SignStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &SignConfig) -> Self {
        Self::new(config.storage.effective_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the record for `name`, after validating the name.
    pub fn record_path(&self, name: &str) -> Result<PathBuf, StorageError> {
        validate_name(name)?;
        Ok(self.root.join(format!("{name}.{RECORD_EXTENSION}")))
    }

    pub fn exists(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.record_path(name)?.is_file())
    }

    /// Every stored sign name, sorted.
    ///
    /// A missing storage directory is an empty store, not an error.
    pub fn list_signs(&self) -> Result<Vec<String>, StorageError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(&self.root, &e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::io(&self.root, &e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!(path = %path.display(), "skipping non UTF-8 file name");
                continue;
            };
            match file_name.strip_suffix(RECORD_FILE_SUFFIX) {
                Some(name) if validate_name(name).is_ok() => names.push(name.to_string()),
                _ => tracing::debug!(path = %path.display(), "skipping non-record file"),
            }
        }
        names.sort();
        Ok(names)
    }

    /// Creates an empty record for `name`. Re-creating an existing sign is a
    /// no-op that leaves its features untouched.
    pub fn create_sign(&self, name: &str) -> Result<(), StorageError> {
        let path = self.record_path(name)?;
        fs::create_dir_all(&self.root).map_err(|e| StorageError::io(&self.root, &e))?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| StorageError::io(&path, &e))?;
        tracing::info!(sign = %name, path = %path.display(), "sign saved");
        Ok(())
    }

    /// The record's content, byte for byte.
    pub fn read_raw(&self, name: &str) -> Result<String, StorageError> {
        let path = self.record_path(name)?;
        let raw = fs::read_to_string(&path).map_err(|e| absent_or_io(name, &path, &e))?;
        tracing::debug!(sign = %name, bytes = raw.len(), "record read");
        Ok(raw)
    }

    /// Decoded feature list of `name`, in stored order.
    pub fn read_sign(&self, name: &str) -> Result<Vec<String>, StorageError> {
        Ok(codec::decode(&self.read_raw(name)?))
    }

    pub fn feature_state(&self, name: &str) -> Result<FeatureSetState, StorageError> {
        Ok(FeatureSetState::from_count(self.read_sign(name)?.len()))
    }

    /// Replaces the whole record of an existing sign with `features`.
    pub fn write_features<S: AsRef<str>>(
        &self,
        name: &str,
        features: &[S],
    ) -> Result<(), StorageError> {
        let path = self.record_path(name)?;
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| absent_or_io(name, &path, &e))?;
        file.write_all(codec::encode(features).as_bytes())
            .map_err(|e| StorageError::io(&path, &e))?;
        tracing::info!(sign = %name, features = features.len(), "record rewritten");
        Ok(())
    }

    /// Appends already-encoded content to an existing record.
    ///
    /// A record whose last feature lacks its `;` is terminated first so the
    /// new content never fuses with it.
    pub(crate) fn append_raw(&self, name: &str, content: &str) -> Result<(), StorageError> {
        let path = self.record_path(name)?;
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&path)
            .map_err(|e| absent_or_io(name, &path, &e))?;
        if content.is_empty() {
            return Ok(());
        }

        let io_err = |e: std::io::Error| StorageError::io(&path, &e);
        let len = file.metadata().map_err(io_err)?.len();
        let mut buf = String::with_capacity(content.len() + 1);
        if len > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1)).map_err(io_err)?;
            file.read_exact(&mut last).map_err(io_err)?;
            if last[0] != FEATURE_DELIMITER as u8 {
                tracing::warn!(sign = %name, "terminating unterminated record before append");
                buf.push(FEATURE_DELIMITER);
            }
        }
        buf.push_str(content);
        // Append mode writes at the end regardless of the read position.
        file.write_all(buf.as_bytes()).map_err(io_err)?;
        Ok(())
    }
}

/// Checks that `name` can be used as a record file stem.
pub fn validate_name(name: &str) -> Result<(), StorageError> {
    let reason = if name.is_empty() {
        Some("name must not be empty".to_string())
    } else if name == "." || name == ".." {
        Some("name must not be a relative path component".to_string())
    } else {
        name.chars()
            .find(|c| RESERVED_NAME_CHARS.contains(c))
            .map(|c| format!("name must not contain {c:?}"))
    };
    match reason {
        Some(reason) => Err(StorageError::InvalidName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

fn absent_or_io(name: &str, path: &Path, err: &std::io::Error) -> StorageError {
    if err.kind() == ErrorKind::NotFound {
        StorageError::NotFound {
            name: name.to_string(),
        }
    } else {
        StorageError::io(path, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_with_path_characters_are_rejected() {
        for bad in ["", ".", "..", "a/b", "a\\b", "a;b", "nul\0"] {
            assert!(
                matches!(validate_name(bad), Err(StorageError::InvalidName { .. })),
                "{bad:?} should be rejected"
            );
        }
        for good in ["cat", "big cat", "cat.v2", "Käfer"] {
            assert!(validate_name(good).is_ok(), "{good:?} should be accepted");
        }
    }

    #[test]
    fn record_path_appends_extension() {
        let store = SignStore::new("sc_files");
        assert_eq!(
            store.record_path("cat").unwrap(),
            PathBuf::from("sc_files").join("cat.txt")
        );
    }
}
