//! In-memory document text plus atomic persistence.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The full contents of the target file, owned exclusively for the run.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    /// Read the whole file into memory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|source| DocumentError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, text })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Persist the document, fully overwriting the file.
    ///
    /// Writes go through a tempfile in the target's directory followed by
    /// fsync and rename, so the file on disk is always either the old or the
    /// new content. The mtime is bumped afterwards so file watchers and
    /// incremental dev servers notice the change.
    pub fn save(&self) -> Result<(), DocumentError> {
        atomic_write(&self.path, self.text.as_bytes()).map_err(|source| DocumentError::Write {
            path: self.path.clone(),
            source,
        })?;

        let now = filetime::FileTime::now();
        filetime::set_file_mtime(&self.path, now).map_err(|source| DocumentError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}

/// Atomic file write: tempfile + fsync + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = path.parent().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path has no parent directory",
        )
    })?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
