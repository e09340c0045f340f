//! Output destinations for rendered submissions.
//!
//! A destination receives the complete submission text in a single call and
//! replaces whatever it held before, so writing the same submission twice
//! yields identical content.
//!
//! # Example
//!
//! ```rust,ignore
//! use submitfmt::io::destinations::{FileDestination, MemoryDestination};
//!
//! let file_dest = FileDestination::new("data/subm_full.csv".into());
//! file_dest.write_str("id,label\n")?;
//!
//! let mem_dest = MemoryDestination::new();
//! mem_dest.write_str("id,label\n")?;
//! assert_eq!(mem_dest.get_content(), "id,label\n");
//! ```

use crate::errors::{Result, SubmissionError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tempfile::{Builder, NamedTempFile};

/// Trait for targets that receive a rendered submission.
pub trait OutputDestination: Send + Sync {
    /// Replace the destination's content with `content`.
    fn write_str(&self, content: &str) -> Result<()>;

    /// Get a description of the destination for log and error messages.
    fn description(&self) -> String;
}

/// File system output destination.
///
/// Content goes to a temporary file next to the target and is renamed over
/// it only after the write succeeded, so a failed write never leaves a
/// truncated submission behind. The replaced file keeps the target's
/// permissions; a new file gets the umask-derived mode of a plain create.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
    create_dir: bool,
}

impl FileDestination {
    /// Create a new file destination. The parent directory must exist.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            create_dir: false,
        }
    }

    /// Create missing parent directories before writing.
    pub fn with_create_dir(mut self, create_dir: bool) -> Self {
        self.create_dir = create_dir;
        self
    }

    /// Get the path this destination writes to.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    fn create_temp(&self, dir: &Path) -> std::io::Result<NamedTempFile> {
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // open(2) applies the umask to this mode
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let temp = builder.tempfile_in(dir)?;

        match fs::metadata(&self.path) {
            Ok(existing) => temp.as_file().set_permissions(existing.permissions())?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        Ok(temp)
    }
}

impl OutputDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        let dir = self.parent_dir();

        if self.create_dir {
            fs::create_dir_all(dir).map_err(|e| {
                SubmissionError::io_with_path("Failed to create output directory", dir, e)
            })?;
        }

        let mut temp = self.create_temp(dir).map_err(|e| {
            SubmissionError::io_with_path("Failed to create file in output directory", dir, e)
        })?;
        temp.write_all(content.as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| {
                SubmissionError::io_with_path("Failed to write submission", &self.path, e)
            })?;
        temp.persist(&self.path).map_err(|e| {
            SubmissionError::io_with_path("Failed to replace submission file", &self.path, e.error)
        })?;

        log::debug!("Wrote {} bytes to {}", content.len(), self.path.display());
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory output destination for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<String>>,
}

impl MemoryDestination {
    /// Create a new in-memory destination with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content of the buffer.
    pub fn get_content(&self) -> String {
        self.buffer.read().expect("RwLock poisoned").clone()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.read().expect("RwLock poisoned").is_empty()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        let mut buffer = self.buffer.write().expect("RwLock poisoned");
        buffer.clear();
        buffer.push_str(content);
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}
