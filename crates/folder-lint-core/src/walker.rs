//! Depth-first directory traversal.
//!
//! The walker yields every entry it lists and lets the caller decide, per
//! directory, whether to enter it. Entries within a directory are visited in
//! file-name order. Symbolic links are never followed; they surface as
//! non-directory entries.
//!
//! Sorting happens inside walkdir, which reads the full listing of every
//! directory it yields before the visitor sees it. A directory the visitor
//! then skips (`node_modules`, say) still costs one `readdir` of its top
//! level, but nothing below it is read.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;
use walkdir::WalkDir;

use crate::utils::paths::{normalize, relative_to};

/// Errors that abort a walk.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A directory could not be listed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: walkdir::Error,
    },
}

/// One listed directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File name of the entry.
    pub name: String,
    /// Whether the entry is a directory (symlinks are not).
    pub is_dir: bool,
    /// `/`-separated path relative to the walker's base directory.
    pub relative_path: String,
}

/// What to do after visiting an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    /// Enter the directory (no effect on files).
    Descend,
    /// List the directory but do not enter it.
    Skip,
}

/// Walks a tree rooted at `root`, naming entries relative to `base`.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    base: PathBuf,
}

impl Walker {
    /// Creates a walker. A relative `root` is resolved against `base`.
    #[must_use]
    pub fn new(root: impl AsRef<Path>, base: impl AsRef<Path>) -> Self {
        let base = normalize(base.as_ref());
        let root = normalize(&base.join(root.as_ref()));
        Self { root, base }
    }

    /// Returns the resolved scan root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the base directory relative paths are computed from.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Visits every entry below the root in depth-first pre-order.
    ///
    /// `visit` is called once per entry; returning [`WalkControl::Skip`] for
    /// a directory keeps the walk out of it.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory the walk enters cannot be read.
    pub fn walk<F>(&self, mut visit: F) -> Result<(), WalkError>
    where
        F: FnMut(&Entry) -> WalkControl,
    {
        let mut it = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(next) = it.next() {
            let dent = next.map_err(|e| WalkError::Io {
                path: e.path().map_or_else(|| self.root.clone(), Path::to_path_buf),
                source: e,
            })?;

            let entry = Entry {
                name: dent.file_name().to_string_lossy().into_owned(),
                is_dir: dent.file_type().is_dir(),
                relative_path: relative_to(dent.path(), &self.base),
            };
            trace!("visit {}", entry.relative_path);

            if visit(&entry) == WalkControl::Skip && entry.is_dir {
                it.skip_current_dir();
            }
        }

        Ok(())
    }
}
