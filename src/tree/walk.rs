use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::EntryInfo;
use crate::error::{Error, Result};

/// Abstraction over the filesystem so the renderer can be driven by fakes.
pub trait DirLister {
    /// Inspect the entry at `path` itself.
    fn stat(&self, path: &Path) -> Result<EntryInfo>;

    /// List the immediate entries of the directory at `path`, in no
    /// particular order.
    fn list(&self, path: &Path) -> Result<Vec<EntryInfo>>;
}

/// Default `DirLister` backed by `std::fs` and a one-level walkdir pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkdirLister;

impl DirLister for WalkdirLister {
    fn stat(&self, path: &Path) -> Result<EntryInfo> {
        let meta = fs::metadata(path).map_err(|e| Error::from_io(path, e))?;
        Ok(EntryInfo {
            name: display_name(path),
            is_dir: meta.is_dir(),
            size: if meta.is_dir() { 0 } else { meta.len() },
        })
    }

    fn list(&self, path: &Path) -> Result<Vec<EntryInfo>> {
        if !self.stat(path)?.is_dir {
            return Err(Error::NotADirectory(path.to_path_buf()));
        }

        // The directory handle lives inside the iterator and is closed when it
        // is dropped, on both the success and the error path.
        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| Error::from_walk(path, e))?;
            let is_dir = entry.file_type().is_dir();
            let size = if is_dir {
                0
            } else {
                entry
                    .metadata()
                    .map_err(|e| Error::from_walk(entry.path(), e))?
                    .len()
            };
            entries.push(EntryInfo {
                name: entry.file_name().to_os_string(),
                is_dir,
                size,
            });
        }

        debug!(path = %path.display(), entries = entries.len(), "listed directory");
        Ok(entries)
    }
}

/// Base name of `path`, falling back to the path itself for `/` or `.`.
fn display_name(path: &Path) -> OsString {
    path.file_name()
        .unwrap_or_else(|| path.as_os_str())
        .to_os_string()
}
