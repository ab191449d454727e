#![allow(dead_code)]

use dirtree::tree::{DirLister, EntryInfo};
use dirtree::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a directory structure from `(relative path, size)` pairs.
/// Paths ending with '/' create directories (size ignored); others create
/// files filled with `size` bytes.
pub fn create_fixture(entries: &[(&str, usize)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (p, size) in entries {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, vec![b'x'; *size]).unwrap();
        }
    }
    tmp
}

/// Render `root` to a string, panicking on error.
pub fn render_to_string(root: &Path, include_files: bool) -> String {
    let mut out = Vec::new();
    dirtree::render(&mut out, root, include_files).unwrap();
    String::from_utf8(out).unwrap()
}

/// Scripted outcome of listing one directory.
pub enum Listing {
    Entries(Vec<EntryInfo>),
    Denied,
}

/// In-memory `DirLister` that can fail on chosen directories.
#[derive(Default)]
pub struct ScriptedLister {
    dirs: HashMap<PathBuf, Listing>,
}

impl ScriptedLister {
    pub fn dir(mut self, path: &str, entries: Vec<EntryInfo>) -> Self {
        self.dirs.insert(PathBuf::from(path), Listing::Entries(entries));
        self
    }

    pub fn denied(mut self, path: &str) -> Self {
        self.dirs.insert(PathBuf::from(path), Listing::Denied);
        self
    }
}

impl DirLister for ScriptedLister {
    fn stat(&self, path: &Path) -> Result<EntryInfo> {
        let name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        match self.dirs.get(path) {
            Some(_) => Ok(EntryInfo::dir(name)),
            None => Err(Error::NotFound(path.to_path_buf())),
        }
    }

    fn list(&self, path: &Path) -> Result<Vec<EntryInfo>> {
        match self.dirs.get(path) {
            Some(Listing::Entries(entries)) => Ok(entries.clone()),
            Some(Listing::Denied) => Err(Error::PermissionDenied(path.to_path_buf())),
            None => Err(Error::NotFound(path.to_path_buf())),
        }
    }
}
