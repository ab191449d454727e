//! Error type shared by the node model, the directory lister and the renderer.

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`], independent of the offending path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    NotADirectory,
    Io,
    Write,
}

#[derive(Debug)]
pub enum Error {
    /// The root or a subdirectory vanished before it could be read.
    NotFound(PathBuf),
    /// The path exists but cannot be opened or listed.
    PermissionDenied(PathBuf),
    /// A listing was attempted on something that is not a directory.
    NotADirectory(PathBuf),
    /// Any other filesystem failure.
    Io { path: PathBuf, source: io::Error },
    /// Writing to the output sink failed.
    Write(io::Error),
}

impl Error {
    /// Classify an I/O error raised while accessing `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Error {
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Error::PermissionDenied(path.to_path_buf()),
            _ => Error::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Classify a walkdir error; `fallback` is used when walkdir does not
    /// report the path itself.
    pub fn from_walk(fallback: &Path, err: walkdir::Error) -> Error {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf());
        match err.into_io_error() {
            Some(io_err) => Error::from_io(&path, io_err),
            // Loop detection only fires when following links, which we never do.
            None => Error::Io {
                path,
                source: io::Error::new(io::ErrorKind::Other, "filesystem loop"),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Error::NotADirectory(_) => ErrorKind::NotADirectory,
            Error::Io { .. } => ErrorKind::Io,
            Error::Write(_) => ErrorKind::Write,
        }
    }

    /// The path the error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::NotFound(p) | Error::PermissionDenied(p) | Error::NotADirectory(p) => Some(p),
            Error::Io { path, .. } => Some(path),
            Error::Write(_) => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::NotFound(p) => write!(f, "{}: No such file or directory", p.display()),
            Error::PermissionDenied(p) => write!(f, "{}: Permission denied", p.display()),
            Error::NotADirectory(p) => write!(f, "{}: Not a directory", p.display()),
            Error::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Error::Write(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Write(err) => Some(err),
            _ => None,
        }
    }
}
