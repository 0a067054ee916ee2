// File: src/error.rs
// Purpose: Errors raised while scanning and mounting a routes directory

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a mount
///
/// Every variant is fatal: the scan stops at the first error and no
/// partially built router is returned.
#[derive(Debug, Error)]
pub enum Error {
    /// The routes directory does not exist (or is not a directory)
    #[error("routes directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// A discovered file is neither a router nor a router factory
    #[error(
        "invalid route module {}: expected a router or a router factory, found {found}",
        path.display()
    )]
    InvalidRouteModule { path: PathBuf, found: &'static str },

    /// A file, directory or prefix maps to a path the router cannot nest at
    #[error(
        "cannot mount {} at {mount_path}: wildcard segments cannot be nested",
        path.display()
    )]
    InvalidMountPath { path: PathBuf, mount_path: String },

    /// Two files resolved to the same mount path
    #[error(
        "mount path {mount_path} is claimed by both {} and {}",
        first.display(),
        second.display()
    )]
    MountConflict {
        mount_path: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Listing a directory failed
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// File or directory the error is about
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::DirectoryNotFound { path }
            | Error::InvalidRouteModule { path, .. }
            | Error::InvalidMountPath { path, .. }
            | Error::Io { path, .. } => path,
            Error::MountConflict { second, .. } => second,
        }
    }
}
