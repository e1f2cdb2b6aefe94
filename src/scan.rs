use std::fmt;
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use crate::collection::FileCollection;

#[derive(Debug)]
pub enum ScanError {
    RootNotFound(PathBuf),
    NotADirectory(PathBuf),
    IoError(io::Error),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::RootNotFound(path) => write!(f, "Path '{}' does not exist", path.display()),
            ScanError::NotADirectory(path) => write!(f, "Path '{}' is not a directory", path.display()),
            ScanError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<io::Error> for ScanError {
    fn from(error: io::Error) -> Self {
        ScanError::IoError(error)
    }
}

/// Checks that `root` is an existing directory and returns it as an absolute path.
pub fn resolve_root(root: &Path) -> Result<PathBuf, ScanError> {
    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ScanError::RootNotFound(root.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    Ok(std::path::absolute(root)?)
}

/// Recursively collects every regular file below `root`.
///
/// Unreadable directories and entries are logged and skipped; only an invalid
/// root is an error.
pub fn scan_directory(root: &Path) -> Result<FileCollection, ScanError> {
    let root = resolve_root(root)?;
    info!("Scanning {}", root.display());

    let mut collection = FileCollection::new();
    walk(&root, &mut collection);

    if collection.is_empty() {
        warn!("No files found under {}", root.display());
    }
    info!(
        "Found {} files with {} distinct extensions",
        collection.total_files(),
        collection.extension_count()
    );
    Ok(collection)
}

fn walk(dir: &Path, collection: &mut FileCollection) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Skipping directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries {
        match entry {
            Ok(entry) => visit(entry, collection),
            Err(e) => warn!("Skipping unreadable entry in {}: {}", dir.display(), e),
        }
    }
}

fn visit(entry: DirEntry, collection: &mut FileCollection) {
    let path = entry.path();
    let file_type = match entry.file_type() {
        Ok(file_type) => file_type,
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            return;
        }
    };

    if file_type.is_dir() {
        walk(&path, collection);
    } else if file_type.is_file() {
        collection.add_file(path);
    } else if file_type.is_symlink() {
        // Links to files are listed under the link's path; linked directories are not entered.
        match fs::metadata(&path) {
            Ok(target) if target.is_file() => collection.add_file(path),
            Ok(_) => debug!("Not following symlink {}", path.display()),
            Err(e) => warn!("Skipping broken symlink {}: {}", path.display(), e),
        }
    } else {
        debug!("Skipping special file {}", path.display());
    }
}
