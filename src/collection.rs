use std::collections::BTreeSet;
use std::path::PathBuf;
use crate::extension::normalized_extension;

/// Files found by a scan, in discovery order, plus the distinct extensions seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCollection {
    files: Vec<PathBuf>,
    extensions: BTreeSet<String>,
}

impl FileCollection {
    pub fn new() -> Self {
        FileCollection {
            files: Vec::new(),
            extensions: BTreeSet::new(),
        }
    }

    pub fn add_file(&mut self, path: PathBuf) {
        if let Some(ext) = normalized_extension(&path) {
            self.extensions.insert(ext);
        }
        self.files.push(path);
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Sorted, deduplicated extensions.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }

    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
