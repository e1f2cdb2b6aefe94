use std::path::Path;

/// Returns the lowercase extension of `path` with its leading dot, e.g. `".txt"`.
///
/// Dotfiles such as `.gitignore` and names ending in a dot have no extension.
pub fn normalized_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext))
}
