use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively lists regular files under `root` whose extension is in
/// `extensions`. A missing root or unreadable entries are logged and skipped;
/// this never fails. Paths come back sorted so runs are reproducible.
pub fn list_documents<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Vec<PathBuf> {
    if !root.exists() {
        tracing::warn!(root = %root.display(), "directory not found");
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(root = %root.display(), error = %err, "filesystem error while scanning");
                continue;
            }
        };
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    tracing::info!(root = %root.display(), found = files.len(), "discovered documents");
    files
}

pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => extensions.iter().any(|e| e.as_ref().eq_ignore_ascii_case(ext)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case() {
        let exts = ["pdf"];
        assert!(has_extension(Path::new("a/b.PDF"), &exts));
        assert!(has_extension(Path::new("b.pdf"), &exts));
        assert!(!has_extension(Path::new("b.pdf.txt"), &exts));
        assert!(!has_extension(Path::new("pdf"), &exts));
    }

    #[test]
    fn missing_root_is_empty() {
        assert!(list_documents(Path::new("/definitely/not/here/paperscout"), &["pdf"]).is_empty());
    }
}
