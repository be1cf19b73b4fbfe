//! Path helpers for source names and the output directory

use std::path::Path;

use crate::domain::errors::DomainError;

/// Split a source path into file name, base name and dotted extension
///
/// Returns `None` when the path has no file name component (`/`, `..`).
pub fn split_file_name(path: &Path) -> Option<(String, String, String)> {
    let file_name = path.file_name()?.to_string_lossy().to_string();
    let stem = Path::new(&file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.clone());
    let extension = Path::new(&file_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    Some((file_name, stem, extension))
}

/// Create the output directory and its parents if missing
pub fn ensure_output_dir(dir: &Path) -> Result<(), DomainError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        DomainError::FsFail(format!(
            "Failed to create output directory {}: {}",
            dir.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_regular_name() {
        let (file_name, stem, ext) = split_file_name(Path::new("a/b/clip.mp4")).unwrap();
        assert_eq!(file_name, "clip.mp4");
        assert_eq!(stem, "clip");
        assert_eq!(ext, ".mp4");
    }

    #[test]
    fn test_split_keeps_inner_dots_in_stem() {
        let (_, stem, ext) = split_file_name(Path::new("holiday.2023.mkv")).unwrap();
        assert_eq!(stem, "holiday.2023");
        assert_eq!(ext, ".mkv");
    }

    #[test]
    fn test_split_hidden_file_has_no_extension() {
        let (_, stem, ext) = split_file_name(Path::new(".hidden")).unwrap();
        assert_eq!(stem, ".hidden");
        assert_eq!(ext, "");
    }

    #[test]
    fn test_split_without_file_name() {
        assert!(split_file_name(Path::new("/")).is_none());
        assert!(split_file_name(Path::new("..")).is_none());
    }

    #[test]
    fn test_ensure_output_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("output").join("cuts");

        ensure_output_dir(&nested).unwrap();
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
