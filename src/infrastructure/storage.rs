use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::error::{AppError, Result};

/// List workbook file names in the input directory, in the order the
/// directory listing returns them (no re-sorting).
///
/// Only entries whose extension matches `extension` are returned. A
/// missing or non-directory path is fatal to the run.
pub fn enumerate_workbooks(input_dir: &Path, extension: &str) -> Result<Vec<String>> {
    if !input_dir.is_dir() {
        return Err(AppError::DirectoryNotFound(
            input_dir.display().to_string(),
        ));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(input_dir).map_err(|e| {
        AppError::DirectoryNotFound(format!("{}: {}", input_dir.display(), e))
    })? {
        let entry = entry.map_err(AppError::from)?;
        let path = entry.path();
        let matches = path.is_file()
            && path
                .extension()
                .map(|ext| ext == extension)
                .unwrap_or(false);
        if matches {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Full path of a workbook file inside the input directory.
pub fn workbook_path(input_dir: &Path, file_name: &str) -> PathBuf {
    input_dir.join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::fs::File;

    #[test]
    fn test_enumerate_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a.xlsx")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("b.xlsx")).unwrap();

        let mut names = enumerate_workbooks(dir.path(), "xlsx").unwrap();
        names.sort();
        assert_eq!(names, vec!["a.xlsx", "b.xlsx"]);
    }

    #[test]
    fn test_enumerate_skips_directories_with_matching_extension() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a.xlsx")).unwrap();
        fs::create_dir(dir.path().join("subdir.xlsx")).unwrap();

        let names = enumerate_workbooks(dir.path(), "xlsx").unwrap();
        assert_eq!(names, vec!["a.xlsx"]);
    }

    #[test]
    fn test_enumerate_missing_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = enumerate_workbooks(&missing, "xlsx").unwrap_err();
        assert!(matches!(err, AppError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_enumerate_empty_dir_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let names = enumerate_workbooks(dir.path(), "xlsx").unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
