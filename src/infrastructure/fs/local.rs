//! Local File System
//!
//! Disk operations used by the repositories, with atomic writes.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::BoxResult;

/// Local file system access
///
/// Writes go to a temporary file in the target directory and are renamed
/// into place, so readers never observe a partial document.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> BoxResult<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    /// Atomic write, creating parent directories as needed
    pub fn write(&self, path: &Path, content: &str) -> BoxResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    pub fn remove(&self, path: &Path) -> BoxResult<()> {
        Ok(std::fs::remove_file(path)?)
    }

    pub fn create_dir_all(&self, path: &Path) -> BoxResult<()> {
        Ok(std::fs::create_dir_all(path)?)
    }

    /// Files directly under `dir` with the given extension, sorted by path
    pub fn list_with_extension(&self, dir: &Path, ext: &str) -> BoxResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|e| e == ext) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_and_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("box.yaml");
        let fs = LocalFs::new();

        fs.write(&file, "width: 200").unwrap();
        assert_eq!(fs.read(&file).unwrap(), "width: 200");
    }

    #[test]
    fn local_fs_write_replaces_and_creates_parents() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("box.yaml");
        let fs = LocalFs::new();

        fs.write(&file, "old").unwrap();
        fs.write(&file, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
        // only the target remains, no stray temp files
        assert_eq!(std::fs::read_dir(file.parent().unwrap()).unwrap().count(), 1);
    }

    #[test]
    fn local_fs_remove() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("remove.yaml");
        let fs = LocalFs::new();

        fs.write(&file, "content").unwrap();
        assert!(fs.exists(&file));

        fs.remove(&file).unwrap();
        assert!(!fs.exists(&file));
    }

    #[test]
    fn list_with_extension_filters_and_sorts() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        fs.write(&dir.path().join("b.yaml"), "").unwrap();
        fs.write(&dir.path().join("a.yaml"), "").unwrap();
        fs.write(&dir.path().join("notes.txt"), "").unwrap();
        fs.create_dir_all(&dir.path().join("c.yaml")).unwrap();

        let names: Vec<_> = fs
            .list_with_extension(dir.path(), "yaml")
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.yaml", "b.yaml"]);
    }

    #[test]
    fn list_missing_dir_is_empty() {
        let fs = LocalFs::new();
        assert!(fs
            .list_with_extension(Path::new("/nonexistent/stowbox"), "yaml")
            .unwrap()
            .is_empty());
    }
}
