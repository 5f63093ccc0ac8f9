//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::{FileMetadata, FileSystem};
use std::fs;
use std::path::Path;

/// 標準ファイルシステム実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        fs::read_to_string(path).map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        fs::create_dir_all(path).map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error> {
        let m = fs::metadata(path).map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))?;
        Ok(FileMetadata::new(m.len(), m.is_file(), m.is_dir()))
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let f = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))?;
        Ok(Box::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file_is_io_error() {
        let fs = StdFileSystem;
        let err = fs
            .read_to_string(Path::new("/nonexistent/enhance/profiles.json"))
            .unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_exists_and_metadata_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "hello").unwrap();

        let fs = StdFileSystem;
        assert!(fs.exists(&path));
        let meta = fs.metadata(&path).unwrap();
        assert!(meta.is_file());
        assert!(!meta.is_dir());
        assert_eq!(meta.len(), 5);
    }
}
