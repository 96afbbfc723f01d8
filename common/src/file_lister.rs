use crate::errors::{MatchError, MatchResult};
use crate::types::{FileList, FileRecord};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Returns every regular file under `root`, at any depth. Symlinks are followed only as far as
/// checking whether they point at a regular file. Any failure to read the tree is an error,
/// because a partial listing would silently produce a partial copy.
///
pub fn list_files(root: &Path) -> MatchResult<FileList> {
    if !root.is_dir() {
        let kind = if root.exists() {
            io::ErrorKind::NotADirectory
        } else {
            io::ErrorKind::NotFound
        };

        return Err(MatchError::DirectoryAccess {
            path: root.to_path_buf(),
            source: io::Error::from(kind),
        });
    }

    let mut ret = FileList::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| MatchError::DirectoryAccess {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: e.into(),
        })?;

        if !entry.path().is_file() {
            continue;
        }

        let name = entry.file_name().to_os_string();
        ret.push(FileRecord {
            path: entry.into_path(),
            name,
        });
    }

    Ok(ret)
}
