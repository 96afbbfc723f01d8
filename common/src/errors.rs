use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("cannot read directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{name} is shorter than {min_len} characters")]
    InvalidName { name: String, min_len: usize },

    #[error("failed to copy {} to {}: {source}", .src.display(), .dest.display())]
    CopyIo {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type MatchResult<T> = Result<T, MatchError>;
