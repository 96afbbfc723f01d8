use std::ffi::OsString;
use std::path::PathBuf;

pub struct Opts {
    pub verbose: bool,
    pub noop: bool,
}

/// A regular file found by walking a directory tree. Neither field need be valid UTF-8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub name: OsString,
}

pub type FileList = Vec<FileRecord>;

/// What happened to a single matched file. Both variants hold the path written to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(PathBuf),
    Renamed(PathBuf),
}
