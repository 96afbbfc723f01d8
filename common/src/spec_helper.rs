use std::path::PathBuf;

/// Path to a directory of sample photos under this crate's test/resources. Resolved at compile
/// time, so it works from the tests of any crate in the workspace.
pub fn fixture(dir: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test/resources")
        .join(dir)
}
