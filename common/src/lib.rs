//! Everything needed to find the raw files which go with a set of chosen photos, and copy them
//! somewhere safe. The `raw-match` binary strings these together.
//!
pub mod constants;
pub mod errors;
pub mod file_copier;
pub mod file_lister;
pub mod key;
pub mod macros;
pub mod matcher;
pub mod spec_helper;
pub mod types;
