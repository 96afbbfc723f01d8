use crate::announce;
use crate::errors::{MatchError, MatchResult};
use crate::key::DerivedKey;
use crate::types::{CopyOutcome, Opts};
use std::fs;
use std::path::Path;

/// Copies `src` into `dest_dir`, naming it after `key`. If that name is already taken, a single
/// random number is put in front of the extension and the copy goes there instead. The new name
/// is not checked, so in the unlikely event that it also exists, it is overwritten.
///
pub fn copy_match(
    src: &Path,
    dest_dir: &Path,
    key: &DerivedKey,
    opts: &Opts,
) -> MatchResult<CopyOutcome> {
    copy_match_with(src, dest_dir, key, opts, rand::random::<i64>)
}

fn copy_match_with(
    src: &Path,
    dest_dir: &Path,
    key: &DerivedKey,
    opts: &Opts,
    suffix: impl FnOnce() -> i64,
) -> MatchResult<CopyOutcome> {
    let dest = dest_dir.join(key.to_string());

    if dest.exists() {
        let unique_dest = dest_dir.join(key.disambiguated(suffix()));
        announce!(
            opts,
            "{} exists, using {}",
            dest.display(),
            unique_dest.display()
        );
        copy_file_action(src, &unique_dest, opts)?;
        Ok(CopyOutcome::Renamed(unique_dest))
    } else {
        copy_file_action(src, &dest, opts)?;
        Ok(CopyOutcome::Copied(dest))
    }
}

fn copy_file_action(src: &Path, dest: &Path, opts: &Opts) -> MatchResult<()> {
    announce!(opts, "{} -> {}", src.display(), dest.display());

    if opts.noop {
        return Ok(());
    }

    fs::copy(src, dest)
        .map(|_| ())
        .map_err(|source| MatchError::CopyIo {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
            source,
        })
}
