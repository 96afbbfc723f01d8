use crate::constants::KEY_LENGTH;
use crate::errors::{MatchError, MatchResult};
use std::ffi::OsStr;
use std::fmt;
use std::str;

/// The name a needed file's raw counterpart is expected to have: a fixed-length prefix of the
/// needed file's name, plus the raw extension.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedKey {
    prefix: String,
    extension: String,
}

impl DerivedKey {
    /// Takes the first `KEY_LENGTH` characters of `name` verbatim. The original extension of
    /// `name` plays no part, so `IMG_0001.JPG` and `IMG_0001-edit.tif` give the same key. Only
    /// the leading valid UTF-8 part of `name` is considered.
    ///
    pub fn derive(name: impl AsRef<OsStr>, extension: &str) -> MatchResult<Self> {
        let name = name.as_ref();
        let text = utf8_prefix(name);

        let prefix = match text.char_indices().nth(KEY_LENGTH) {
            Some((end, _)) => &text[..end],
            None if text.chars().count() == KEY_LENGTH => text,
            None => {
                return Err(MatchError::InvalidName {
                    name: name.to_string_lossy().to_string(),
                    min_len: KEY_LENGTH,
                });
            }
        };

        Ok(Self {
            prefix: prefix.to_string(),
            extension: extension.to_string(),
        })
    }

    /// The key with `suffix` inserted before the extension, e.g. `IMG_0001-42.CR2` for a
    /// suffix of -42.
    pub fn disambiguated(&self, suffix: i64) -> String {
        format!("{}{}{}", self.prefix, suffix, self.extension)
    }
}

impl fmt::Display for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.extension)
    }
}

fn utf8_prefix(name: &OsStr) -> &str {
    let bytes = name.as_encoded_bytes();

    match str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
    }
}
