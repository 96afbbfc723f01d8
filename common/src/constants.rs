/// Extension given to every derived key unless the user asks for another.
pub const RAW_EXTENSION: &str = ".CR2";

/// Number of leading characters of a needed file's name which make up its key.
pub const KEY_LENGTH: usize = 8;
