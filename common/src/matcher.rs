use crate::key::DerivedKey;
use crate::types::FileRecord;
use std::ffi::OsStr;

/// Returns every file in `pool` whose name is exactly the key. Case matters, and there is no
/// prefix or fuzzy matching. Files with the same name in different directories all match.
///
pub fn matches<'a>(key: &DerivedKey, pool: &'a [FileRecord]) -> Vec<&'a FileRecord> {
    let wanted = key.to_string();
    let wanted = OsStr::new(&wanted);
    pool.iter().filter(|f| f.name.as_os_str() == wanted).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::RAW_EXTENSION;
    use std::path::PathBuf;

    fn record(path: PathBuf) -> FileRecord {
        FileRecord {
            name: path.file_name().unwrap().to_os_string(),
            path,
        }
    }

    fn pool() -> Vec<FileRecord> {
        [
            "/pool/IMG_0001.CR2",
            "/pool/IMG_0001.JPG",
            "/pool/IMG_0001.cr2",
            "/pool/IMG_00011.CR2",
            "/pool/xIMG_0001.CR2",
            "/pool/IMG_0002.CR2",
            "/pool/2023/IMG_0001.CR2",
        ]
        .into_iter()
        .map(|p| record(PathBuf::from(p)))
        .collect()
    }

    #[test]
    fn test_matches_exact_name_only() {
        let pool = pool();
        let key = DerivedKey::derive("IMG_0001.JPG", RAW_EXTENSION).unwrap();

        let actual: Vec<&PathBuf> = matches(&key, &pool).iter().map(|f| &f.path).collect();

        assert_eq!(
            vec![
                &PathBuf::from("/pool/IMG_0001.CR2"),
                &PathBuf::from("/pool/2023/IMG_0001.CR2"),
            ],
            actual
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_matches_inside_non_utf8_dir() {
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from(OsStr::from_bytes(b"/pool/card\xff/IMG_0001.CR2"));
        let pool = vec![record(path.clone())];
        let key = DerivedKey::derive("IMG_0001.JPG", RAW_EXTENSION).unwrap();

        assert_eq!(vec![&path], matches(&key, &pool).iter().map(|f| &f.path).collect::<Vec<_>>());
    }

    #[test]
    fn test_matches_nothing() {
        let pool = pool();
        let key = DerivedKey::derive("IMG_9999.JPG", RAW_EXTENSION).unwrap();
        assert!(matches(&key, &pool).is_empty());
        assert!(matches(&key, &[]).is_empty());
    }

    #[test]
    fn test_matches_other_extension() {
        let pool = pool();
        let key = DerivedKey::derive("IMG_0001.tif", ".JPG").unwrap();
        assert_eq!(1, matches(&key, &pool).len());
    }
}
