// src/attr/mod.rs

//! Access to the watched attribute file.
//!
//! The watch loop opens and reads the attribute through [`AttributeSource`]
//! so tests can swap in an in-memory attribute that counts closes.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Largest payload read after a notification. Longer content is truncated.
pub const ATTR_BUF_LEN: usize = 32;

/// Opens attribute handles for reading.
///
/// Closing a handle is dropping it.
pub trait AttributeSource {
    type Handle: Read + Seek;

    fn open(&self, path: &Path) -> io::Result<Self::Handle>;
}

/// Real attributes on the filesystem (normally under `/sys`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SysfsAttributes;

impl AttributeSource for SysfsAttributes {
    type Handle = File;

    fn open(&self, path: &Path) -> io::Result<File> {
        File::open(path)
    }
}

/// Read the attribute from the start with a single `read` of at most
/// [`ATTR_BUF_LEN`] bytes.
///
/// Sysfs serves the whole value on the first read at offset 0, so the
/// handle is rewound first; after the priming read it sits at EOF.
pub fn read_attribute<H: Read + Seek>(handle: &mut H) -> io::Result<Vec<u8>> {
    handle.seek(SeekFrom::Start(0))?;

    let mut buf = [0u8; ATTR_BUF_LEN];
    let n = handle.read(&mut buf)?;
    Ok(buf[..n].to_vec())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    #[test]
    fn reads_from_start_after_priming() {
        let mut cur = Cursor::new(b"1\n".to_vec());
        let first = read_attribute(&mut cur).unwrap();
        let second = read_attribute(&mut cur).unwrap();
        assert_eq!(first, b"1\n");
        assert_eq!(second, b"1\n");
    }

    #[test]
    fn truncates_long_values() {
        let mut cur = Cursor::new(vec![b'x'; 100]);
        let payload = read_attribute(&mut cur).unwrap();
        assert_eq!(payload.len(), ATTR_BUF_LEN);
    }

    #[test]
    fn sysfs_attributes_open_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "42\n").unwrap();

        let mut handle = SysfsAttributes.open(file.path()).unwrap();
        assert_eq!(read_attribute(&mut handle).unwrap(), b"42\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = SysfsAttributes.open(&dir.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
