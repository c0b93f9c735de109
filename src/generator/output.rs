//! Output file handle with an explicit, fallible close.
//!
//! Dropping an [`OutputFile`] always releases the descriptor, but only
//! [`OutputFile::close`] reports flush and sync failures.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Permission bits for generated files (`rw-r--r--`), before umask.
#[cfg(unix)]
pub const OUTPUT_MODE: u32 = 0o644;

/// A generated configuration file open for writing.
pub struct OutputFile {
    writer: BufWriter<File>,
}

impl OutputFile {
    /// Create the file, or truncate it if it already exists.
    pub fn create(path: &Path) -> io::Result<Self> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(OUTPUT_MODE);
        }

        let file = options.open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Flush buffered bytes and sync the file to disk.
    pub fn close(self) -> io::Result<()> {
        let file = self.writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_and_close_writes_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.yaml");

        let mut out = OutputFile::create(&path).unwrap();
        out.write_all(b"name: alpha\n").unwrap();
        out.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name: alpha\n");
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.yaml");
        fs::write(&path, "a much longer previous configuration\n").unwrap();

        let mut out = OutputFile::create(&path).unwrap();
        out.write_all(b"short\n").unwrap();
        out.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.yaml");

        let err = OutputFile::create(&path).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_drop_without_close_still_flushes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.yaml");

        {
            let mut out = OutputFile::create(&path).unwrap();
            out.write_all(b"partial").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "partial");
    }

    #[cfg(unix)]
    #[test]
    fn test_created_file_is_not_executable_or_shared_writable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.yaml");
        OutputFile::create(&path).unwrap().close().unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o600, 0o600, "owner must read and write, got {:o}", mode);
        assert_eq!(mode & 0o133, 0, "unexpected permission bits {:o}", mode);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_close_reports_flush_failure() {
        // /dev/full accepts open() but fails every write with ENOSPC.
        let dev_full = Path::new("/dev/full");
        if !dev_full.exists() {
            return;
        }

        let mut out = OutputFile::create(dev_full).unwrap();
        out.write_all(b"buffered").unwrap();
        assert!(out.close().is_err());
    }
}
