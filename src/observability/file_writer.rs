//! Rotating log file with size-based rotation and backup retention.
//!
//! This module provides a thread-safe log sink that automatically rotates
//! files when they exceed a size threshold, maintaining a fixed number of
//! backup files. This prevents unbounded disk usage for long-lived hosts.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating log sink.
///
/// When the current file exceeds [`MAX_FILE_SIZE_BYTES`] it is renamed with a
/// timestamp suffix, a new file is created, and backups beyond
/// [`MAX_BACKUP_FILES`] are removed.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > 10 MB, rotate:
///    - Rename current file to `<name>.log.<unix_timestamp>`
///    - Create new empty file on next write
///    - Remove oldest backups beyond the retention limit
pub struct RotatingLogFile {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<File>>,
}

impl RotatingLogFile {
    /// Creates a rotating sink for the given path.
    ///
    /// The file is not opened until the first write, so construction succeeds
    /// even if the file cannot be opened immediately.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Writes a buffer to the file, rotating first when it has grown too large.
    ///
    /// # Errors
    ///
    /// May fail on filesystem permissions, disk exhaustion, or a poisoned
    /// lock (another thread panicked mid-write).
    pub fn write_bytes(&self, buf: &[u8]) -> std::io::Result<usize> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("log lock poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            if let Some(parent) = self.file_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "no log file available"))?;

        file.write_all(buf)?;
        file.flush()?;
        Ok(buf.len())
    }

    /// Checks file size and rotates if necessary.
    fn check_and_rotate(&self, writer: &mut Option<File>) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file with a timestamp suffix and prunes backups.
    fn rotate_files(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("log.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Removes backup files beyond the retention limit, newest kept first.
    ///
    /// Individual deletion failures are ignored so cleanup keeps going.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "no parent directory"))?;

        let file_stem = self
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".log."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingLogFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingLogFile")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

/// Cheap per-write handle handed to the tracing fmt layer.
///
/// The fmt layer asks for a fresh writer per event; each handle shares the
/// same underlying rotating sink.
#[derive(Debug, Clone)]
pub struct LogWriter(pub Arc<RotatingLogFile>);

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write_bytes(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_append_to_the_target_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("donlocal.log");
        let sink = RotatingLogFile::new(path.clone());

        sink.write_bytes("première ligne\n".as_bytes()).unwrap();
        sink.write_bytes("deuxième ligne\n".as_bytes()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("première ligne"));
        assert!(contents.contains("deuxième ligne"));
    }

    #[test]
    fn handles_share_one_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("donlocal.log");
        let sink = Arc::new(RotatingLogFile::new(path.clone()));

        let mut a = LogWriter(Arc::clone(&sink));
        let mut b = LogWriter(sink);
        a.write_all(b"a\n").unwrap();
        b.write_all(b"b\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "a\nb\n");
    }
}
