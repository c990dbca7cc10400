//! Size-capped trace file with numbered backups.
//!
//! When the live file grows past its limit it is shifted to `<name>.1`,
//! the previous `.1` to `.2` and so on; whatever falls off the end of the
//! retention window is deleted. Backup names are stable, so the set on disk
//! never grows beyond `backups + 1` files.

use crate::domain::Result;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default rotation threshold (5 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Default number of numbered backups kept.
pub const MAX_BACKUP_FILES: usize = 3;

/// Append-only line writer that rotates by size.
///
/// The handle is opened lazily on the first write, so constructing one never
/// touches the filesystem.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    /// Path of the `n`th backup (`n >= 1`).
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        numbered(&self.path, n)
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns [`ReelsearchError::Io`](crate::domain::ReelsearchError::Io)
    /// for any failure rotating, opening or writing the file, including a
    /// lock poisoned by a previous writer.
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|meta| meta.len() >= self.max_bytes) {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file unavailable").into());
        };

        writeln!(file, "{line}")?;
        file.flush()?;
        Ok(())
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

fn numbered(path: &Path, n: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::with_limits(path.clone(), 4, 2);

        for i in 0..5 {
            writer.write_line(&format!("line-{i}")).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line-4\n");
        assert_eq!(fs::read_to_string(writer.backup_path(1)).unwrap(), "line-3\n");
        assert_eq!(fs::read_to_string(writer.backup_path(2)).unwrap(), "line-2\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn small_writes_stay_in_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::new(path.clone());

        writer.write_line("{}").unwrap();
        writer.write_line("{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n{}\n");
        assert!(!writer.backup_path(1).exists());
    }
}
