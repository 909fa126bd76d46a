//! Output capture plumbing for [`Runner::run_log`](super::Runner::run_log).
//!
//! A [`Tee`] duplicates the child's merged output into an optional log file
//! and an in-memory buffer. A [`ChildGuard`] makes sure a spawned child is
//! reaped on every exit path.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::process::{Child, ExitStatus};

/// Open `path` for appending, creating it if missing.
///
/// On Unix the file is created with mode 0666, subject to the umask.
pub(super) fn open_log(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }

    options.open(path)
}

/// Writer that sends every write to the log file (if any), then the buffer.
#[derive(Debug)]
pub(super) struct Tee {
    log: Option<File>,
    buffer: Vec<u8>,
}

impl Tee {
    pub(super) fn new(log: Option<File>) -> Self {
        Self {
            log,
            buffer: Vec::new(),
        }
    }

    /// Consume the tee, closing the log file and returning the captured bytes.
    pub(super) fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(log) = self.log.as_mut() {
            log.write_all(buf)?;
        }
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.log.as_mut() {
            Some(log) => log.flush(),
            None => Ok(()),
        }
    }
}

/// Owns a spawned child until it has been waited on.
///
/// Dropping an unwaited guard kills and reaps the child, so an early return
/// never leaves a zombie or an orphan still writing into a closed pipe.
pub(super) struct ChildGuard {
    child: Option<Child>,
}

impl ChildGuard {
    pub(super) fn new(child: Child) -> Self {
        Self { child: Some(child) }
    }

    /// Wait for the child to exit and release the handle.
    pub(super) fn wait(mut self) -> io::Result<ExitStatus> {
        match self.child.take() {
            Some(mut child) => child.wait(),
            None => Err(io::Error::other("child already waited on")),
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_tee_without_log_only_buffers() {
        let mut tee = Tee::new(None);
        tee.write_all(b"hello ").unwrap();
        tee.write_all(b"world").unwrap();
        tee.flush().unwrap();
        assert_eq!(tee.into_bytes(), b"hello world");
    }

    #[test]
    fn test_tee_writes_log_and_buffer() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.log");

        let mut tee = Tee::new(Some(open_log(&path).unwrap()));
        tee.write_all(b"line one\n").unwrap();
        tee.write_all(b"line two\n").unwrap();
        let captured = tee.into_bytes();

        assert_eq!(captured, b"line one\nline two\n");
        assert_eq!(std::fs::read(&path).unwrap(), captured);
    }

    #[test]
    fn test_open_log_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.log");
        std::fs::write(&path, "existing\n").unwrap();

        let mut file = open_log(&path).unwrap();
        file.write_all(b"appended\n").unwrap();
        drop(file);

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "existing\nappended\n"
        );
    }

    #[test]
    fn test_open_log_fails_for_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.log");
        assert!(open_log(&path).is_err());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_dropping_guard_reaps_child() {
        let child = std::process::Command::new("sleep")
            .arg("30")
            .spawn()
            .unwrap();
        let pid = child.id();
        drop(ChildGuard::new(child));

        // The child was killed and reaped: its /proc entry is gone.
        assert!(!Path::new(&format!("/proc/{}", pid)).exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_guard_wait_returns_status() {
        let child = std::process::Command::new("sh")
            .args(["-c", "exit 4"])
            .spawn()
            .unwrap();
        let status = ChildGuard::new(child).wait().unwrap();
        assert_eq!(status.code(), Some(4));
    }
}
