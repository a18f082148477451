use log::{debug, error};
use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use std::fs::File;
use std::os::unix::io::{AsRawFd, FromRawFd};
use std::path::Path;

use super::error::ControlFileError;

/// Performs one open-write-close transaction on a sysfs control file.
///
/// The file is never created, so a missing control file is always reported as `OpenFailed`.
/// The payload goes out in a single `write(2)` call and anything short of the full length is a failure.
pub fn write<P: AsRef<Path>>(path: P, payload: &str) -> Result<(), ControlFileError> {
    use ControlFileError::*;
    let path = path.as_ref();

    let mut open_flags = OFlag::empty();
    open_flags.insert(OFlag::O_WRONLY);
    open_flags.insert(OFlag::O_TRUNC);
    open_flags.insert(OFlag::O_CLOEXEC);

    let file_fd = open(path, open_flags, Mode::empty()).map_err(|source| {
        error!("Error opening {}: {}", path.display(), source);
        OpenFailed {
            path: path.to_owned(),
            source,
        }
    })?;

    // SAFETY: Validity of file_fd is checked by Nix and nothing else owns it.
    let handle = unsafe { File::from_raw_fd(file_fd) };

    let written = nix::unistd::write(handle.as_raw_fd(), payload.as_bytes()).map_err(|source| {
        error!("Error writing {:?} to {}: {}", payload, path.display(), source);
        WriteFailed {
            path: path.to_owned(),
            payload: payload.to_owned(),
            source,
        }
    })?;

    check_written(path, payload, written)?;

    debug!("Wrote {:?} to {}", payload, path.display());
    Ok(())
}

/// Control files take the whole line or nothing, so a partial write is never retried.
fn check_written(path: &Path, payload: &str, written: usize) -> Result<(), ControlFileError> {
    if written == payload.len() {
        return Ok(());
    }

    error!(
        "Short write of {:?} to {}: {} of {} bytes",
        payload,
        path.display(),
        written,
        payload.len()
    );
    Err(ControlFileError::ShortWrite {
        path: path.to_owned(),
        payload: payload.to_owned(),
        written,
    })
}

/// Reads a control file and returns its content without the trailing newline the kernel appends.
pub fn read<P: AsRef<Path>>(path: P) -> Result<String, ControlFileError> {
    let path = path.as_ref();

    std::fs::read_to_string(path)
        .map(|content| content.trim_end().to_owned())
        .map_err(|source| {
            error!("Error reading {}: {}", path.display(), source);
            ControlFileError::ReadFailed {
                path: path.to_owned(),
                source,
            }
        })
}
