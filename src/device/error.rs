use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Enum representing possible failures of a single control file transaction.
///
/// Writing to a control file can fail in three ways:
/// - OpenFailed - The control file can't be opened. For per-pin files this usually means the pin isn't reserved;
///   for `export`/`unexport` it means insufficient permissions or no sysfs GPIO support in the kernel.
/// - WriteFailed - The kernel rejected the payload (pin already reserved, unsupported pin, bad direction...).
/// - ShortWrite - Fewer bytes than the payload length were accepted. Control files take the whole line or nothing,
///   so this is reported as a failure rather than retried.
///
/// Reading back pin state adds `ReadFailed` and `UnexpectedContent`.
#[derive(Error, Debug)]
pub enum ControlFileError {
    #[error("failed to open {}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: nix::Error,
    },
    #[error("failed to write {payload:?} to {}", .path.display())]
    WriteFailed {
        path: PathBuf,
        payload: String,
        #[source]
        source: nix::Error,
    },
    #[error("short write of {payload:?} to {}: {written} of {} bytes accepted", .path.display(), .payload.len())]
    ShortWrite {
        path: PathBuf,
        payload: String,
        written: usize,
    },
    #[error("failed to read {}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unexpected content {content:?} in {}", .path.display())]
    UnexpectedContent { path: PathBuf, content: String },
}
