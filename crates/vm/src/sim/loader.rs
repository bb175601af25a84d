//! Program Loader.
//!
//! This module turns a bytecode file into an in-memory [`Program`]. It performs:
//! 1. **Stat:** Queries the file size; a path that is not a regular file is rejected.
//! 2. **Open:** Obtains a read handle, released again before returning on every path.
//! 3. **Allocate:** Reserves a zeroed buffer of exactly the queried size, fallibly.
//! 4. **Read:** Fills the buffer completely or fails with a short read.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use tracing::info;

use crate::common::error::LoadError;

/// In-memory bytecode image.
///
/// The length always equals the number of bytes actually read; a truncated read
/// never produces a `Program`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    bytes: Box<[u8]>,
}

impl Program {
    /// Wraps an image that is already in memory.
    pub fn from_bytes(bytes: impl Into<Box<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// The image contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Image size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` for a zero-length image.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Loads a bytecode file from disk.
///
/// # Arguments
///
/// * `path` - Path to the bytecode file. It is not validated beforehand; the
///   filesystem decides what resolves.
///
/// # Returns
///
/// A [`Program`] holding exactly the file's contents, or the [`LoadError`]
/// for the first step that failed. A zero-length file yields an empty program.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|source| LoadError::FileNotFound {
        path: path.to_path_buf(),
        source: Some(source),
    })?;
    if !metadata.is_file() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
            source: None,
        });
    }
    let size = metadata.len();

    let file = File::open(path).map_err(|source| LoadError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    // `file` is consumed here and closed when the read returns.
    let program = load_from_reader(file, size, path)?;
    info!(path = %path.display(), bytes = program.len(), "program loaded");
    Ok(program)
}

/// Reads exactly `size` bytes from `reader` into a new [`Program`].
///
/// # Arguments
///
/// * `reader` - Source of the image; dropped before this function returns.
/// * `size` - Number of bytes the image is expected to hold.
/// * `origin` - Path reported in an allocation failure.
///
/// # Returns
///
/// [`LoadError::AllocationFailed`] if the buffer cannot be reserved, or
/// [`LoadError::ShortRead`] if the reader ends (or errors) early.
pub fn load_from_reader<R: Read>(reader: R, size: u64, origin: &Path) -> Result<Program, LoadError> {
    let mut buf = allocate(size, origin)?;
    fill(reader, &mut buf)?;
    Ok(Program::from_bytes(buf))
}

fn allocate(size: u64, origin: &Path) -> Result<Vec<u8>, LoadError> {
    let alloc_failed = || LoadError::AllocationFailed {
        path: origin.to_path_buf(),
        size,
    };
    let len = usize::try_from(size).map_err(|_| alloc_failed())?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| alloc_failed())?;
    buf.resize(len, 0);
    Ok(buf)
}

fn fill<R: Read>(mut reader: R, buf: &mut [u8]) -> Result<(), LoadError> {
    let expected = buf.len() as u64;
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => {
                return Err(LoadError::ShortRead {
                    expected,
                    actual: filled as u64,
                    source: Some(e),
                });
            }
        }
    }

    if filled < buf.len() {
        return Err(LoadError::ShortRead {
            expected,
            actual: filled as u64,
            source: None,
        });
    }
    Ok(())
}
