//! # Program Loading Tests
//!
//! Covers loading bytecode from disk and from readers that misbehave part way.

use std::io::{self, Cursor, Read, Write};
use std::path::Path;

use proptest::prelude::*;
use svm_core::common::LoadError;
use svm_core::sim::loader::{self, Program};
use tempfile::NamedTempFile;

/// Helper function to create a temporary bytecode file.
fn create_temp_program(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

/// Reader that yields some bytes, then an error.
struct FailingReader {
    remaining: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::other("device went away"));
        }
        let n = self.remaining.min(buf.len());
        buf[..n].fill(0x50);
        self.remaining -= n;
        Ok(n)
    }
}

/// Reader that is interrupted before every successful read.
struct InterruptingReader {
    inner: Cursor<Vec<u8>>,
    interrupt_next: bool,
}

impl Read for InterruptingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt_next = !self.interrupt_next;
        if self.interrupt_next {
            return Err(io::ErrorKind::Interrupted.into());
        }
        let len = buf.len().min(1);
        self.inner.read(&mut buf[..len])
    }
}

#[test]
fn test_load_program_success() {
    let data = vec![0x01, 0x00, 0x2a, 0x00, 0x02, 0x00, 0x00];
    let file = create_temp_program(&data);

    let program = loader::load_program(file.path()).unwrap();
    assert_eq!(program.as_bytes(), data.as_slice());
    assert_eq!(program.len(), data.len());
}

#[test]
fn test_load_program_empty_file() {
    let file = create_temp_program(&[]);

    let program = loader::load_program(file.path()).unwrap();
    assert!(program.is_empty());
}

#[test]
fn test_load_program_large_file() {
    let data: Vec<u8> = (0..0x1_0000).map(|i| (i % 256) as u8).collect();
    let file = create_temp_program(&data);

    let program = loader::load_program(file.path()).unwrap();
    assert_eq!(program.as_bytes(), data.as_slice());
}

#[test]
fn test_load_program_nonexistent_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.raw");

    let err = loader::load_program(&path).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound { source: Some(_), .. }));
    assert_eq!(
        err.to_string(),
        format!("Failed to read file: {}", path.display())
    );
}

#[test]
fn test_load_program_directory_is_not_a_program() {
    let dir = tempfile::tempdir().unwrap();

    let err = loader::load_program(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound { source: None, .. }));
}

#[test]
fn test_reader_ending_early_is_a_short_read() {
    let err = loader::load_from_reader(Cursor::new(vec![1, 2, 3]), 8, Path::new("x")).unwrap_err();

    assert!(matches!(
        err,
        LoadError::ShortRead {
            expected: 8,
            actual: 3,
            source: None
        }
    ));
    assert_eq!(
        err.to_string(),
        "Failed to wholly read input file (read 3 of 8 bytes)"
    );
}

#[test]
fn test_reader_error_is_a_short_read_with_cause() {
    let reader = FailingReader { remaining: 5 };
    let err = loader::load_from_reader(reader, 10, Path::new("x")).unwrap_err();

    match err {
        LoadError::ShortRead {
            expected,
            actual,
            source: Some(cause),
        } => {
            assert_eq!((expected, actual), (10, 5));
            assert_eq!(cause.to_string(), "device went away");
        }
        other => panic!("expected a short read with a cause, got {other:?}"),
    }
}

#[test]
fn test_interrupted_reads_are_retried() {
    let reader = InterruptingReader {
        inner: Cursor::new(vec![7, 8, 9]),
        interrupt_next: false,
    };
    let program = loader::load_from_reader(reader, 3, Path::new("x")).unwrap();
    assert_eq!(program, Program::from_bytes(vec![7, 8, 9]));
}

#[test]
fn test_reader_longer_than_size_is_truncated_to_size() {
    let program =
        loader::load_from_reader(Cursor::new(vec![1, 2, 3, 4]), 2, Path::new("x")).unwrap();
    assert_eq!(program.as_bytes(), &[1, 2]);
}

#[test]
fn test_unallocatable_size_is_reported() {
    let origin = Path::new("huge.raw");
    let err = loader::load_from_reader(io::empty(), u64::MAX, origin).unwrap_err();

    assert!(matches!(err, LoadError::AllocationFailed { size: u64::MAX, .. }));
    assert!(err.to_string().starts_with("Failed to allocate RAM for program-file huge.raw"));
}

proptest! {
    #[test]
    fn prop_loaded_length_matches_file(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let file = create_temp_program(&data);
        let program = loader::load_program(file.path()).unwrap();
        prop_assert_eq!(program.len(), data.len());
        prop_assert_eq!(program.as_bytes(), data.as_slice());
    }
}
