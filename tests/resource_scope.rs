//! Integration tests for scoped resources over real file I/O.
//!
//! These tests verify that a held resource is released exactly once on every
//! exit path, and that release errors combine with operation errors correctly.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dichotomy::error::ClosingError;
use dichotomy::{resolve, with_resource, BoxError, Closeable, Effect, Resolve, ResourceHolder};

// ============================================================================
// Helpers
// ============================================================================

/// Helper to create a unique temp file path
fn temp_file_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dichotomy_resource_test_{}.txt", name))
}

/// A temp file that removes itself on close and counts how often that happens.
struct ScratchFile {
    path: PathBuf,
    file: File,
    releases: Arc<AtomicUsize>,
}

impl ScratchFile {
    fn create(path: &Path, releases: &Arc<AtomicUsize>) -> io::Result<Self> {
        Ok(ScratchFile {
            path: path.to_path_buf(),
            file: File::options()
                .create(true)
                .truncate(true)
                .read(true)
                .write(true)
                .open(path)?,
            releases: Arc::clone(releases),
        })
    }
}

impl Closeable for ScratchFile {
    type Error = io::Error;

    fn close(self) -> Result<(), io::Error> {
        self.releases.fetch_add(1, Ordering::SeqCst);
        drop(self.file);
        fs::remove_file(&self.path)
    }
}

// ============================================================================
// File I/O
// ============================================================================

#[test]
fn file_is_released_after_successful_use() {
    let path = temp_file_path("success");
    let releases = Arc::new(AtomicUsize::new(0));

    let written: Resolve<usize, io::Error> =
        with_resource(|| ScratchFile::create(&path, &releases)).resolve_closing(|scratch| {
            scratch.file.write_all(b"hello")?;
            scratch.file.flush()?;
            Ok::<_, io::Error>(fs::metadata(&scratch.path)?.len() as usize)
        });

    assert_eq!(written.unwrap_or(0), 5);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
    assert!(!path.exists(), "scratch file should have been removed");
}

#[test]
fn file_is_released_when_operation_fails() {
    let path = temp_file_path("op_failure");
    let releases = Arc::new(AtomicUsize::new(0));

    let outcome: Effect<io::Error> = with_resource(|| ScratchFile::create(&path, &releases))
        .run_effect_closing(|scratch| {
            let mut buf = String::new();
            scratch.file.read_to_string(&mut buf)?;
            if buf.is_empty() {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no header"));
            }
            Ok(())
        });

    let err = outcome.into_result().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
    assert!(!path.exists());
}

#[test]
fn failed_acquisition_skips_operation_and_release() {
    let missing_dir = std::env::temp_dir().join("dichotomy_no_such_dir/nested/file.txt");
    let releases = Arc::new(AtomicUsize::new(0));

    let r: Resolve<(), io::Error> = with_resource(|| ScratchFile::create(&missing_dir, &releases))
        .resolve_closing(|_| -> io::Result<()> { panic!("operation must not run") });

    assert!(r.is_error());
    assert_eq!(releases.load(Ordering::SeqCst), 0);
}

#[test]
fn file_is_released_when_operation_panics() {
    let path = temp_file_path("panic");
    let releases = Arc::new(AtomicUsize::new(0));
    let holder = with_resource(|| ScratchFile::create(&path, &releases));

    let result = panic::catch_unwind(AssertUnwindSafe(move || {
        holder.resolve_closing(|_| -> io::Result<()> { panic!("handler bug") })
    }));

    assert!(result.is_err());
    assert_eq!(releases.load(Ordering::SeqCst), 1);
    assert!(!path.exists());
}

#[test]
fn release_error_surfaces_when_file_already_removed() {
    let path = temp_file_path("double_remove");
    let releases = Arc::new(AtomicUsize::new(0));

    let r: Resolve<(), io::Error> = with_resource(|| ScratchFile::create(&path, &releases))
        .resolve_closing(|scratch| fs::remove_file(&scratch.path));

    let err = r.into_result().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn detailed_closing_reports_the_failing_phase() {
    let path = temp_file_path("detailed");
    let releases = Arc::new(AtomicUsize::new(0));

    let r = with_resource(|| ScratchFile::create(&path, &releases)).resolve_closing_detailed(
        |scratch| -> io::Result<()> {
            fs::remove_file(&scratch.path)?;
            Err(io::Error::new(io::ErrorKind::Other, "checksum mismatch"))
        },
    );

    match r {
        Resolve::Error(ClosingError::Both { operation, release }) => {
            assert_eq!(operation.to_string(), "checksum mismatch");
            assert_eq!(release.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected both phases to fail, got {:?}", other.error()),
    }
}

// ============================================================================
// Chains
// ============================================================================

#[test]
fn resolve_to_resource_to_resolve_chain() {
    let path = temp_file_path("chain");
    let releases = Arc::new(AtomicUsize::new(0));

    let lines: Resolve<usize> = resolve(|| Ok::<_, BoxError>(path.clone()))
        .try_map_to_resource(|p| ScratchFile::create(&p, &releases))
        .resolve_closing(|scratch| {
            writeln!(scratch.file, "a\nb\nc")?;
            Ok::<_, io::Error>(3)
        })
        .map(|n| n * 10);

    assert_eq!(lines.unwrap_or(0), 30);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn buffered_writer_is_flushed_on_release() {
    let path = temp_file_path("buffered");

    let written: Effect<io::Error> = with_resource(|| File::create(&path).map(BufWriter::new))
        .run_effect_closing(|w| w.write_all(b"buffered payload"));

    assert!(written.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "buffered payload");
    fs::remove_file(&path).unwrap();
}

#[test]
fn explicit_release_for_types_without_closeable() {
    let log = Arc::new(std::sync::Mutex::new(Vec::<String>::new()));
    let holder: ResourceHolder<Vec<String>, String> = ResourceHolder::new(Vec::new());

    let count = holder.resolve_closing_with(
        |batch| {
            batch.push("insert".to_string());
            batch.push("commit".to_string());
            Ok::<_, String>(batch.len())
        },
        |batch| {
            log.lock().map_err(|e| e.to_string())?.extend(batch);
            Ok::<_, String>(())
        },
    );

    assert_eq!(count, Resolve::Success(2));
    assert_eq!(*log.lock().unwrap(), vec!["insert", "commit"]);
}
