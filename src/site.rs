//! Site directory validation and replacement.
//!
//! The packaging input directory is wiped and rebuilt from the caller's
//! pre-built site on every run, which makes the copy idempotent but also
//! destructive. [`check_dir`] therefore has to pass before [`copy_site`]
//! is allowed anywhere near the destination.
//!
//! OS noise files ([`NOISE_FILES`]) are skipped at every depth.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Filenames never copied into the packaging input.
pub const NOISE_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("{0} not found: {1}")]
    NotFound(String, PathBuf),
    #[error("{0} must be a directory: {1}")]
    NotADirectory(String, PathBuf),
    #[error("Site path {0} and packaging input directory {1} contain one another")]
    Overlap(PathBuf, PathBuf),
    #[error("Cannot remove {0}: {1}")]
    Remove(PathBuf, #[source] io::Error),
    #[error("Cannot copy {0}: {1}")]
    Copy(PathBuf, #[source] io::Error),
    #[error("Cannot walk site directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Outcome of looking at a path that is supposed to be a directory.
#[derive(Debug, Clone, PartialEq)]
pub enum DirCheck {
    Found(PathBuf),
    NotFound(PathBuf),
    NotADirectory(PathBuf),
}

impl DirCheck {
    /// Turn anything but [`DirCheck::Found`] into an error naming `label`.
    pub fn require(self, label: &str) -> Result<PathBuf, SiteError> {
        match self {
            DirCheck::Found(path) => Ok(path),
            DirCheck::NotFound(path) => Err(SiteError::NotFound(label.to_string(), path)),
            DirCheck::NotADirectory(path) => {
                Err(SiteError::NotADirectory(label.to_string(), path))
            }
        }
    }
}

/// Classify `path` without failing.
pub fn check_dir(path: &Path) -> DirCheck {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => DirCheck::Found(path.to_path_buf()),
        Ok(_) => DirCheck::NotADirectory(path.to_path_buf()),
        Err(_) => DirCheck::NotFound(path.to_path_buf()),
    }
}

/// Reject a source and destination that contain one another. A source
/// inside the destination is deleted by the wipe before it is read; a
/// destination inside the source is walked while it is being filled.
pub fn ensure_disjoint(source: &Path, destination: &Path) -> Result<(), SiteError> {
    let source_abs = absolute(source);
    let dest_abs = absolute(destination);
    if source_abs.starts_with(&dest_abs) || dest_abs.starts_with(&source_abs) {
        return Err(SiteError::Overlap(source_abs, dest_abs));
    }
    Ok(())
}

/// Canonical form of `path`, falling back to its canonical parent when the
/// path itself does not exist yet.
fn absolute(path: &Path) -> PathBuf {
    if let Ok(p) = fs::canonicalize(path) {
        return p;
    }
    match (path.parent().map(fs::canonicalize), path.file_name()) {
        (Some(Ok(parent)), Some(name)) => parent.join(name),
        _ => path.to_path_buf(),
    }
}

/// What [`copy_site`] did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteCopy {
    pub files: usize,
    pub skipped: usize,
}

fn is_noise(name: &std::ffi::OsStr) -> bool {
    NOISE_FILES.iter().any(|n| name == *n)
}

/// Remove a directory tree; missing is not an error.
pub fn remove_dir_all(path: &Path) -> Result<(), SiteError> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SiteError::Remove(path.to_path_buf(), e)),
    }
}

/// Replace `destination` with a filtered copy of `source`.
pub fn copy_site(source: &Path, destination: &Path) -> Result<SiteCopy, SiteError> {
    ensure_disjoint(source, destination)?;
    remove_dir_all(destination)?;
    fs::create_dir_all(destination).map_err(|e| SiteError::Copy(destination.to_path_buf(), e))?;

    let mut files = 0;
    let mut skipped = 0;
    let walker = WalkDir::new(source)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            if is_noise(entry.file_name()) {
                log::debug!("skipped {}", entry.path().display());
                skipped += 1;
                false
            } else {
                true
            }
        });

    for entry in walker {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = destination.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| SiteError::Copy(entry.path().to_path_buf(), e))?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|e| SiteError::Copy(entry.path().to_path_buf(), e))?;
            log::debug!("copied {}", rel.display());
            files += 1;
        }
    }

    Ok(SiteCopy { files, skipped })
}
