//! Icon provisioning.
//!
//! Each platform format is optional and independent. A missing input keeps
//! the template's icon; a provided input must point at an existing file.

use crate::inputs::IconInputs;
use crate::types::{IconFormat, resolve_path};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Icon file not found: {0}")]
    NotFound(PathBuf),
    #[error("Cannot copy icon {0} to {1}: {2}")]
    Copy(PathBuf, PathBuf, #[source] std::io::Error),
}

impl IconInputs {
    pub fn get(&self, format: IconFormat) -> &str {
        match format {
            IconFormat::Icns => &self.icns,
            IconFormat::Ico => &self.ico,
            IconFormat::Png => &self.png,
        }
    }
}

/// Copy one icon if `source` is non-empty. Returns the destination written.
pub fn copy_icon(
    source: &str,
    format: IconFormat,
    workspace: &Path,
    assets_dir: &Path,
) -> Result<Option<PathBuf>, IconError> {
    if source.is_empty() {
        return Ok(None);
    }
    let resolved = resolve_path(workspace, source);
    if !resolved.is_file() {
        return Err(IconError::NotFound(resolved));
    }
    let destination = assets_dir.join(format.file_name());
    fs::create_dir_all(assets_dir)
        .and_then(|_| fs::copy(&resolved, &destination))
        .map_err(|e| IconError::Copy(resolved.clone(), destination.clone(), e))?;
    Ok(Some(destination))
}

/// Copy every provided icon, in [`IconFormat::ALL`] order, calling
/// `on_copied` after each one.
pub fn provision_icons(
    icons: &IconInputs,
    workspace: &Path,
    assets_dir: &Path,
    mut on_copied: impl FnMut(&Path),
) -> Result<Vec<PathBuf>, IconError> {
    let mut written = Vec::new();
    for format in IconFormat::ALL {
        if let Some(dest) = copy_icon(icons.get(format), format, workspace, assets_dir)? {
            on_copied(&dest);
            written.push(dest);
        }
    }
    Ok(written)
}
