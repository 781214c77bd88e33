//! Fixed file layout of the desktop template project.
//!
//! The packaging tool expects these names; nothing here is configurable
//! beyond the project root itself.

use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Join `rel` onto `base` and normalize the result lexically, so `..` and
/// `.` segments never reach error messages. An absolute `rel` replaces
/// `base`.
pub fn resolve_path(base: &Path, rel: impl AsRef<Path>) -> PathBuf {
    let joined = base.join(rel);
    match joined.absolutize() {
        Ok(resolved) => resolved.into_owned(),
        Err(_) => joined,
    }
}

/// Where each artifact lives inside the template project.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Layout { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Project descriptor (`package.json`).
    pub fn descriptor(&self) -> PathBuf {
        self.root.join("package.json")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("assets")
    }

    /// Directory the packaging tool bundles as the app's content.
    pub fn site_dir(&self) -> PathBuf {
        self.root.join("dist")
    }

    /// Output of a previous packaging run.
    pub fn packager_output_dir(&self) -> PathBuf {
        self.root.join("out")
    }

    pub fn auto_update_module(&self) -> PathBuf {
        self.root.join("src").join("auto-update.js")
    }

    pub fn update_config(&self) -> PathBuf {
        self.root.join("update-config.json")
    }
}

/// Platform icon formats and their fixed destination names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat {
    Icns,
    Ico,
    Png,
}

impl IconFormat {
    /// Provisioning order.
    pub const ALL: [IconFormat; 3] = [IconFormat::Icns, IconFormat::Ico, IconFormat::Png];

    pub fn file_name(self) -> &'static str {
        match self {
            IconFormat::Icns => "AppIcon.icns",
            IconFormat::Ico => "AppIcon.ico",
            IconFormat::Png => "AppIcon.png",
        }
    }
}
