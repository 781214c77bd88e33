//! Shared test utilities: input bundles from literal pairs and a throwaway
//! template project on disk.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let fx = Fixture::new();
//! fx.write_site(&[("index.html", "<h1>hi</h1>"), ("assets/logo.png", "png")]);
//! let inputs = inputs_with(&[("APP_NAME", "My App")]);
//! prepare(&inputs, fx.workspace(), &fx.layout()).unwrap();
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::inputs::Inputs;
use crate::types::Layout;

/// Template descriptor used by [`Fixture::new`].
pub const TEMPLATE_PACKAGE_JSON: &str = r#"{
  "name": "site-shell",
  "productName": "Site Shell",
  "version": "1.0.0",
  "description": "Template desktop shell",
  "main": "src/main.js",
  "author": {
    "name": "Template Author",
    "email": "template@example.com"
  }
}
"#;

/// Build an [`Inputs`] as if only `pairs` were set in the environment.
pub fn inputs_with(pairs: &[(&str, &str)]) -> Inputs {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Inputs::resolve(move |key| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
}

/// A workspace directory plus a template project directory, both temporary.
pub struct Fixture {
    workspace: TempDir,
    project: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let fx = Fixture {
            workspace: TempDir::new().unwrap(),
            project: TempDir::new().unwrap(),
        };
        let root = fx.project.path();
        fs::write(root.join("package.json"), TEMPLATE_PACKAGE_JSON).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("assets/AppIcon.png"), "template png").unwrap();
        fx
    }

    pub fn workspace(&self) -> &Path {
        self.workspace.path()
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.project.path())
    }

    /// Write files under `<workspace>/dist`, creating parents.
    pub fn write_site(&self, files: &[(&str, &str)]) {
        write_tree(&self.workspace().join("dist"), files);
    }

    /// Write a file under the workspace, creating parents.
    pub fn write_workspace_file(&self, rel: &str, content: &str) {
        write_tree(self.workspace(), &[(rel, content)]);
    }
}

pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Relative paths of every file under `root`, `/`-separated and sorted.
pub fn file_set(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}
