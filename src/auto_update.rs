//! Auto-update artifact generation.
//!
//! The packaged app loads `src/auto-update.js` at runtime, long after this
//! tool has exited, so the enabled/disabled choice has to be baked into the
//! file itself. The packaging config reads `update-config.json`, which must
//! exist exactly when auto-update is enabled.
//!
//! Rendering is pure ([`AutoUpdate::render_module`],
//! [`AutoUpdate::render_config`]); [`write_artifacts`] is the only part
//! that touches disk.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How often the packaged app polls for releases.
pub const UPDATE_INTERVAL: &str = "1 hour";

const STUB_MODULE: &str = "// Auto-update is disabled
module.exports = {
  enabled: false,
  init: () => {},
};
";

#[derive(Error, Debug)]
pub enum AutoUpdateError {
    #[error("Cannot write {0}: {1}")]
    Write(PathBuf, #[source] io::Error),
    #[error("Cannot remove {0}: {1}")]
    Remove(PathBuf, #[source] io::Error),
    #[error("Cannot serialize update config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AutoUpdate {
    Disabled,
    Enabled { owner: String, repo: String },
}

/// Release feed descriptor consumed by the packaging config.
#[derive(Debug, Serialize)]
pub struct UpdateConfig<'a> {
    pub provider: &'static str,
    pub owner: &'a str,
    pub repo: &'a str,
}

/// Which artifacts ended up on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum AutoUpdateOutcome {
    /// Stub written; `removed_config` is true if a stale config was deleted.
    Disabled { removed_config: bool },
    Enabled { config_json: String },
}

impl AutoUpdate {
    /// Only the exact flag value `"true"` enables auto-update.
    pub fn from_flag(flag: &str, owner: &str, repo: &str) -> Self {
        if flag == "true" {
            AutoUpdate::Enabled {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }
        } else {
            AutoUpdate::Disabled
        }
    }

    pub fn render_module(&self) -> String {
        match self {
            AutoUpdate::Disabled => STUB_MODULE.to_string(),
            AutoUpdate::Enabled { owner, repo } => format!(
                "const updateElectronApp = require('update-electron-app');

module.exports = {{
  enabled: true,
  init: () => {{
    updateElectronApp({{
      repo: '{owner}/{repo}',
      updateInterval: '{UPDATE_INTERVAL}',
    }});
  }},
}};
"
            ),
        }
    }

    pub fn update_config(&self) -> Option<UpdateConfig<'_>> {
        match self {
            AutoUpdate::Disabled => None,
            AutoUpdate::Enabled { owner, repo } => Some(UpdateConfig {
                provider: "github",
                owner,
                repo,
            }),
        }
    }

    /// Pretty JSON for `update-config.json`, or `None` when disabled.
    pub fn render_config(&self) -> Result<Option<String>, serde_json::Error> {
        self.update_config()
            .map(|c| serde_json::to_string_pretty(&c))
            .transpose()
    }
}

/// Write the module and write or remove the config file.
pub fn write_artifacts(
    update: &AutoUpdate,
    module_path: &Path,
    config_path: &Path,
) -> Result<AutoUpdateOutcome, AutoUpdateError> {
    match update {
        AutoUpdate::Enabled { owner, repo } if owner.is_empty() || repo.is_empty() => {
            log::warn!("GitHub owner/repo not provided, auto-update may not work correctly");
        }
        _ => {}
    }

    write_file(module_path, &update.render_module())?;

    match update.render_config()? {
        Some(json) => {
            write_file(config_path, &json)?;
            Ok(AutoUpdateOutcome::Enabled { config_json: json })
        }
        None => {
            let removed_config = match fs::remove_file(config_path) {
                Ok(()) => true,
                Err(e) if e.kind() == io::ErrorKind::NotFound => false,
                Err(e) => return Err(AutoUpdateError::Remove(config_path.to_path_buf(), e)),
            };
            Ok(AutoUpdateOutcome::Disabled { removed_config })
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), AutoUpdateError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AutoUpdateError::Write(path.to_path_buf(), e))?;
    }
    fs::write(path, content).map_err(|e| AutoUpdateError::Write(path.to_path_buf(), e))
}
