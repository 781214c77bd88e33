//! Configuration bundle resolved once at startup.
//!
//! Every value comes from a named environment key. Resolution is written
//! against a lookup function rather than `std::env` directly, so the
//! pipeline and its tests see the same [`Inputs`] struct without touching
//! process state.
//!
//! | Key | Field | Default |
//! |-----|-------|---------|
//! | `SITE_PATH` | `site_path` | `dist` |
//! | `APP_NAME` | `app_name` | |
//! | `PRODUCT_NAME` | `product_name` | |
//! | `APP_VERSION` | `version` (normalized) | |
//! | `APP_DESCRIPTION` | `description` | |
//! | `AUTHOR` | `author` | |
//! | `ICON_ICNS_PATH` / `ICON_ICO_PATH` / `ICON_PNG_PATH` | `icons` | |
//! | `AUTO_UPDATE` | `auto_update` | `false` |
//! | `GITHUB_OWNER` / `GITHUB_REPO` | `owner` / `repo` | |
//! | `GITHUB_WORKSPACE` | `workspace` | none |

use crate::naming::normalize_version;
use std::path::PathBuf;

pub const SITE_PATH: &str = "SITE_PATH";
pub const APP_NAME: &str = "APP_NAME";
pub const PRODUCT_NAME: &str = "PRODUCT_NAME";
pub const APP_VERSION: &str = "APP_VERSION";
pub const APP_DESCRIPTION: &str = "APP_DESCRIPTION";
pub const AUTHOR: &str = "AUTHOR";
pub const ICON_ICNS_PATH: &str = "ICON_ICNS_PATH";
pub const ICON_ICO_PATH: &str = "ICON_ICO_PATH";
pub const ICON_PNG_PATH: &str = "ICON_PNG_PATH";
pub const AUTO_UPDATE: &str = "AUTO_UPDATE";
pub const GITHUB_OWNER: &str = "GITHUB_OWNER";
pub const GITHUB_REPO: &str = "GITHUB_REPO";
pub const GITHUB_WORKSPACE: &str = "GITHUB_WORKSPACE";

/// Icon source paths, one per platform format. Empty means "leave the
/// template's icon alone".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconInputs {
    pub icns: String,
    pub ico: String,
    pub png: String,
}

/// All preparation inputs. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub site_path: String,
    pub app_name: String,
    pub product_name: String,
    /// Already stripped of a leading `v`.
    pub version: String,
    pub description: String,
    pub author: String,
    pub icons: IconInputs,
    /// Raw flag. Only the exact string `"true"` enables auto-update.
    pub auto_update: String,
    pub owner: String,
    pub repo: String,
    pub workspace: Option<PathBuf>,
}

/// Resolve a single key: the trimmed value, or `default` when the key is
/// unset or empty after trimming.
pub fn input<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

impl Inputs {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary key lookup.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let workspace = input(&lookup, GITHUB_WORKSPACE, "");
        Inputs {
            site_path: input(&lookup, SITE_PATH, "dist"),
            app_name: input(&lookup, APP_NAME, ""),
            product_name: input(&lookup, PRODUCT_NAME, ""),
            version: normalize_version(&input(&lookup, APP_VERSION, "")).to_string(),
            description: input(&lookup, APP_DESCRIPTION, ""),
            author: input(&lookup, AUTHOR, ""),
            icons: IconInputs {
                icns: input(&lookup, ICON_ICNS_PATH, ""),
                ico: input(&lookup, ICON_ICO_PATH, ""),
                png: input(&lookup, ICON_PNG_PATH, ""),
            },
            auto_update: input(&lookup, AUTO_UPDATE, "false"),
            owner: input(&lookup, GITHUB_OWNER, ""),
            repo: input(&lookup, GITHUB_REPO, ""),
            workspace: (!workspace.is_empty()).then(|| PathBuf::from(workspace)),
        }
    }
}
