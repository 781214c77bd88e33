//! The preparation pipeline.
//!
//! ```text
//! validate site ─▶ clear out/ ─▶ package.json ─▶ icons ─▶ dist/ ─▶ auto-update
//! ```
//!
//! Stages run in that fixed order and the first error aborts the rest.
//! The site path is validated before anything is deleted, so a bad input
//! never costs the template its existing packaging input.

use crate::auto_update::{self, AutoUpdate, AutoUpdateError, AutoUpdateOutcome};
use crate::icons::{self, IconError};
use crate::inputs::Inputs;
use crate::metadata::{self, MetadataError, MetadataSummary};
use crate::output;
use crate::site::{self, SiteCopy, SiteError};
use crate::types::{Layout, resolve_path};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepareError {
    #[error(transparent)]
    Site(#[from] SiteError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Icon(#[from] IconError),
    #[error(transparent)]
    AutoUpdate(#[from] AutoUpdateError),
}

/// Whether a failure came from bad inputs or from the project on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    State,
}

impl PrepareError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PrepareError::Site(
                SiteError::NotFound(..) | SiteError::NotADirectory(..) | SiteError::Overlap(..),
            )
            | PrepareError::Icon(IconError::NotFound(_)) => ErrorKind::Configuration,
            _ => ErrorKind::State,
        }
    }
}

/// Everything a successful run changed.
#[derive(Debug, Clone, PartialEq)]
pub struct PrepareReport {
    pub site_source: PathBuf,
    pub metadata: MetadataSummary,
    pub icons: Vec<PathBuf>,
    pub site: SiteCopy,
    pub auto_update: AutoUpdateOutcome,
}

/// Run every stage against the template at `layout`, resolving relative
/// input paths against `workspace`.
pub fn prepare(
    inputs: &Inputs,
    workspace: &Path,
    layout: &Layout,
) -> Result<PrepareReport, PrepareError> {
    let site_source =
        site::check_dir(&resolve_path(workspace, &inputs.site_path)).require("Site path")?;
    let site_target = layout.site_dir();
    site::ensure_disjoint(&site_source, &site_target)?;
    output::print_start(layout.root(), &site_source);

    site::remove_dir_all(&layout.packager_output_dir())?;

    let metadata = metadata::apply_metadata(&layout.descriptor(), inputs)?;
    output::print_metadata(&metadata);

    let icons = icons::provision_icons(
        &inputs.icons,
        workspace,
        &layout.assets_dir(),
        output::print_icon,
    )?;

    let site = site::copy_site(&site_source, &site_target)?;
    output::print_site_copy(&site_source, &site_target, &site);

    let update = AutoUpdate::from_flag(&inputs.auto_update, &inputs.owner, &inputs.repo);
    let config_path = layout.update_config();
    let auto_update =
        auto_update::write_artifacts(&update, &layout.auto_update_module(), &config_path)?;
    output::print_auto_update(&auto_update, &config_path);

    Ok(PrepareReport {
        site_source,
        metadata,
        icons,
        site,
        auto_update,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{Fixture, file_set, inputs_with};
    use std::fs;

    #[test]
    fn full_run_applies_everything() {
        let fx = Fixture::new();
        fx.write_site(&[("index.html", "<h1>hi</h1>"), ("assets/logo.png", "png")]);
        fx.write_workspace_file("branding/icon.icns", "icns bytes");
        let inputs = inputs_with(&[
            ("APP_NAME", "My App"),
            ("PRODUCT_NAME", "My App"),
            ("APP_VERSION", "v1.2.0"),
            ("ICON_ICNS_PATH", "branding/icon.icns"),
            ("AUTO_UPDATE", "true"),
            ("GITHUB_OWNER", "acme"),
            ("GITHUB_REPO", "viewer"),
        ]);
        let layout = fx.layout();

        let report = prepare(&inputs, fx.workspace(), &layout).unwrap();

        assert_eq!(report.metadata.name, "my-app");
        assert_eq!(report.metadata.version.as_deref(), Some("1.2.0"));
        assert_eq!(report.icons, [layout.assets_dir().join("AppIcon.icns")]);
        assert_eq!(
            file_set(&layout.site_dir()).into_iter().collect::<Vec<_>>(),
            ["assets/logo.png", "index.html"]
        );
        assert!(layout.update_config().exists());
        assert!(
            fs::read_to_string(layout.auto_update_module())
                .unwrap()
                .contains("repo: 'acme/viewer'")
        );
    }

    #[test]
    fn missing_site_is_configuration_error_and_touches_nothing() {
        let fx = Fixture::new();
        let layout = fx.layout();
        fs::create_dir_all(layout.site_dir()).unwrap();
        fs::write(layout.site_dir().join("keep.html"), "old").unwrap();
        fs::create_dir_all(layout.packager_output_dir()).unwrap();

        let err = prepare(&inputs_with(&[]), fx.workspace(), &layout).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().starts_with("Site path not found: "));
        assert!(layout.site_dir().join("keep.html").exists());
        assert!(layout.packager_output_dir().exists());
        assert_eq!(
            fs::read_to_string(layout.descriptor()).unwrap(),
            crate::test_helpers::TEMPLATE_PACKAGE_JSON
        );
    }

    #[test]
    fn stale_packager_output_is_removed() {
        let fx = Fixture::new();
        fx.write_site(&[("index.html", "x")]);
        let layout = fx.layout();
        fs::create_dir_all(layout.packager_output_dir().join("make")).unwrap();

        prepare(&inputs_with(&[]), fx.workspace(), &layout).unwrap();

        assert!(!layout.packager_output_dir().exists());
    }

    #[test]
    fn missing_icon_is_configuration_error() {
        let fx = Fixture::new();
        fx.write_site(&[("index.html", "x")]);
        let inputs = inputs_with(&[("ICON_PNG_PATH", "nope.png")]);

        let err = prepare(&inputs, fx.workspace(), &fx.layout()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err.to_string(),
            format!("Icon file not found: {}", fx.workspace().join("nope.png").display())
        );
    }

    #[test]
    fn malformed_descriptor_is_state_error() {
        let fx = Fixture::new();
        fx.write_site(&[("index.html", "x")]);
        let layout = fx.layout();
        fs::write(layout.descriptor(), "not json").unwrap();

        let err = prepare(&inputs_with(&[]), fx.workspace(), &layout).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::State);
        assert!(!layout.site_dir().exists());
    }

    #[test]
    fn site_inside_project_input_is_rejected() {
        let fx = Fixture::new();
        let layout = fx.layout();
        fs::create_dir_all(layout.site_dir()).unwrap();
        fs::write(layout.site_dir().join("index.html"), "x").unwrap();

        // Workspace and project are the same directory, so SITE_PATH=dist
        // points at the packaging input itself.
        let err = prepare(&inputs_with(&[]), layout.root(), &layout).unwrap_err();

        assert!(matches!(err, PrepareError::Site(SiteError::Overlap(..))));
        assert!(layout.site_dir().join("index.html").exists());
    }

    #[test]
    fn site_containing_project_input_is_rejected_before_any_change() {
        let fx = Fixture::new();
        let layout = fx.layout();
        fs::write(layout.root().join("index.html"), "x").unwrap();
        fs::create_dir_all(layout.packager_output_dir()).unwrap();

        // SITE_PATH=. with the project as workspace: dist/ lives inside the site.
        let inputs = inputs_with(&[("SITE_PATH", "."), ("APP_NAME", "Renamed")]);
        let err = prepare(&inputs, layout.root(), &layout).unwrap_err();

        assert!(matches!(err, PrepareError::Site(SiteError::Overlap(..))));
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(!layout.site_dir().exists());
        assert!(layout.packager_output_dir().exists());
        assert_eq!(
            fs::read_to_string(layout.descriptor()).unwrap(),
            crate::test_helpers::TEMPLATE_PACKAGE_JSON
        );
    }

    #[test]
    fn missing_site_message_shows_resolved_path() {
        let fx = Fixture::new();
        let inputs = inputs_with(&[("SITE_PATH", "./build/../web")]);

        let err = prepare(&inputs, fx.workspace(), &fx.layout()).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Site path not found: {}", fx.workspace().join("web").display())
        );
    }
}
