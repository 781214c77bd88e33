//! Progress output for the preparation pipeline.
//!
//! Each stage has a `format_*` function returning the lines to show, and a
//! `print_*` wrapper that writes them to stdout. Format functions are pure
//! so the wording can be tested without capturing stdout.
//!
//! ```text
//! ==> Preparing /work/template from site /github/workspace/dist
//! Metadata applied -> name: my-app, productName: My App, version: 1.2.0, author: Ada
//! Icon updated: /work/template/assets/AppIcon.png
//! Copied static site from /github/workspace/dist into /work/template/dist (12 files, 1 skipped)
//! Auto-update module generated with update-electron-app
//! Update config generated: {"provider":"github","owner":"acme","repo":"viewer"}
//! ```

use crate::auto_update::AutoUpdateOutcome;
use crate::metadata::MetadataSummary;
use crate::site::SiteCopy;
use std::path::Path;

pub fn format_start(project: &Path, site: &Path) -> String {
    format!(
        "==> Preparing {} from site {}",
        project.display(),
        site.display()
    )
}

pub fn format_metadata(summary: &MetadataSummary) -> String {
    let or_unset = |v: &Option<String>| v.clone().unwrap_or_else(|| "(unset)".to_string());
    format!(
        "Metadata applied -> name: {}, productName: {}, version: {}, author: {}",
        summary.name,
        or_unset(&summary.product_name),
        or_unset(&summary.version),
        summary.author.as_deref().unwrap_or("unchanged"),
    )
}

pub fn format_icon(destination: &Path) -> String {
    format!("Icon updated: {}", destination.display())
}

pub fn format_site_copy(source: &Path, destination: &Path, copy: &SiteCopy) -> String {
    let files = if copy.files == 1 { "file" } else { "files" };
    let mut line = format!(
        "Copied static site from {} into {} ({} {}",
        source.display(),
        destination.display(),
        copy.files,
        files
    );
    if copy.skipped > 0 {
        line.push_str(&format!(", {} skipped", copy.skipped));
    }
    line.push(')');
    line
}

pub fn format_auto_update(outcome: &AutoUpdateOutcome, config_path: &Path) -> Vec<String> {
    match outcome {
        AutoUpdateOutcome::Disabled { removed_config } => {
            let mut lines = vec!["Auto-update disabled, wrote stub module".to_string()];
            if *removed_config {
                lines.push(format!("Removed stale update config: {}", config_path.display()));
            }
            lines
        }
        AutoUpdateOutcome::Enabled { config_json } => {
            // One-line form of the pretty JSON written to disk.
            let compact = serde_json::from_str::<serde_json::Value>(config_json)
                .map(|v| v.to_string())
                .unwrap_or_else(|_| config_json.clone());
            vec![
                "Auto-update module generated with update-electron-app".to_string(),
                format!("Update config generated: {compact}"),
            ]
        }
    }
}

pub fn print_start(project: &Path, site: &Path) {
    println!("{}", format_start(project, site));
}

pub fn print_metadata(summary: &MetadataSummary) {
    println!("{}", format_metadata(summary));
}

pub fn print_icon(destination: &Path) {
    println!("{}", format_icon(destination));
}

pub fn print_site_copy(source: &Path, destination: &Path, copy: &SiteCopy) {
    println!("{}", format_site_copy(source, destination, copy));
}

pub fn print_auto_update(outcome: &AutoUpdateOutcome, config_path: &Path) {
    for line in format_auto_update(outcome, config_path) {
        println!("{}", line);
    }
}
