use clap::Parser;
use desktop_site_prep::inputs::Inputs;
use desktop_site_prep::prepare::prepare;
use desktop_site_prep::types::Layout;
use path_absolutize::Absolutize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "desktop-site-prep")]
#[command(version, about = "Prepare a desktop app template for packaging a static site")]
#[command(long_about = "\
Prepare a desktop app template for packaging a static site

All inputs come from environment variables (empty means unset):

  SITE_PATH          Pre-built site directory (default: dist)
  APP_NAME           Package name, slugged to [a-z0-9._-]
  PRODUCT_NAME       Display name
  APP_VERSION        Version; a leading v is stripped
  APP_DESCRIPTION    Description
  AUTHOR             Author name
  ICON_ICNS_PATH     macOS icon     → assets/AppIcon.icns
  ICON_ICO_PATH      Windows icon   → assets/AppIcon.ico
  ICON_PNG_PATH      Linux icon     → assets/AppIcon.png
  AUTO_UPDATE        \"true\" generates an updating src/auto-update.js
  GITHUB_OWNER       Release owner for auto-update
  GITHUB_REPO        Release repository for auto-update
  GITHUB_WORKSPACE   Base for relative paths (default: current directory)")]
struct Cli {
    /// Template project to rewrite
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Base directory for relative site and icon paths (overrides GITHUB_WORKSPACE)
    #[arg(long)]
    workspace: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let inputs = Inputs::from_env();
    let workspace = cli
        .workspace
        .or_else(|| inputs.workspace.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let workspace = match workspace.absolutize() {
        Ok(dir) => dir.into_owned(),
        Err(e) => {
            eprintln!("Error: cannot resolve workspace {}: {e}", workspace.display());
            return ExitCode::FAILURE;
        }
    };
    let layout = Layout::new(cli.project_dir);

    match prepare(&inputs, &workspace, &layout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?} error: {e:?}", e.kind());
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
