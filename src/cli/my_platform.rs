use std::path::PathBuf;

use starter_kit::config::DEFAULT_DIRECTORY_NAME;
use starter_kit::{ScaffoldConfig, ScaffoldSpec};

use super::Format;

pub(super) fn run(
    directory_name: Option<String>,
    skip_install: bool,
    skip_git: bool,
    format: Format,
) {
    let mut config = ScaffoldConfig::from_env();
    config.skip_install = skip_install;
    config.skip_git = skip_git;

    let spec = ScaffoldSpec {
        directory_name: directory_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_DIRECTORY_NAME.to_string()),
        working_dir: PathBuf::from("."),
        config,
    };

    match starter_kit::scaffold(&spec) {
        Ok(report) => match format {
            Format::Text => {
                if report.dependencies_installed == Some(false) {
                    eprintln!(
                        "warning: dependencies were not installed; run `{} install` in {}",
                        spec.config.package_manager,
                        report.project_dir.display()
                    );
                }
                println!("Created platform at {}", report.project_dir.display());
            }
            Format::Json => match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("starter-kit my-platform: {e}");
                    std::process::exit(1);
                }
            },
        },
        Err(e) => {
            eprintln!("starter-kit my-platform: {e}");
            std::process::exit(1);
        }
    }
}
