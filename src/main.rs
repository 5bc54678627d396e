// SPDX-License-Identifier: MPL-2.0
use product_gallery::config;
use product_gallery::scenario::Scenario;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const HELP: &str = "\
Replays a gallery interaction scenario and prints the final state as JSON.

USAGE:
  product_gallery [--config-dir DIR] <scenario.json>

OPTIONS:
  --config-dir DIR   Directory holding gallery.toml
  -h, --help         Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let config_dir: Option<PathBuf> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let Some(scenario_path) = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from)
    else {
        eprint!("{HELP}");
        return ExitCode::FAILURE;
    };

    let (config, warning) = config::load_with_override(config_dir);
    if let Some(warning) = warning {
        eprintln!("warning: {warning}");
    }

    match run(&scenario_path, &config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, config: &config::GalleryConfig) -> product_gallery::Result<String> {
    let json = std::fs::read_to_string(path)?;
    let report = Scenario::from_json(&json)?.run(config)?;
    serde_json::to_string_pretty(&report)
        .map_err(|err| product_gallery::Error::Scenario(err.to_string()))
}
