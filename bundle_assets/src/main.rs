/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

const USAGE: &str = "Usage: bundle_assets <assets_dir> <output_file>";

/// Embed a directory of PNG assets into a C++ header
// no flags: `--help` or `-icons` are taken as paths like any other argument
#[derive(Parser)]
#[command(name = "bundle_assets", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Directory holding the `<color>_<piece>.png` files
    #[arg(allow_hyphen_values = true)]
    assets_dir: PathBuf,
    /// Header to create or overwrite
    #[arg(allow_hyphen_values = true)]
    output_file: PathBuf,
    #[arg(hide = true, allow_hyphen_values = true)]
    extra: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let Ok(cli) = Cli::try_parse() else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if !cli.extra.is_empty() {
        warn!("ignoring extra arguments: {}", cli.extra.join(" "));
    }

    let report = bundle_assets::bundle(&cli.assets_dir, &cli.output_file).with_context(|| {
        format!(
            "failed to bundle {} into {}",
            cli.assets_dir.display(),
            cli.output_file.display()
        )
    })?;

    info!(
        "wrote {} assets ({} keyed, {} bytes) to {}",
        report.assets,
        report.keyed,
        report.bytes,
        cli.output_file.display()
    );
    Ok(())
}
