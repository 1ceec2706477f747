use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use roll_plan_cli::config::RollPlanConfig;
use roll_plan_cli::io;
use roll_plan_cli::io::cli::Cli;
use roll_plan_cli::runner;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RollPlanConfig::default()
        }
        Some(config_file) => io::read_json(&config_file).context("incorrect config file format")?,
    };
    if let Some(seed) = args.seed {
        config.prng_seed = Some(seed);
    }
    if let Some(n_iterations) = args.n_iterations {
        config.sim.n_iterations = n_iterations;
    }

    info!("Successfully parsed RollPlanConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no name")?;

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!(
                "could not create output folder: {}",
                args.output_folder.display()
            )
        })?;
    }

    let ext_plan = io::read_cut_plan(&args.input_file)?;
    let output = runner::run(ext_plan, config)?;

    let report_path = args.output_folder.join(format!("report_{input_file_stem}.json"));
    io::write_json(&output, &report_path)?;

    Ok(())
}
