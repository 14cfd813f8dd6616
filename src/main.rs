use anyhow::Result;
use clap::Parser;
use console::style;
use log::{info, warn};
use photo_organize::cli::Args;
use photo_organize::component::PhotoOrganizer;
use photo_organize::config::Config;
use photo_organize::init;
use photo_organize::signal::setup_shutdown_signal;
use std::process::ExitCode;

fn run(args: &Args) -> Result<()> {
    let shutdown_signal = setup_shutdown_signal()?;
    let config = Config::new()?;

    let organizer = PhotoOrganizer::new(config, shutdown_signal);
    organizer.run(&args.input_dir, &args.output_dir)?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init::init();

    match run(&args) {
        Ok(()) => {
            info!("Program exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!("Program error: {e:#}");
            eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
