use anyhow::Result;
use clap::Parser;
use transcribe_configuration::{load_config, setup_logging};
use transcribe_setup::cli::{execute, Cli};
use transcribe_setup::Application;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;
    setup_logging(&config.logging);
    let app = Application::new(config)?;
    println!("{}", execute(&app, &cli.command)?);
    Ok(())
}
