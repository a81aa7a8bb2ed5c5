//! blogconf - inspect and validate blog site configuration.

mod cli;

use anyhow::Result;
use blogconf::{config::init_config, logger};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Commands::Init { force, dry } = cli.command {
        return cli::init::write_config(&cli.config, force, dry);
    }

    let (config, source) = cli::load_config(&cli.config)?;
    let config = init_config(config)?;

    match cli.command {
        Commands::Check => cli::check::report(&config, source.as_deref()),
        Commands::Show { all } => print!("{}", cli::show::render(&config, all)),
        Commands::Init { .. } => unreachable!("handled before loading"),
    }

    Ok(())
}
