//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and validate blog site configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: blog.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "blog.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the configuration
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved configuration
    #[command(visible_alias = "s")]
    Show {
        /// List inactive social links too
        #[arg(short, long)]
        all: bool,
    },

    /// Write a commented blog.toml with the built-in values
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_all() {
        let cli = Cli::try_parse_from(["blogconf", "show", "--all"]).unwrap();
        assert!(matches!(cli.command, Commands::Show { all: true }));
        assert_eq!(cli.config, PathBuf::from("blog.toml"));
    }

    #[test]
    fn test_parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["blogconf", "check", "-C", "site/blog.toml", "-v"]).unwrap();
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.config, PathBuf::from("site/blog.toml"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_init_alias() {
        let cli = Cli::try_parse_from(["blogconf", "i", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Init {
                force: true,
                dry: false
            }
        ));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
