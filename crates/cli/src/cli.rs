// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::telemetry::setup_simple_tracing;
use crate::{check, print_env};
use anyhow::Result;
use bridge_config::load_from_env;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "bridge")]
#[command(about = "Bootstrap CLI for the token bridge front-end configuration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `bridge -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the environment and report the resolved configuration
    Check,
    /// Print the resolved configuration as KEY=value lines
    PrintEnv,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub async fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());

        // The load happens exactly once; the resolved configuration is
        // passed down explicitly from here on.
        let config = load_from_env().await?;
        info!(chains = config.chains().len(), "Configuration loaded");

        match self.command {
            Commands::Check => check::execute(&config).await?,
            Commands::PrintEnv => print_env::execute(&config).await?,
        }

        Ok(())
    }
}
