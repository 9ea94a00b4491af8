//! Command line surface of `transcribe-model`.

use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use transcribe_domain::{allowed_values, enumerations};

use crate::Application;

/// Inspect the Transcribe data model and check request bodies offline
#[derive(Parser, Debug)]
#[command(name = "transcribe-model", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print every operation with its target header
    Operations,

    /// Print the allowed values of an enumeration
    Values {
        /// Enumeration name, e.g. `LanguageCode`
        name: String,
    },

    /// Decode, validate and re-encode a request body
    Check {
        /// Operation name, e.g. `StartTranscriptionJob`
        operation: String,

        /// JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },
}

pub fn execute(app: &Application, command: &Commands) -> Result<String> {
    match command {
        Commands::Operations => Ok(app
            .registry()
            .names()
            .into_iter()
            .filter_map(|name| {
                app.registry()
                    .target(name)
                    .map(|target| format!("{name}\t{target}"))
            })
            .collect::<Vec<_>>()
            .join("\n")),
        Commands::Values { name } => {
            let values = allowed_values(name).ok_or_else(|| {
                let known: Vec<&str> = enumerations().into_iter().map(|(known, _)| known).collect();
                anyhow!("unknown enumeration `{name}`; known: {}", known.join(", "))
            })?;
            Ok(values.join("\n"))
        }
        Commands::Check { operation, input } => {
            let body = read_input(input)?;
            app.check(operation, &body)
                .with_context(|| format!("{operation} request rejected"))
        }
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("reading request from stdin")?;
        return Ok(body);
    }
    std::fs::read_to_string(Path::new(input)).with_context(|| format!("reading {input}"))
}
