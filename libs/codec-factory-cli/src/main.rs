// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Codec factory CLI
//!
//! Shows what the H.264 hardware factory adapters advertise and which
//! implementation they pick for a given format.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec_factory::{Environment, EnvironmentConfig};

mod commands;

#[derive(Parser)]
#[command(name = "codec-factory")]
#[command(author, version, about = "Inspect the H.264 hardware codec factories", long_about = None)]
struct Cli {
    /// Environment config file (YAML)
    #[arg(long, global = true, value_name = "PATH")]
    env_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Which factory to inspect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FactoryKind {
    Encoder,
    Decoder,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported formats in preference order
    Formats {
        /// Factory to query
        #[arg(long, value_enum, default_value = "encoder")]
        kind: FactoryKind,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show which implementation a format is routed to
    Create {
        /// Factory to query
        #[arg(long, value_enum, default_value = "encoder")]
        kind: FactoryKind,

        /// Codec name (e.g. H264, VP8)
        #[arg(long)]
        name: String,

        /// fmtp parameter as key=value (can be specified multiple times)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn load_environment(path: Option<&PathBuf>) -> Result<Environment> {
    let config = match path {
        Some(path) => EnvironmentConfig::load(path)?,
        None => EnvironmentConfig::default(),
    };
    Environment::from_config(&config).context("Invalid environment config")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let env = load_environment(cli.env_config.as_ref())?;
    tracing::debug!("Using session '{}'", env.session_label());

    match cli.command {
        Commands::Formats { kind, json } => commands::formats::run(kind, json)?,
        Commands::Create {
            kind,
            name,
            params,
            json,
        } => commands::create::run(&env, kind, &name, &params, json)?,
    }

    Ok(())
}
