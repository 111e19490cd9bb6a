// ABOUTME: Fastfood CLI - command-line front end for the menu recommender
// ABOUTME: Lists restaurants and items, shows item details, and prints similar-item recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # List restaurants in the dataset
//! fastfood-cli restaurants
//!
//! # List items, optionally for selected restaurants
//! fastfood-cli items --restaurant "Mcdonalds" --restaurant "Subway"
//!
//! # Show nutrition details for one item
//! fastfood-cli details "Big Mac"
//!
//! # Recommend similar healthy items
//! fastfood-cli recommend "Big Mac" --healthy --top 3
//!
//! # Machine-readable output
//! fastfood-cli --json recommend "Big Mac"
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use fastfood_recommender::config::{LogLevel, ProcessorConfig, RecommenderConfig};
use fastfood_recommender::errors::AppResult;
use fastfood_recommender::logging::LoggingConfig;
use fastfood_recommender::session::RecommenderSession;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use helpers::display::report_error;

#[derive(Parser)]
#[command(
    name = "fastfood-cli",
    about = "Fast-food menu recommender",
    long_about = "Find menu items that are nutritionally similar to one you like, optionally limited to healthy options."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Nutrition CSV path (defaults to FASTFOOD_DATA_PATH or data/fastfood.csv)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List every restaurant in the dataset
    Restaurants,

    /// List menu items
    Items {
        /// Only items from this restaurant (repeatable)
        #[arg(long = "restaurant", short = 'r')]
        restaurants: Vec<String>,
    },

    /// Show nutrition details for an item
    Details {
        /// Exact item name
        item: String,
    },

    /// Recommend items similar to the given one
    Recommend {
        /// Exact item name
        item: String,

        /// Only recommend healthy options (under 500 calories, over 20g protein)
        #[arg(long)]
        healthy: bool,

        /// Number of recommendations (defaults to FASTFOOD_TOP_N or 5)
        #[arg(long, short = 'n')]
        top: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    if let Err(e) = LoggingConfig::from_env().with_level(level).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let json = cli.json;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&mut io::stdout(), &mut io::stderr(), &e, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = RecommenderConfig::from_env()?;
    debug!("{}", config.summary());
    let data_path = cli.data.unwrap_or_else(|| config.data_path.clone());
    debug!(path = %data_path.display(), "Opening dataset");

    let session = RecommenderSession::open(
        &data_path,
        ProcessorConfig::default(),
        config.recommendation_config(),
    )?;

    match cli.command {
        Command::Restaurants => commands::query::restaurants(&session, cli.json),
        Command::Items { restaurants } => commands::query::items(&session, &restaurants, cli.json),
        Command::Details { item } => commands::query::details(&session, &item, cli.json),
        Command::Recommend { item, healthy, top } => {
            commands::query::recommend(&session, &item, healthy, top, cli.json)
        }
    }
}
