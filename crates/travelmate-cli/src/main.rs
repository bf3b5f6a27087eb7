// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use travelmate_core::config::{default_config_path, AppConfig};
use travelmate_core::{Catalog, CategoryFilter, Query, Recommender, RecommenderConfig};

mod render;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the destination catalog (CSV)
    #[arg(short, long, env = "TRAVELMATE_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Path to config.json
    #[arg(long, env = "TRAVELMATE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Extra budget allowed for the fallback list
    #[arg(long, global = true, allow_negative_numbers = true)]
    stretch: Option<f64>,

    /// Maximum fallback destinations
    #[arg(long, global = true)]
    max_fallback: Option<usize>,

    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend destinations for a budget, category and trip length
    Recommend {
        /// Total budget in rupees
        #[arg(short, long, default_value_t = 1500.0)]
        budget: f64,
        /// any, beach, mountain, heritage or "hill station"
        #[arg(short = 't', long = "category", default_value = "any", value_parser = parse_filter)]
        category: CategoryFilter,
        /// Number of travel days
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=10))]
        days: u32,
        #[arg(long, value_enum, default_value_t = View::Cards)]
        view: View,
    },
    /// List catalog destinations with their per-day costs
    List {
        #[arg(short = 't', long = "category", default_value = "any", value_parser = parse_filter)]
        category: CategoryFilter,
    },
    /// Show categories present in the catalog
    Categories,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default config.json (refuses to overwrite)
    Init,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    Table,
    Cards,
    Chart,
    Json,
    Map,
}

fn parse_filter(s: &str) -> Result<CategoryFilter, String> {
    s.parse::<CategoryFilter>().map_err(|e| e.to_string())
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };
    // A logger may already be installed when embedded; not fatal.
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Catalog location: `--catalog` or `TRAVELMATE_CATALOG` (clap merges both),
/// then the config file, then `travel_data.csv`.
fn catalog_path(cli: &Cli, config: &AppConfig) -> PathBuf {
    cli.catalog
        .clone()
        .unwrap_or_else(|| config.catalog_path_or_default())
}

/// Recommender settings from the config file with command-line overrides.
fn effective_settings(cli: &Cli, config: &AppConfig) -> RecommenderConfig {
    let mut settings = config.recommender.clone();
    if let Some(stretch) = cli.stretch {
        settings.stretch = stretch;
    }
    if let Some(max_fallback) = cli.max_fallback {
        settings.max_fallback = max_fallback;
    }
    settings
}

fn open_recommender(cli: &Cli, config: &AppConfig) -> Result<Recommender> {
    let path = catalog_path(cli, config);
    let catalog = Catalog::from_csv_path(&path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
    Ok(Recommender::new(
        catalog.into_shared(),
        effective_settings(cli, config),
    )?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = AppConfig::load_from(&config_path)?;

    match &cli.command {
        Commands::Recommend {
            budget,
            category,
            days,
            view,
        } => {
            let recommender = open_recommender(&cli, &config)?;
            let query = Query::new(*budget, *category, *days)?;
            let result = recommender.recommend(&query)?;

            let out = render::render(*view, &query, &result, recommender.config())?;
            print!("{}", out);
        }
        Commands::List { category } => {
            let recommender = open_recommender(&cli, &config)?;
            print!(
                "{}",
                render::catalog_listing(recommender.catalog(), *category)
            );
        }
        Commands::Categories => {
            let recommender = open_recommender(&cli, &config)?;
            let counts = recommender.catalog().category_counts();
            if counts.is_empty() {
                println!("Catalog is empty.");
            }
            for (label, count) in counts {
                println!("{:<14} {}", label, count);
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let effective = AppConfig {
                    catalog_path: Some(catalog_path(&cli, &config)),
                    recommender: effective_settings(&cli, &config),
                };
                effective.recommender.validate()?;
                println!("# {}", config_path.display());
                println!("{}", serde_json::to_string_pretty(&effective)?);
            }
            ConfigAction::Init => {
                if config_path.exists() {
                    anyhow::bail!("{} already exists", config_path.display());
                }
                AppConfig::default().save_to(&config_path)?;
                println!("Wrote default configuration to {}", config_path.display());
            }
        },
    }

    Ok(())
}
