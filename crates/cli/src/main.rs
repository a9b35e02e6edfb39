mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use wayfarer_catalog::{builtin_catalog, catalog_to_json, load_catalog_json, DEFAULT_CATALOG_SEED};
use wayfarer_core::{
    AccommodationType, ActivityConstraints, Catalog, InMemoryCatalog, InterestCategory,
    PlannerConfig, TimeOfDay, UserPreferences, ANY,
};
use wayfarer_observability::init_tracing;
use wayfarer_service::{CatalogSource, PlannerService};

#[derive(Debug, Parser)]
#[command(name = "wayfarer")]
#[command(about = "Wayfarer travel itinerary planner")]
struct Cli {
    /// JSON catalog to plan against instead of the built-in dataset.
    #[arg(long, env = "WAYFARER_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    #[arg(
        long,
        env = "WAYFARER_CATALOG_SEED",
        default_value_t = DEFAULT_CATALOG_SEED,
        global = true
    )]
    catalog_seed: u64,

    /// JSON planner configuration; omitted fields keep their defaults.
    #[arg(long, env = "WAYFARER_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Plan {
        #[arg(long)]
        origin: String,
        #[arg(long)]
        destination: String,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        #[arg(long)]
        budget: f64,
        #[arg(long, default_value = ANY)]
        transport: String,
        #[arg(long, default_value = ANY)]
        accommodation: String,
        #[arg(long, value_delimiter = ',', required = true)]
        interests: Vec<String>,
        #[arg(long, default_value = "")]
        notes: String,
        #[arg(long, env = "WAYFARER_SEED")]
        seed: Option<u64>,
        #[arg(long, default_value = "USD")]
        currency: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    Destinations,
    Suggest {
        #[arg(long, value_delimiter = ',', required = true)]
        interests: Vec<String>,
        #[arg(long)]
        daily_budget: f64,
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    Activities {
        destination: String,
        #[arg(long, value_delimiter = ',')]
        interests: Vec<String>,
        #[arg(long)]
        time_of_day: Option<String>,
        #[arg(long)]
        max_cost: Option<f64>,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    Transport,
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Debug, Subcommand)]
enum CatalogCommand {
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    Validate {
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    init_tracing("wayfarer_cli");
    let cli = Cli::parse();

    let source = match &cli.catalog {
        Some(path) => CatalogSource::JsonFile(path.clone()),
        None => CatalogSource::Builtin {
            seed: cli.catalog_seed,
        },
    };
    let build_service = || -> Result<PlannerService> {
        let config = load_config(cli.config.as_deref())?;
        PlannerService::from_source(&source, config)
    };

    match cli.command {
        Command::Plan {
            origin,
            destination,
            start,
            end,
            budget,
            transport,
            accommodation,
            interests,
            notes,
            seed,
            currency,
            format,
        } => {
            let prefs = UserPreferences {
                origin,
                destination,
                start_date: start,
                end_date: end,
                budget,
                transportation: Some(transport),
                accommodation: parse_accommodation(&accommodation)?,
                activities: parse_interests(&interests)?,
                notes,
            };

            let itinerary = build_service()?.plan(&prefs, seed)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&itinerary)?),
                OutputFormat::Text => {
                    print!("{}", render::itinerary_report(&prefs, &itinerary, &currency))
                }
            }
        }
        Command::Destinations => {
            let destinations = build_service()?.destinations();
            println!("{}", serde_json::to_string_pretty(&destinations)?);
        }
        Command::Suggest {
            interests,
            daily_budget,
            limit,
        } => {
            let interests = parse_interests(&interests)?;
            let ranked = build_service()?.suggest_destinations(&interests, daily_budget, limit);
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }
        Command::Activities {
            destination,
            interests,
            time_of_day,
            max_cost,
            limit,
        } => {
            let constraints = ActivityConstraints {
                time_of_day: time_of_day.as_deref().map(parse_time_of_day).transpose()?,
                max_cost,
                max_results: limit,
            };
            let interests = parse_interests(&interests)?;
            let activities = build_service()?.activities(&destination, &interests, &constraints)?;
            println!("{}", serde_json::to_string_pretty(&activities)?);
        }
        Command::Transport => {
            let modes = build_service()?.transportation_modes();
            println!("{}", serde_json::to_string_pretty(&modes)?);
        }
        Command::Catalog { command } => match command {
            CatalogCommand::Export { output } => {
                let catalog = match &source {
                    CatalogSource::Builtin { seed } => builtin_catalog(*seed),
                    CatalogSource::JsonFile(path) => load_catalog(path)?,
                };
                let json = catalog_to_json(&catalog)?;
                match output {
                    Some(path) => fs::write(&path, json).with_context(|| {
                        format!("failed writing catalog to {}", path.display())
                    })?,
                    None => println!("{json}"),
                }
            }
            CatalogCommand::Validate { path } => {
                let catalog = load_catalog(&path)?;
                println!(
                    "{}: {} destinations, {} activities, {} accommodations, {} transportation modes",
                    path.display(),
                    catalog.destinations().len(),
                    catalog.activities().len(),
                    catalog.accommodations().len(),
                    catalog.transportation_modes().len(),
                );
            }
        },
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<InMemoryCatalog> {
    load_catalog_json(path)
        .with_context(|| format!("failed loading catalog from {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading planner config {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid planner config in {}", path.display()))
}

fn parse_interests(values: &[String]) -> Result<Vec<InterestCategory>> {
    values
        .iter()
        .filter(|value| !value.trim().is_empty())
        .map(|value| {
            InterestCategory::parse(value)
                .with_context(|| format!("unknown interest category: {value}"))
        })
        .collect()
}

fn parse_accommodation(value: &str) -> Result<Option<AccommodationType>> {
    if value.trim().eq_ignore_ascii_case(ANY) {
        return Ok(None);
    }
    AccommodationType::parse(value)
        .map(Some)
        .with_context(|| format!("unknown accommodation type: {value}"))
}

fn parse_time_of_day(value: &str) -> Result<TimeOfDay> {
    match TimeOfDay::ALL
        .into_iter()
        .find(|period| period.as_str().eq_ignore_ascii_case(value.trim()))
    {
        Some(period) => Ok(period),
        None => bail!("unknown time of day: {value}"),
    }
}
