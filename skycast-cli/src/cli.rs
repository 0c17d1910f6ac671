use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use skycast_core::{Config, ForecastEntry, HistoryStore, WeatherService};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City forecast CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key used for geocoding and forecasts.
    Configure,

    /// Show the current weather and up to 5 daily forecasts for a city.
    Forecast {
        /// City name, e.g. "Chicago".
        city: String,

        /// Print the forecast sequence as JSON instead of rows.
        #[arg(long)]
        json: bool,
    },

    /// Inspect or edit the persisted search history.
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// List previously searched cities.
    List,

    /// Remove one history entry by id.
    Remove {
        /// Record id, as printed by `history list`.
        id: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Forecast { city, json } => forecast(&city, json).await,
            Command::History { action } => history(action),
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    cfg.api_key = Some(api_key);
    cfg.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn forecast(city: &str, json: bool) -> anyhow::Result<()> {
    // Input validation happens here; core assumes a non-empty query.
    let city = city.trim();
    if city.is_empty() {
        bail!("City name must not be empty");
    }

    let cfg = Config::load()?;
    let api_key = cfg.require_api_key()?;

    let service = WeatherService::new(cfg.base_url(), api_key);
    let entries = service.get_forecast(city).await?;

    let store = HistoryStore::new(cfg.history_file_path()?);
    store.add(city)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            print_entry(entry);
        }
    }

    Ok(())
}

fn print_entry(entry: &ForecastEntry) {
    println!(
        "{}  {}  {:>4}°F  wind {} mph  humidity {}%  {}",
        entry.date, entry.city, entry.temp_f, entry.wind_mph, entry.humidity_pct, entry.description
    );
}

fn history(action: HistoryAction) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let store = HistoryStore::new(cfg.history_file_path()?);

    match action {
        HistoryAction::List => {
            let records = store.list();
            if records.is_empty() {
                println!("No search history yet.");
            }
            for record in records {
                println!("{}  {}", record.id, record.name);
            }
        }
        HistoryAction::Remove { id } => {
            if store.remove(&id)? {
                println!("Removed history entry {id}");
            } else {
                bail!("No history entry with id '{id}'");
            }
        }
    }

    Ok(())
}
