//! Price Engine Binary
//!
//! Command-line front end over the price engine library.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin price-engine -- normalize "€ 1.234,56" --locale EU
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (overrides `observability.logging.level`)
//! - Any `${VAR}` referenced from the config file

mod cli;

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use price_engine::config::{Config, PersistenceBackend, load_config};
use price_engine::telemetry::init_telemetry;
use price_engine::{
    CandidateSource, DropSignalDto, DuckDbPriceHistoryRepository, ExtractionResolver,
    InMemoryPriceHistoryRepository, NormalizeVariantsUseCase, ObservationDto,
    PriceHistoryRepository, RegionalAuditUseCase, RegionalQuote, ResolverOptions, SubjectId,
    TrackPriceUseCase, VariantRow, extract_clean_price, normalize, resolve_currency, scrub_noise,
};

use crate::cli::{Cli, Command, ExtractionArgs};

/// History store chosen by configuration.
type DynHistoryRepository = dyn PriceHistoryRepository;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_cli_config(cli.config.as_deref())?;

    init_telemetry(&config.observability.logging)?;

    let output = run(cli.command, &config).await?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}

fn load_cli_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let path = path.to_string_lossy();
            load_config(Some(&*path)).with_context(|| format!("loading {path}"))
        }
        None if Path::new("config.yaml").exists() => {
            load_config(None).context("loading config.yaml")
        }
        None => Ok(Config::default()),
    }
}

async fn run(command: Command, config: &Config) -> Result<serde_json::Value> {
    match command {
        Command::Normalize { raw, locale } => {
            let hint = locale.unwrap_or(config.extraction.locale_hint);
            let price = normalize(&raw, hint)?;
            Ok(json!({ "raw": raw, "locale_hint": hint, "price": price }))
        }

        Command::Scrub { text, noise_only } => {
            if noise_only {
                return Ok(json!({ "scrubbed": scrub_noise(&text) }));
            }
            let price = extract_clean_price(&text)?;
            Ok(json!({ "text": text, "price": price }))
        }

        Command::Currency { text, country } => {
            let country = country.or_else(|| config.extraction.proxy_country.clone());
            let currency = resolve_currency(&text, country.as_deref());
            Ok(json!({ "text": text, "proxy_country": country, "currency": currency }))
        }

        Command::Resolve { input, extraction } => {
            let candidates: Vec<CandidateSource> = read_json(&input)?;
            let resolver = ExtractionResolver::new(resolver_options(config, &extraction));
            to_value(&resolver.resolve_price(&candidates)?)
        }

        Command::Track {
            subject,
            input,
            threshold,
            extraction,
        } => {
            let subject = SubjectId::new(subject)?;
            let candidates: Vec<CandidateSource> = read_json(&input)?;
            let use_case = TrackPriceUseCase::new(
                open_history(config)?,
                ExtractionResolver::new(resolver_options(config, &extraction)),
                threshold.unwrap_or(config.monitoring.threshold_percent),
            );

            let outcome = use_case.track(subject, &candidates).await?;
            Ok(json!({
                "resolved": outcome.resolved,
                "observation": ObservationDto::from(&outcome.observation),
                "signal": DropSignalDto::from(&outcome.signal),
            }))
        }

        Command::CheckDrop { subject, threshold } => {
            let subject = SubjectId::new(subject)?;
            let use_case = TrackPriceUseCase::new(
                open_history(config)?,
                ExtractionResolver::new(config.extraction.resolver_options()),
                config.monitoring.threshold_percent,
            );

            let threshold = threshold.unwrap_or_else(|| use_case.threshold_percent());
            let signal = use_case.check_drop(&subject, threshold).await?;
            to_value(&DropSignalDto::from(&signal))
        }

        Command::History { subject, limit } => {
            let subject = SubjectId::new(subject)?;
            let history = open_history(config)?;
            let observations = match limit {
                Some(limit) => history.latest(&subject, limit).await?,
                None => history.history(&subject).await?,
            };
            let rows: Vec<ObservationDto> = observations.iter().map(ObservationDto::from).collect();
            to_value(&rows)
        }

        Command::Audit { input, locale } => {
            let quotes: Vec<RegionalQuote> = read_json(&input)?;
            let use_case =
                RegionalAuditUseCase::new(locale.unwrap_or(config.extraction.locale_hint));
            to_value(&use_case.audit(&quotes))
        }

        Command::Variants { input, extraction } => {
            let rows: Vec<VariantRow> = read_json(&input)?;
            let use_case = NormalizeVariantsUseCase::new(resolver_options(config, &extraction));
            to_value(&use_case.normalize(&rows))
        }
    }
}

fn resolver_options(config: &Config, args: &ExtractionArgs) -> ResolverOptions {
    let mut options = config.extraction.resolver_options();
    if let Some(locale) = args.locale {
        options.locale_hint = locale;
    }
    if let Some(country) = args.country.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        options.proxy_country = Some(country.to_uppercase());
    }
    options
}

fn open_history(config: &Config) -> Result<Arc<DynHistoryRepository>> {
    match config.persistence.backend {
        PersistenceBackend::Memory => {
            tracing::warn!("Memory backend selected; history is discarded on exit");
            Ok(Arc::new(InMemoryPriceHistoryRepository::new()))
        }
        PersistenceBackend::Duckdb => {
            let repo = DuckDbPriceHistoryRepository::open(&config.persistence.db_path)
                .with_context(|| format!("opening {}", config.persistence.db_path))?;
            Ok(Arc::new(repo))
        }
    }
}

fn read_json<T: DeserializeOwned>(input: &str) -> Result<T> {
    let contents = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?
    };
    serde_json::from_str(&contents).with_context(|| format!("parsing JSON from {input}"))
}

fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}
