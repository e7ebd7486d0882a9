//! CLI argument definitions for the price engine.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `normalize` | Parse one locale-ambiguous amount |
//! | `scrub` | Isolate the price in marketing copy |
//! | `currency` | Resolve an ISO 4217 code |
//! | `resolve` | Pick a price from candidate sources |
//! | `track` | Resolve, record, and check for a drop |
//! | `check-drop` | Check a subject's latest two observations |
//! | `history` | List a subject's observations |
//! | `audit` | Normalize quotes from several regions |
//! | `variants` | Normalize AI-extracted variant rows |
//!
//! Structured inputs are JSON files, or `-` for stdin. Output is JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! price-engine normalize "€ 1.234,56" --locale EU
//! price-engine currency '$49.99' --country CA
//! price-engine track https://shop.example/item candidates.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use price_engine::LocaleHint;

/// Canonical price extraction and drop detection for scraped storefronts.
#[derive(Debug, Parser)]
#[command(name = "price-engine", author, version, about)]
pub struct Cli {
    /// Path to the YAML config file. Defaults to `config.yaml` when present.
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Extraction overrides shared by several commands.
#[derive(Debug, Clone, Args)]
pub struct ExtractionArgs {
    /// Separator convention: US, EU, or AUTO.
    #[arg(long)]
    pub locale: Option<LocaleHint>,

    /// ISO 3166-1 alpha-2 country of the scraping proxy.
    #[arg(long)]
    pub country: Option<String>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize a raw amount into an exact decimal.
    Normalize {
        /// Raw text, e.g. "€ 1.234,56".
        raw: String,
        /// Separator convention: US, EU, or AUTO.
        #[arg(long)]
        locale: Option<LocaleHint>,
    },

    /// Extract the transactional price from marketing copy.
    Scrub {
        /// Snippet such as "Was $129.99 Now $99.99".
        text: String,
        /// Print the scrubbed text instead of the price.
        #[arg(long)]
        noise_only: bool,
    },

    /// Resolve the currency of a price snippet.
    Currency {
        /// Snippet such as "C$ 24.99".
        text: String,
        /// ISO 3166-1 alpha-2 country of the scraping proxy.
        #[arg(long)]
        country: Option<String>,
    },

    /// Resolve a price from a JSON array of candidate sources.
    Resolve {
        /// Candidates file, or `-` for stdin.
        input: String,
        #[command(flatten)]
        extraction: ExtractionArgs,
    },

    /// Resolve a price, append it to the history, and check for a drop.
    Track {
        /// Subject identifier, usually the product URL.
        subject: String,
        /// Candidates file, or `-` for stdin.
        input: String,
        /// Alert threshold in percent.
        #[arg(long)]
        threshold: Option<Decimal>,
        #[command(flatten)]
        extraction: ExtractionArgs,
    },

    /// Compare the two most recent observations of a subject.
    CheckDrop {
        /// Subject identifier.
        subject: String,
        /// Alert threshold in percent.
        #[arg(long)]
        threshold: Option<Decimal>,
    },

    /// List a subject's observations.
    History {
        /// Subject identifier.
        subject: String,
        /// Only the most recent N, newest first.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Normalize a JSON array of `{region, raw_price}` quotes.
    Audit {
        /// Quotes file, or `-` for stdin.
        input: String,
        /// Separator convention: US, EU, or AUTO.
        #[arg(long)]
        locale: Option<LocaleHint>,
    },

    /// Normalize a JSON array of AI-extracted variant rows.
    Variants {
        /// Rows file, or `-` for stdin.
        input: String,
        #[command(flatten)]
        extraction: ExtractionArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_normalize_with_locale() {
        let cli = Cli::parse_from(["price-engine", "normalize", "1,20", "--locale", "eu"]);
        match cli.command {
            Command::Normalize { raw, locale } => {
                assert_eq!(raw, "1,20");
                assert_eq!(locale, Some(LocaleHint::Eu));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_track_with_flattened_args() {
        let cli = Cli::parse_from([
            "price-engine",
            "--pretty",
            "track",
            "https://shop.example/item",
            "-",
            "--threshold",
            "15",
            "--country",
            "CA",
        ]);
        assert!(cli.pretty);
        match cli.command {
            Command::Track {
                threshold,
                extraction,
                ..
            } => {
                assert_eq!(threshold, Some(Decimal::from(15)));
                assert_eq!(extraction.country.as_deref(), Some("CA"));
                assert!(extraction.locale.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
