//! Phone Normalization CLI Application.
//!
//! This binary exposes the phonenorm library from the command line:
//! normalization, validation, embedded-code detection and display grouping.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use phonenorm::{
    detect_calling_code_embedded, format_for_display, is_valid_international_phone, CallingCode,
    FixedCountry, IsoCountryCode, NormalizerConfig, PhoneNormalizer,
};

/// Phone Number Normalizer
///
/// Convert free-form phone input into E.164 international format
/// without choosing a country.
#[derive(Parser)]
#[command(name = "phonenorm")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize phone numbers to international format
    Normalize {
        /// Raw phone input (quote values containing spaces)
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<String>,

        /// Fallback calling code, e.g. +63 (overrides PHONENORM_FALLBACK_CODE)
        #[arg(short, long, value_name = "CODE")]
        fallback: Option<String>,

        /// Current country as ISO 3166-1 alpha-2, standing in for device location
        #[arg(short, long, value_name = "ISO")]
        country: Option<String>,

        /// Print the stage that produced each result
        #[arg(long)]
        explain: bool,

        /// Fail if any result is not valid E.164
        #[arg(long)]
        strict: bool,
    },

    /// Check that values are strict E.164 numbers
    Validate {
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<String>,
    },

    /// Show the calling code embedded in each input's digits
    Detect {
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<String>,
    },

    /// Group normalized numbers for display
    Format {
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<String>,
    },
}

/// Command handler holding the normalizer built from configuration.
struct NormalizeHandler {
    normalizer: PhoneNormalizer<FixedCountry>,
}

impl NormalizeHandler {
    /// Builds the normalizer from the environment plus CLI overrides.
    fn new(fallback: Option<&str>, country: Option<&str>) -> Result<Self> {
        let mut config =
            NormalizerConfig::from_env().context("Invalid phonenorm environment configuration")?;

        if let Some(code) = fallback {
            config.fallback = CallingCode::parse(code)
                .with_context(|| format!("Invalid --fallback value '{}'", code))?;
        }

        let resolver = match country {
            Some(iso) => FixedCountry::new(
                IsoCountryCode::parse(iso)
                    .with_context(|| format!("Invalid --country value '{}'", iso))?,
            ),
            None => FixedCountry::unknown(),
        };

        Ok(Self {
            normalizer: PhoneNormalizer::new(resolver, config),
        })
    }

    /// Normalizes every input, returning output lines and the invalid count.
    async fn normalize(&self, inputs: &[String], explain: bool) -> (Vec<String>, usize) {
        let mut lines = Vec::with_capacity(inputs.len());
        let mut invalid = 0;

        for input in inputs {
            let result = self.normalizer.normalize_detailed(input).await;
            if !is_valid_international_phone(&result.value) {
                invalid += 1;
            }

            if explain {
                lines.push(format!("{}\t{}", result.value, result.stage));
            } else {
                lines.push(result.value);
            }
        }

        (lines, invalid)
    }
}

fn validate_lines(inputs: &[String]) -> (Vec<String>, usize) {
    let mut invalid = 0;
    let lines = inputs
        .iter()
        .map(|input| {
            if is_valid_international_phone(input) {
                format!("{}\tvalid", input)
            } else {
                invalid += 1;
                format!("{}\tinvalid", input)
            }
        })
        .collect();
    (lines, invalid)
}

fn detect_lines(inputs: &[String]) -> Vec<String> {
    inputs
        .iter()
        .map(|input| detect_calling_code_embedded(input).unwrap_or_else(|| "-".to_string()))
        .collect()
}

fn format_lines(inputs: &[String]) -> Vec<String> {
    inputs.iter().map(|input| format_for_display(input)).collect()
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env file is normal
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Normalize {
            inputs,
            fallback,
            country,
            explain,
            strict,
        } => {
            let handler = NormalizeHandler::new(fallback.as_deref(), country.as_deref())?;
            let (lines, invalid) = handler.normalize(inputs, *explain).await;
            print_lines(&lines);

            if *strict && invalid > 0 {
                anyhow::bail!(
                    "{} of {} result(s) are not valid E.164 numbers",
                    invalid,
                    inputs.len()
                );
            }
        }
        Commands::Validate { inputs } => {
            let (lines, invalid) = validate_lines(inputs);
            print_lines(&lines);

            if invalid > 0 {
                anyhow::bail!("{} of {} input(s) are invalid", invalid, inputs.len());
            }
        }
        Commands::Detect { inputs } => print_lines(&detect_lines(inputs)),
        Commands::Format { inputs } => print_lines(&format_lines(inputs)),
    }

    Ok(())
}
