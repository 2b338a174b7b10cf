//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

use iris_core::logging::LogFormat;
use iris_core::samples::sample_by_key;
use iris_core::Species;

#[derive(Parser, Debug)]
#[command(
    name = "iris_cli",
    version,
    about = "Classify an iris flower with the remote prediction endpoint",
    long_about = "Send four flower measurements (cm) to the iris prediction endpoint and print\n\
                  the predicted species and confidence.\n\n\
                  Without --sample or --values the measurements are prompted for."
)]
pub struct Cli {
    /// Use a sample profile (setosa, versicolor, virginica) instead of prompting.
    #[arg(long, value_name = "SPECIES", value_parser = parse_species, conflicts_with = "values")]
    pub sample: Option<Species>,

    /// Sepal length, sepal width, petal length, petal width.
    #[arg(
        long,
        num_args = 4,
        value_names = ["SEPAL_LENGTH", "SEPAL_WIDTH", "PETAL_LENGTH", "PETAL_WIDTH"],
        allow_hyphen_values = true
    )]
    pub values: Option<Vec<String>>,

    /// Prediction endpoint URL (overrides IRIS_API_URL).
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides IRIS_TIMEOUT_SECS).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Also print the raw prediction as JSON.
    #[arg(long)]
    pub json: bool,

    /// Do not call the /health endpoint before classifying.
    #[arg(long)]
    pub skip_health: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for silence).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Disable colored log output.
    #[arg(long)]
    pub no_color: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

fn parse_species(s: &str) -> Result<Species, String> {
    sample_by_key(s).map(|profile| profile.species).ok_or_else(|| {
        let keys: Vec<&str> = Species::ALL.iter().map(|sp| sp.key()).collect();
        format!("unknown species '{}' (expected one of: {})", s, keys.join(", "))
    })
}
