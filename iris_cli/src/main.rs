//! # Iris Classifier CLI Application
//!
//! Terminal front-end for the iris prediction endpoint. Drives the same
//! [`ClassificationFlow`] as the GUI: fill the four fields (prompt, flags, or
//! a sample profile), submit once, print the result or the error.

mod cli;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;

use iris_core::client::log_health;
use iris_core::config::ConfigOverrides;
use iris_core::logging::{init_logging, LogConfig};
use iris_core::render::{ErrorView, ResultView};
use iris_core::{ClassificationFlow, ClientConfig, HttpBackend, IrisError, IrisResult, MeasurementField};

use cli::Cli;

fn prompt_field(field: MeasurementField) -> String {
    print!("Enter {} ({}): ", field.label().to_lowercase(), field.unit());
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(level) = cli.verbosity.tracing_level() {
        let config = LogConfig::default()
            .with_level(level)
            .with_format(cli.log_format.into())
            .with_ansi(!cli.no_color && io::stderr().is_terminal());
        if let Err(e) = init_logging(&config) {
            eprintln!("{}", e);
        }
    }

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.error_code(), "Exiting with error");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> IrisResult<()> {
    let overrides = ConfigOverrides {
        endpoint: cli.endpoint.clone(),
        timeout_secs: cli.timeout,
    };
    let config = ClientConfig::from_env_with(&overrides).inspect_err(print_error)?;
    let backend = HttpBackend::new(&config).inspect_err(print_error)?;

    let mut flow = ClassificationFlow::new();
    if let Some(species) = cli.sample {
        flow.load_sample(species);
        println!("Using {} sample measurements", species.display_name());
    } else if let Some(values) = &cli.values {
        for (field, value) in MeasurementField::ALL.iter().zip(values) {
            flow.set_field(*field, value.as_str());
        }
    } else {
        for field in MeasurementField::ALL {
            flow.set_field(field, prompt_field(field));
        }
    }

    if !cli.skip_health {
        log_health(&backend).await;
    }

    println!();
    println!("Classifying via {} ...", backend.endpoint());
    println!();

    let result = match flow.submit(&backend).await {
        Ok(result) => result.clone(),
        Err(e) => {
            print_error(&e);
            return Err(e);
        }
    };

    let input = flow.inputs();
    let view = ResultView::from_result(&result);

    println!("═══════════════════════════════════════");
    println!("  IRIS CLASSIFICATION");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    for field in MeasurementField::ALL {
        println!("  {:<13} {} {}", format!("{}:", field.label()), input.get(field), field.unit());
    }
    println!();
    println!("  {}", view.species_label);
    println!("  {}", view.confidence_text);
    println!("  {}", view.description);

    if !view.probabilities.is_empty() {
        println!();
        println!("Probabilities:");
        for row in &view.probabilities {
            println!("  {}", row.text);
        }
    }

    let metadata = view.metadata_lines();
    if !metadata.is_empty() {
        println!();
        for line in metadata {
            println!("  {}", line);
        }
    }
    println!("═══════════════════════════════════════");

    if cli.json {
        println!();
        println!("JSON Output:");
        if let Ok(json) = serde_json::to_string_pretty(&result) {
            println!("{}", json);
        }
    }

    Ok(())
}

fn print_error(error: &IrisError) {
    let view = ErrorView::from_error(error);
    eprintln!("Error: {}", view.message());
    if let Some(hint) = &view.retry_hint {
        eprintln!("{}", hint);
    }
    if let Ok(json) = serde_json::to_string_pretty(error) {
        tracing::debug!(error = %json, "Error details");
    }
}
