//! Command implementations for the decoder CLI
//!
//! Sets up logging, layers the configuration and runs the decode or batch
//! command, rendering reports as coloured briefings or JSON.

use crate::batch::{BatchDecoder, BatchOutput, expand_patterns};
use crate::briefing;
use crate::cli::args::{Args, BatchArgs, Commands, DecodeArgs, parse_reference_time};
use crate::config::{DecoderConfig, OutputFormat, resolve_config};
use crate::models::Report;
use anyhow::{Context, Result};
use colored::*;
use tracing::{debug, info, warn};

/// Main command runner
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let (config, source) = resolve_config(args.config_file.as_deref())
        .context("Failed to load configuration")?;
    info!("Using configuration from {}", source);

    match &args.command {
        Some(Commands::Decode(decode)) => run_decode(decode, config),
        Some(Commands::Batch(batch)) => {
            let show_progress = config.show_progress && args.show_progress();
            run_batch(batch, config.with_progress(show_progress)).await
        }
        None => Ok(()),
    }
}

/// Decode one report and print it
fn run_decode(args: &DecodeArgs, config: DecoderConfig) -> Result<()> {
    let config = args.apply_to(config);
    let reference = parse_reference_time(args.now.as_deref())?;
    let raw = args.raw();

    let kind = config.default_kind.resolve(&raw);
    let report = Report::decode_as(kind, &raw, reference)
        .with_context(|| format!("Failed to decode {} report: {}", kind, raw))?;

    println!("{}", render(&report, config.output_format)?);
    Ok(())
}

/// Decode every report matched by the patterns
async fn run_batch(args: &BatchArgs, config: DecoderConfig) -> Result<()> {
    let config = args.apply_to(config);
    config.validate()?;
    let reference = parse_reference_time(args.now.as_deref())?;

    let files = expand_patterns(&args.patterns)?;
    info!("Found {} report files", files.len());

    let format = config.output_format;
    let decoder = BatchDecoder::new(config, reference);
    let output = decoder
        .decode_files(&files)
        .await
        .context("Batch decoding failed")?;

    print_batch(&output, format, args.show_failures)?;
    Ok(())
}

fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(briefing::render(report)),
        OutputFormat::Json => Ok(briefing::render_json(report, true)?),
    }
}

/// Reports go to stdout, failures and the summary to stderr
fn print_batch(output: &BatchOutput, format: OutputFormat, show_failures: bool) -> Result<()> {
    for decoded in &output.reports {
        match format {
            OutputFormat::Text => println!("{}\n", briefing::render(&decoded.report)),
            OutputFormat::Json => println!("{}", briefing::render_json(&decoded.report, false)?),
        }
    }

    for failure in &output.failures {
        if show_failures {
            eprintln!(
                "{} {}:{}: {} ({})",
                "Failed".bright_red(),
                failure.path.display(),
                failure.line_number,
                failure.text,
                failure.reason
            );
        } else {
            warn!(
                "Failed to decode {}:{}: {}",
                failure.path.display(),
                failure.line_number,
                failure.reason
            );
        }
    }

    eprintln!("{}", output.stats);
    Ok(())
}

/// Set up tracing on stderr, honouring RUST_LOG over the verbosity flags
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("avwx_decoder={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
