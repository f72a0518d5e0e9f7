//! CLI entry point for the rc-zapper tool.
//!
//! This binary computes the minimum number of remote-control button
//! presses needed to visit an ordered watch list of channels, skipping
//! blocked channels.
//!
//! # Usage
//!
//! ```bash
//! # Interactive: prompts for the three input lines
//! rc-zap
//!
//! # Non-interactive via flags
//! rc-zap --range "1 20" --blocked "2 18 19" --watch "5 15 14 17 1 17"
//!
//! # From a file holding the three lines, as a JSON report
//! rc-zap --input session.txt --format json --output report.json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::{BufRead, Write};
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use color_eyre::eyre::eyre;
use rc_core::{BlockedSet, ChannelConfig, ChannelRange, InputError, WatchList};
use rc_engine::{ClickCalculator, parse_channel_config};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Width of the separator line framing results and error messages.
const SEPARATOR_WIDTH: usize = 100;

/// Computes the minimum remote-control clicks to get through a watch list.
///
/// The three inputs are whitespace-delimited token strings: the channel
/// range ("LOWEST HIGHEST"), the blocked list (count followed by channels),
/// and the watch list (count followed by channels in viewing order). They
/// can be passed as flags, read from a file, or entered interactively.
#[derive(Parser)]
#[command(name = "rc-zap", version, about, long_about = None)]
struct Cli {
    /// Channel range input: "LOWEST HIGHEST".
    #[arg(short, long, requires = "blocked", requires = "watch", env = "RC_ZAP_RANGE")]
    range: Option<String>,

    /// Blocked list input: a count followed by that many channels.
    #[arg(short, long, requires = "range", requires = "watch", env = "RC_ZAP_BLOCKED")]
    blocked: Option<String>,

    /// Watch list input: a count followed by that many channels in order.
    #[arg(short, long, requires = "range", requires = "blocked", env = "RC_ZAP_WATCH")]
    watch: Option<String>,

    /// Read the three inputs from the first three lines of this file.
    #[arg(short, long, conflicts_with_all = ["range", "blocked", "watch"])]
    input: Option<Utf8PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output file (defaults to stdout).
    #[arg(short, long)]
    output: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

/// Result output format.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Plain text framed by a separator line.
    Text,
    /// Pretty-printed JSON report.
    Json,
}

// =============================================================================
// INITIALIZATION
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

// =============================================================================
// INPUT GATHERING
// =============================================================================

/// Gathers the three raw input strings: flags, then file, then prompts.
fn read_inputs(cli: &Cli) -> color_eyre::Result<(String, String, String)> {
    if let (Some(range), Some(blocked), Some(watch)) = (&cli.range, &cli.blocked, &cli.watch) {
        return Ok((range.clone(), blocked.clone(), watch.clone()));
    }

    if let Some(path) = &cli.input {
        return read_input_file(path);
    }

    let range = prompt_line("Please enter lowest and highest channel.")?;
    let blocked =
        prompt_line("Please enter number of blocked channels and space separated blocked channel list.")?;
    let watch = prompt_line(
        "Please enter number of viewable channel and space separated viewable channel list in order.",
    )?;
    Ok((range, blocked, watch))
}

/// Reads the three input lines from a file.
///
/// The blocked line may be empty ("no blocked channels"), so exactly the
/// first three lines are taken as-is.
fn read_input_file(path: &Utf8PathBuf) -> color_eyre::Result<(String, String, String)> {
    let text = std::fs::read_to_string(path.as_std_path())
        .map_err(|e| eyre!("failed to read input file {path}: {e}"))?;

    let mut lines = text.lines();
    let mut next_line = |what: &str| {
        lines
            .next()
            .map(str::to_owned)
            .ok_or_else(|| eyre!("input file {path} is missing the {what} line"))
    };

    let range = next_line("channel range")?;
    let blocked = next_line("blocked list")?;
    let watch = next_line("watch list")?;
    Ok((range, blocked, watch))
}

/// Prints a prompt and reads one line from stdin.
fn prompt_line(prompt: &str) -> color_eyre::Result<String> {
    {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{prompt}")?;
        handle.flush()?;
    }

    let mut line = String::new();
    let bytes = std::io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Err(eyre!("unexpected end of input while reading from stdin"));
    }
    Ok(line.trim_end().to_owned())
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Renders the text result, framed by separator lines.
fn render_text(clicks: u64) -> String {
    let separator = "#".repeat(SEPARATOR_WIDTH);
    format!("{separator}\nMinimum Clicks Required = {clicks}\n{separator}\n")
}

/// Renders the JSON report: the result plus the validated configuration.
fn render_json(config: &ChannelConfig, clicks: u64) -> color_eyre::Result<String> {
    #[derive(serde::Serialize)]
    struct Report<'a> {
        minimum_clicks: u64,
        range: ChannelRange,
        blocked: &'a BlockedSet,
        watch_list: &'a WatchList,
    }

    let report = Report {
        minimum_clicks: clicks,
        range: config.range(),
        blocked: config.blocked(),
        watch_list: config.watch_list(),
    };

    let mut content = serde_json::to_string_pretty(&report)
        .map_err(|e| eyre!("failed to serialize JSON report: {e}"))?;
    content.push('\n');
    Ok(content)
}

/// Writes `content` to the output file, or to stdout if none was given.
fn emit(content: &str, output: Option<&Utf8PathBuf>) -> color_eyre::Result<()> {
    if let Some(path) = output {
        std::fs::write(path.as_std_path(), content)?;
        info!(path = %path, "Result written");
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{content}")?;
    }
    Ok(())
}

/// Prints a validation-error message framed by separator lines.
fn emit_framed_error(message: &str) -> color_eyre::Result<()> {
    let separator = "#".repeat(SEPARATOR_WIDTH);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{separator}")?;
    writeln!(handle, "# {message} #")?;
    writeln!(handle, "{separator}")?;
    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Gathers inputs, validates them, computes, and emits the result.
fn run(cli: &Cli) -> color_eyre::Result<()> {
    let (range_spec, blocked_spec, watch_spec) = read_inputs(cli)?;

    let config = parse_channel_config(&range_spec, &blocked_spec, &watch_spec)?;
    let clicks = ClickCalculator::new(&config).minimum_clicks();

    info!(
        clicks,
        watch = config.watch_list().len(),
        blocked = config.blocked().len(),
        "Computed minimum clicks"
    );

    let content = match cli.format {
        OutputFormat::Text => render_text(clicks),
        OutputFormat::Json => render_json(&config, clicks)?,
    };

    emit(&content, cli.output.as_ref())
}

/// Application entry point.
///
/// Invalid input is part of the tool's normal vocabulary: it prints the
/// framed rule violation and exits with failure status. Anything else
/// (I/O failures, broken pipes) surfaces as a color-eyre report.
fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    match run(&cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(report) => match report.downcast_ref::<InputError>() {
            Some(input_error) => {
                emit_framed_error(&input_error.to_string())?;
                Ok(ExitCode::FAILURE)
            }
            None => Err(report),
        },
    }
}
