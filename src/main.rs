/*!
# Diary - A Plain-Text Journal

This file contains the main application flow: logging setup, configuration
loading, and handing the parsed command line to the dispatcher.

## Usage

```
diary [OPTIONS] <command> [argument...]

Commands:
  add <text>        Adds an entry (to today, or the day given with --date)
  ls [date]         Shows a day's entries
  find <term>       Searches all days
  edit [date]       Opens a day in $EDITOR
  rand              Shows a random day
  stats             Prints monthly word counts
  hide              Dismounts the encrypted diary volume
  help              Prints usage
```

## Configuration

- `~/.diary` (or `DIARY_CONFIG`): first line is the diary folder, optional second line an encrypted volume
- `DIARY_EDITOR` or `EDITOR`: editor for `edit` (defaults to "vim")
- `RUST_LOG`: log filter (logs go to stderr)
*/

use chrono::{DateTime, Local};
use clap::Parser;
use diary::cli::{self, CliArgs};
use diary::config::Config;
use diary::constants;
use diary::editor::SystemEditor;
use diary::errors::AppResult;
use std::io;
use tracing::{debug, error, info_span};
use tracing_subscriber::fmt::time::{ChronoLocal, ChronoUtc};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// The main entry point for the diary application.
///
/// Errors are logged once here, printed to stderr, and turned into exit code 1.
fn main() {
    // Obtain current date/time once at the beginning
    let current_datetime = Local::now();

    let args = CliArgs::parse();
    init_tracing(args.verbose, &args.log_format);

    let correlation_id = Uuid::new_v4().to_string();
    let root_span = info_span!(
        constants::TRACING_ROOT_SPAN_NAME,
        service_name = constants::TRACING_SERVICE_NAME,
        correlation_id = %correlation_id,
    );
    let _guard = root_span.enter();

    if let Err(e) = run_application(&args, &current_datetime) {
        error!(error = %e, "Application error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_application(args: &CliArgs, current_datetime: &DateTime<Local>) -> AppResult<()> {
    let config = Config::load()?;
    debug!("Loaded configuration: {:?}", config);

    let editor = SystemEditor {
        editor_cmd: config.editor.clone(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(args, &config, &editor, current_datetime, &mut out)
}

/// Installs the global tracing subscriber, writing to stderr.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` is honored with a
/// default of `warn`.
fn init_tracing(verbose: bool, log_format: &str) {
    let filter = if verbose {
        EnvFilter::new(constants::VERBOSE_LOG_LEVEL)
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_LEVEL))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if log_format == constants::LOG_FORMAT_JSON {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_timer(ChronoLocal::rfc_3339())
                    .with_writer(io::stderr),
            )
            .init();
    }
}
