/*!
# Diary

A plain-text journal kept as one file per day. Entries are appended with a
timestamp to `Journal YYYY-MM-DD.txt` files in a single folder, and can be
listed, searched, picked at random, summarized as monthly word counts, or
opened in an external editor.

## Architecture

- `journal_core`: date expressions (`yesterday`, `2023-01-05`, ...) to calendar dates
- `journal_io`: day file naming, appending, reading and listing
- `ops`: one operation per command
- `cli`: argument parsing and command dispatch
- `config`: configuration loaded once at startup
- `editor`, `volume`: external processes
- `errors`: error types

## Usage Example

```rust,no_run
use diary::journal_core::DateSpecifier;
use diary::{ops, Config};
use chrono::Local;

fn main() -> diary::AppResult<()> {
    let config = Config::load()?;
    let now = Local::now();

    let path = ops::add_entry(&config.diary_dir, &DateSpecifier::Today, Some("Hello"), &now)?;
    println!("Wrote {}", path.display());
    Ok(())
}
```
*/

/// Command-line interface for parsing and dispatching commands
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// External editor launching
pub mod editor;
/// Error types and utilities for error handling
pub mod errors;
/// Date resolution
pub mod journal_core;
/// Day file storage
pub mod journal_io;
/// Command operations
pub mod ops;
/// Encrypted volume mounting
pub mod volume;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::DateSpecifier;
