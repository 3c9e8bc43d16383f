//! Command-line interface.
//!
//! Flags that do not start the TUI are handled before any terminal setup:
//!
//! ```ignore
//! use fetch_dogs::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Run a CLI command if it does not need the TUI.
///
/// Returns `None` for [`CliCommand::Run`].
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(message) => {
            eprintln!("{}\n\n{}", message, USAGE);
            Some(Err(eyre!("{}", message)))
        }
        CliCommand::Run(_) => None,
    }
}
