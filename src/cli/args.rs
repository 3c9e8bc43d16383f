//! Command-line argument parsing.

use crate::route::Route;

/// Options for running the TUI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Overrides the configured API URL
    pub api_url: Option<String>,
    /// Route to open instead of the saved one
    pub route: Option<Route>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Arguments could not be understood
    Invalid(String),
    /// Run the TUI application (default)
    Run(RunOptions),
}

pub const USAGE: &str = "\
Usage: fetch-dogs [OPTIONS] [ROUTE]

Browse shelter dogs, collect favorites and find a match.

Arguments:
  [ROUTE]            Screen to open, e.g. /login, /signup, /search/3

Options:
      --api-url <URL>  API base URL (env: FETCH_DOGS_API_URL)
  -h, --help           Print help
  -V, --version        Print version";

/// Parse command-line arguments.
///
/// ```
/// use fetch_dogs::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["fetch-dogs".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--api-url" => match args.next() {
                Some(url) if !url.starts_with('-') => options.api_url = Some(url),
                _ => return CliCommand::Invalid("--api-url requires a value".to_string()),
            },
            other if other.starts_with("--api-url=") => {
                options.api_url = Some(other["--api-url=".len()..].to_string());
            }
            other if other.starts_with('/') && options.route.is_none() => {
                options.route = Some(Route::parse(other));
            }
            other => return CliCommand::Invalid(format!("unexpected argument '{}'", other)),
        }
    }
    CliCommand::Run(options)
}
