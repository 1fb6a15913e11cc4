//! Command-line argument parsing.
//!
//! Parses the handful of flags the dashboard understands and decides which
//! command to run.

use crate::error::{TriviaError, TriviaResult};

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the dashboard (default)
    RunTui(CliOptions),
}

/// Overrides supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub amount: Option<u32>,
    pub api_url: Option<String>,
    pub page_size: Option<usize>,
    pub timeout_secs: Option<u64>,
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> TriviaResult<T> {
    value
        .parse()
        .map_err(|_| TriviaError::Config(format!("{} expects a number, got {:?}", flag, value)))
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name and is skipped. Value flags accept
/// both `--flag value` and `--flag=value`.
///
/// # Examples
///
/// ```
/// use trivia_insights::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["trivia-insights".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> TriviaResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--amount" | "--api-url" | "--page-size" | "--timeout" => {
                let value = match inline {
                    Some(value) => value,
                    None => args
                        .next()
                        .ok_or_else(|| TriviaError::Config(format!("{} expects a value", flag)))?,
                };
                match flag.as_str() {
                    "--amount" => options.amount = Some(parse_number(&flag, &value)?),
                    "--page-size" => options.page_size = Some(parse_number(&flag, &value)?),
                    "--timeout" => options.timeout_secs = Some(parse_number(&flag, &value)?),
                    _ => options.api_url = Some(value),
                }
            }
            other => {
                return Err(TriviaError::Config(format!("unknown argument: {}", other)));
            }
        }
    }

    Ok(CliCommand::RunTui(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> TriviaResult<CliCommand> {
        let args: Vec<String> = std::iter::once("trivia-insights")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_no_args_runs_tui() {
        assert_eq!(parse(&[]).unwrap(), CliCommand::RunTui(CliOptions::default()));
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse(&["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-h"]).unwrap(), CliCommand::Help);
        assert_eq!(parse(&["--amount", "5", "--help"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_value_flags() {
        let command = parse(&[
            "--amount",
            "20",
            "--api-url=http://localhost:8080",
            "--page-size=15",
            "--timeout",
            "4",
        ])
        .unwrap();
        assert_eq!(
            command,
            CliCommand::RunTui(CliOptions {
                amount: Some(20),
                api_url: Some("http://localhost:8080".to_string()),
                page_size: Some(15),
                timeout_secs: Some(4),
            })
        );
    }

    #[test]
    fn test_missing_value() {
        assert!(matches!(parse(&["--amount"]), Err(TriviaError::Config(_))));
    }

    #[test]
    fn test_bad_number() {
        assert!(parse(&["--amount", "-3"]).is_err());
        assert!(parse(&["--page-size=ten"]).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        assert!(parse(&["--sync"]).is_err());
    }
}
