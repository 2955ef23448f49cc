//! Options for the `lex` command.

use std::path::PathBuf;

use crate::DriverError;

/// How diagnostics are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per error: `line:col: message`.
    #[default]
    Default,
    /// Code, location, message and hint.
    Verbose,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<OutputFormat> {
        match s {
            "default" => Some(OutputFormat::Default),
            "verbose" => Some(OutputFormat::Verbose),
            _ => None,
        }
    }
}

/// Configuration for `brisk lex`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Diagnostic rendering.
    pub format: OutputFormat,
    /// Exit with an error when any illegal token is found.
    pub deny_illegal: bool,
    /// Append `@ line:start-end` to each token line.
    pub show_positions: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            format: OutputFormat::Default,
            deny_illegal: false,
            show_positions: true,
        }
    }
}

/// Parse the arguments following `lex`: exactly one file path plus flags,
/// in any order.
pub fn parse_lex_args(args: &[String]) -> Result<(PathBuf, LexOptions), DriverError> {
    let mut options = LexOptions::default();
    let mut path = None;

    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            options.format = OutputFormat::parse(format).ok_or_else(|| {
                DriverError::usage(format!(
                    "unknown format '{format}' (expected 'default' or 'verbose')"
                ))
            })?;
        } else if arg == "--deny-illegal" {
            options.deny_illegal = true;
        } else if arg == "--no-positions" {
            options.show_positions = false;
        } else if arg.starts_with('-') {
            return Err(DriverError::usage(format!("unknown option '{arg}'")));
        } else if path.is_some() {
            return Err(DriverError::usage(format!("unexpected argument '{arg}'")));
        } else {
            path = Some(PathBuf::from(arg));
        }
    }

    let path = path.ok_or_else(|| DriverError::usage("missing file path"))?;
    Ok((path, options))
}
