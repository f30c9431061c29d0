use crate::error::{FeedError, Result};
use crate::feed::Source;
use std::path::PathBuf;

/// Parsed command line for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub source: Source,
    pub limit: Option<i64>,
    pub json: bool,
    pub channel: bool,
    pub config: Option<PathBuf>,
    pub verbosity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
    Version,
}

/// Parse arguments (program name already skipped).
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut source: Option<String> = None;
    let mut limit: Option<i64> = None;
    let mut json = false;
    let mut channel = false;
    let mut config: Option<PathBuf> = None;
    let mut verbosity: u8 = 0;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--json" => json = true,
            "--channel" => channel = true,
            "--verbose" => verbosity = verbosity.saturating_add(1),
            flag if is_short_verbose(flag) => {
                let count = u8::try_from(flag.len() - 1).unwrap_or(u8::MAX);
                verbosity = verbosity.saturating_add(count);
            }
            "--limit" => {
                let value = args
                    .next()
                    .ok_or_else(|| FeedError::InvalidArgument("--limit requires a value".into()))?;
                limit = Some(parse_limit(&value)?);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| FeedError::InvalidArgument("--config requires a path".into()))?;
                config = Some(PathBuf::from(value));
            }
            other => {
                if let Some(value) = other.strip_prefix("--limit=") {
                    limit = Some(parse_limit(value)?);
                } else if let Some(value) = other.strip_prefix("--config=") {
                    config = Some(PathBuf::from(value));
                } else if other.starts_with('-') && other.len() > 1 {
                    return Err(FeedError::InvalidArgument(format!("unknown option `{other}`")));
                } else if source.is_some() {
                    return Err(FeedError::InvalidArgument(format!(
                        "unexpected extra argument `{other}`"
                    )));
                } else {
                    source = Some(other.to_string());
                }
            }
        }
    }

    let raw = source.ok_or_else(|| FeedError::InvalidArgument("missing feed URL".into()))?;
    Ok(Command::Run(Options {
        source: Source::parse(&raw)?,
        limit,
        json,
        channel,
        config,
        verbosity,
    }))
}

// `-v`, `-vv`, `-vvv`, ...
fn is_short_verbose(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v')
}

fn parse_limit(value: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        FeedError::InvalidArgument(format!("--limit expects an integer, got `{value}`"))
    })
}

pub fn help_text() -> String {
    [
        "rss_reader: command-line RSS reader",
        "",
        "Usage: rss_reader [OPTIONS] <URL>",
        "",
        "Arguments:",
        "  <URL>              RSS feed URL (or a local RSS file)",
        "",
        "Options:",
        "  --limit <N>        Show at most N items (N <= 0 shows all)",
        "  --json             Print items as JSON",
        "  --channel          Include channel metadata",
        "  --config <path>    Read [fetch] settings from a TOML file",
        "  -v, --verbose      Log progress to stderr (repeat for more)",
        "  -h, --help         Print help",
        "  -V, --version      Print version",
    ]
    .join("\n")
}

pub fn version_text() -> String {
    format!("rss_reader {}", env!("CARGO_PKG_VERSION"))
}
