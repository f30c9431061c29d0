use console::{Term, style};
use rss_reader::cli::{self, Command};
use rss_reader::{FeedError, config, feed, logging};
use std::{env, process::ExitCode};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let prefix = style("error:").for_stderr().red().bold();
            let _ = Term::stderr().write_line(&format!("{prefix} {err}"));
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run() -> Result<(), FeedError> {
    let opts = match cli::parse_args(env::args().skip(1))? {
        Command::Help => return print(&cli::help_text()),
        Command::Version => return print(&cli::version_text()),
        Command::Run(opts) => opts,
    };
    logging::init(opts.verbosity);

    let cfg = config::load(opts.config.as_deref()).map_err(FeedError::Config)?;
    let output = feed::run(&opts, &cfg).await?;
    print(&output)
}

fn print(text: &str) -> Result<(), FeedError> {
    if text.is_empty() {
        return Ok(());
    }
    Term::stdout().write_line(text).map_err(|source| FeedError::Io {
        path: "<stdout>".into(),
        source,
    })
}
