use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use sql2json::{Cli, Config, Sql2JsonError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => return report(&usage_error(&err)),
    };

    let config = Config::from(cli);
    match sql2json::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn report(err: &Sql2JsonError) -> ExitCode {
    eprintln!("Error: {}", err);
    ExitCode::FAILURE
}

/// clap renders multi-line reports; keep only the message itself
fn usage_error(err: &clap::Error) -> Sql2JsonError {
    let report = err.to_string();
    let line = report.lines().next().unwrap_or_default();
    Sql2JsonError::Usage(line.strip_prefix("error: ").unwrap_or(line).to_string())
}
