use std::process::ExitCode;

use cardwinner::cli::{output_path_hint, CommandLine};
use cardwinner::{report_failure, run, AppError};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr; the output file only ever holds the result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardwinner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let commands = match CommandLine::try_parse_from(&args) {
        Ok(commands) => commands,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            let reason = err.kind().as_str().unwrap_or("unrecognized arguments");
            let failure = AppError::InvalidArguments(reason.to_string());
            match output_path_hint(&args) {
                Some(output) => report_failure(&output, &failure),
                None => error!(error = %failure, "No --out path to report to"),
            }
            return ExitCode::FAILURE;
        }
    };

    let settings = commands.settings();
    match run(&settings) {
        Ok(line) => {
            info!(result = %line, "Done");
            ExitCode::SUCCESS
        }
        Err(failure) => {
            report_failure(&settings.output, &failure);
            ExitCode::FAILURE
        }
    }
}
