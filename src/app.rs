use std::path::{Path, PathBuf};

use tracing::{error, info, instrument};

use crate::game::{parse_players, resolve_winner, ColonPolicy};
use crate::io::{self, OutputMode};
use crate::shared::AppError;

/// Everything one run needs, already resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub colon_policy: ColonPolicy,
    pub output_mode: OutputMode,
}

impl Settings {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            colon_policy: ColonPolicy::default(),
            output_mode: OutputMode::default(),
        }
    }
}

/// Reads the hands, picks the winner and writes the encoded line.
/// Returns the line that was written.
#[instrument(skip_all, fields(input = %settings.input.display(), output = %settings.output.display()))]
pub fn run(settings: &Settings) -> Result<String, AppError> {
    info!("Scoring hands");

    let lines = io::read_lines(&settings.input)?;
    let players = parse_players(&lines, settings.colon_policy)?;
    let result = resolve_winner(&players)?;
    let encoded = result.encode();

    io::write_output(&settings.output, &encoded, settings.output_mode)?;

    info!(
        players = players.len(),
        winner = %result.winner,
        tied = result.tied.len(),
        face_total = result.face_total,
        "Result written"
    );
    Ok(encoded)
}

/// Writes `Error occured: {message}` to the output path. A failure here has
/// nowhere else to go but the log.
pub fn report_failure(output: &Path, failure: &AppError) {
    error!(error = %failure, "Run failed");

    let message = format!("Error occured: {}", failure);
    if let Err(write_error) = io::write_output(output, &message, OutputMode::CreateOrOverwrite) {
        error!(
            path = %output.display(),
            error = %write_error,
            "Could not write failure report"
        );
    }
}
