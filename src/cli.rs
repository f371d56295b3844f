use std::path::PathBuf;

use clap::Parser;

use crate::app::Settings;
use crate::game::ColonPolicy;
use crate::io::OutputMode;

#[derive(Parser, Debug)]
#[command(name = "cardwinner")]
#[command(about = "Scores card hands and writes the winner to a file.")]
#[command(version)]
pub struct CommandLine {
    /// File with one `Name:Card,Card,...` line per player
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// File that receives the result line
    #[arg(long = "out", value_name = "PATH")]
    pub output: PathBuf,

    /// How to treat lines with more than one ':'
    #[arg(long, value_enum, default_value_t = ColonPolicy::Strict)]
    pub colon_policy: ColonPolicy,

    /// Only write the result if the output file already exists
    #[arg(long)]
    pub require_existing_output: bool,
}

impl CommandLine {
    pub fn settings(&self) -> Settings {
        Settings {
            input: self.input.clone(),
            output: self.output.clone(),
            colon_policy: self.colon_policy,
            output_mode: if self.require_existing_output {
                OutputMode::RequireExisting
            } else {
                OutputMode::CreateOrOverwrite
            },
        }
    }
}

/// Finds the value after `--out` (or inside `--out=PATH`) in raw arguments, so
/// a failure report still has somewhere to go when full parsing fails.
pub fn output_path_hint<S: AsRef<str>>(args: &[S]) -> Option<PathBuf> {
    let mut iter = args.iter().map(|arg| arg.as_ref());
    while let Some(arg) = iter.next() {
        if arg == "--out" {
            return iter.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--out=") {
            return Some(PathBuf::from(path));
        }
    }
    None
}
