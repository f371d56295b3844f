use std::fs;
use std::path::PathBuf;

use cardwinner::{ColonPolicy, OutputMode, Settings};
use tempfile::TempDir;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// A scratch directory holding one input file and one output path.
pub struct TestSetup {
    pub _dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl TestSetup {
    pub fn with_input(contents: &str) -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let input = dir.path().join("hands.txt");
        let output = dir.path().join("result.txt");
        fs::write(&input, contents).expect("input file should be written");

        Self {
            _dir: dir,
            input,
            output,
        }
    }

    pub fn settings(&self) -> Settings {
        Settings::new(&self.input, &self.output)
    }

    #[allow(dead_code)]
    pub fn settings_with(&self, colon_policy: ColonPolicy, output_mode: OutputMode) -> Settings {
        Settings {
            colon_policy,
            output_mode,
            ..self.settings()
        }
    }

    #[allow(dead_code)]
    pub fn touch_output(&self) {
        fs::write(&self.output, "").expect("output file should be created");
    }

    pub fn output_contents(&self) -> Option<String> {
        fs::read_to_string(&self.output).ok()
    }
}
