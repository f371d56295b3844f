use std::fs;
use std::path::Path;

use tracing::debug;

use crate::shared::AppError;

/// How the result file is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    CreateOrOverwrite,
    /// Refuse to write unless the file is already there.
    RequireExisting,
}

pub fn read_lines(path: &Path) -> Result<Vec<String>, AppError> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    let lines: Vec<String> = contents.lines().map(str::to_string).collect();

    debug!(path = %path.display(), lines = lines.len(), "Read input file");
    Ok(lines)
}

pub fn write_output(path: &Path, contents: &str, mode: OutputMode) -> Result<(), AppError> {
    if mode == OutputMode::RequireExisting && !path.exists() {
        return Err(AppError::FileNotFound(path.to_path_buf()));
    }

    fs::write(path, contents).map_err(|e| AppError::io(path, e))?;

    debug!(path = %path.display(), bytes = contents.len(), "Wrote output file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_lines_without_trailing_empty_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, "Alice:2C\r\nBob:3D\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["Alice:2C", "Bob:3D"]);
    }

    #[test]
    fn missing_input_is_file_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let result = read_lines(&path);
        assert!(matches!(result, Err(AppError::FileNotFound(p)) if p == path));
    }

    #[test]
    fn creates_output_by_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_output(&path, "Bob:14", OutputMode::CreateOrOverwrite).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Bob:14");

        write_output(&path, "Alice:5", OutputMode::CreateOrOverwrite).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Alice:5");
    }

    #[test]
    fn require_existing_refuses_missing_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let result = write_output(&path, "Bob:14", OutputMode::RequireExisting);
        assert!(matches!(result, Err(AppError::FileNotFound(_))));
        assert!(!path.exists());
    }

    #[test]
    fn require_existing_overwrites_present_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale contents that are longer").unwrap();

        write_output(&path, "Bob:14", OutputMode::RequireExisting).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Bob:14");
    }
}
