//! Content domain: RON loading for the tuning file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::TuningFile;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Loads the tuning file from disk.
pub fn load_tuning_file(path: &Path) -> Result<TuningFile, ContentLoadError> {
    let file_name = path.display().to_string();

    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name)
}

/// Parses tuning RON from a string, reporting against `file_name`.
pub fn parse_tuning(contents: &str, file_name: &str) -> Result<TuningFile, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}
