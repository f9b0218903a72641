use std::path::{Path, PathBuf};

/// Corpus location used by the runner.
pub const DEFAULT_INPUT_PATH: &str = "./data/corpus.txt";

/// Runtime configuration for a generation run.
///
/// The input path is the only setting. It defaults to
/// [`DEFAULT_INPUT_PATH`] and can be overridden for tests or embedding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
	/// Path of the plain-text corpus, read in full.
	pub input_path: PathBuf,
}

impl Default for Config {
	fn default() -> Self {
		Self { input_path: PathBuf::from(DEFAULT_INPUT_PATH) }
	}
}

impl Config {
	/// Returns a copy of this configuration reading from `path`.
	pub fn with_input_path<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.input_path = path.as_ref().to_path_buf();
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_points_at_data_folder() {
		assert_eq!(Config::default().input_path, PathBuf::from("./data/corpus.txt"));
	}

	#[test]
	fn test_override_input_path() {
		let config = Config::default().with_input_path("other.txt");
		assert_eq!(config.input_path, PathBuf::from("other.txt"));
	}
}
