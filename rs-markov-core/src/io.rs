use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ChainError, Result};

/// Reads a text file and returns its whole content as a single `String`.
///
/// - Reads the entire file into memory
/// - No line splitting, tokenization happens in the chain builder
/// - The file handle is dropped before returning, on success or failure
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let to_error = |source| ChainError::Io { path: path.to_path_buf(), source };

	let mut contents = String::new();
	File::open(path).map_err(to_error)?.read_to_string(&mut contents).map_err(to_error)?;
	log::info!("Read corpus {} ({} bytes)", path.display(), contents.len());
	Ok(contents)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_file_reports_path() {
		let path = std::env::temp_dir().join("rs-markov-core-does-not-exist.txt");
		match read_corpus(&path) {
			Err(ChainError::Io { path: reported, .. }) => assert_eq!(reported, path),
			other => panic!("expected Io error, got {:?}", other),
		}
	}

	#[test]
	fn test_reads_whole_file() {
		let path = std::env::temp_dir().join(format!("rs-markov-core-io-{}.txt", std::process::id()));
		std::fs::write(&path, "one two\nthree  four\n").unwrap();
		let text = read_corpus(&path).unwrap();
		std::fs::remove_file(&path).unwrap();
		assert_eq!(text, "one two\nthree  four\n");
	}

	#[test]
	fn test_invalid_utf8_is_io_error() {
		let path = std::env::temp_dir().join(format!("rs-markov-core-utf8-{}.txt", std::process::id()));
		std::fs::write(&path, [b'o', b'k', b' ', 0xff, 0xfe, b'\n']).unwrap();
		let result = read_corpus(&path);
		std::fs::remove_file(&path).unwrap();
		match result {
			Err(ChainError::Io { path: reported, source }) => {
				assert_eq!(reported, path);
				assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
			}
			other => panic!("expected Io error, got {:?}", other),
		}
	}
}
