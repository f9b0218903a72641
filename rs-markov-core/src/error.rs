use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
	#[error("Cannot read corpus {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Chain is empty, no starting bigram can be selected")]
	EmptyChain,
}

pub type Result<T> = std::result::Result<T, ChainError>;
