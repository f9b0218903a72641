use std::fmt;

/// Represents a bigram key in the chain model.
///
/// A `Bigram` is an ordered pair of consecutive corpus tokens. It is the
/// lookup key for the successor words observed right after that pair.
///
/// ## Invariants
/// - Tokens are stored exactly as they appeared in the corpus (no case folding,
///   no punctuation stripping)
/// - Order matters: `(a, b)` and `(b, a)` are distinct keys
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bigram {
	first: String,
	second: String,
}

impl Bigram {
	/// Creates a bigram from two tokens.
	pub fn new(first: &str, second: &str) -> Self {
		Self {
			first: first.to_owned(),
			second: second.to_owned(),
		}
	}

	pub fn first(&self) -> &str {
		&self.first
	}

	pub fn second(&self) -> &str {
		&self.second
	}

	/// Returns the key that follows this one once `next` has been emitted.
	///
	/// Example: `(hi, there)` followed by `mary` → `(there, mary)`
	pub fn shift(&self, next: &str) -> Self {
		Self::new(&self.second, next)
	}
}

impl fmt::Display for Bigram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.first, self.second)
	}
}
