use super::bigram::Bigram;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;

/// Represents a word-level bigram Markov chain.
///
/// The `ChainModel` maps every bigram seen in the corpus to the list of
/// words observed immediately after it, and allows random selection of
/// starting keys and successors.
///
/// # Responsibilities
/// - Build the chain from raw text or an already tokenized corpus
/// - Answer explicit optional lookups for a bigram's successors
/// - Pick a random starting key and a random successor
///
/// # Invariants
/// - Every stored key has at least one successor
/// - A key is absent iff it never occurs with a trailing third token
/// - Successor lists keep duplicates, in corpus order
/// - `order` holds every key exactly once, in first-seen order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChainModel {
	/// Mapping from a bigram to the words observed after it
	chains: HashMap<Bigram, Vec<String>>,

	/// Keys in first-seen order, used for uniform (and reproducible) key selection
	order: Vec<Bigram>,
}

impl ChainModel {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a chain from raw text.
	///
	/// No normalization is applied beyond [`ChainModel::tokenize`].
	pub fn from_text(text: &str) -> Self {
		let tokens = Self::tokenize(text);
		Self::from_tokens(&tokens)
	}

	/// Splits raw text into corpus tokens.
	///
	/// Separators are Unicode whitespace plus the information separators
	/// U+001C..=U+001F. Runs of separators never yield empty tokens.
	pub fn tokenize(text: &str) -> Vec<&str> {
		text.split(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
			.filter(|token| !token.is_empty())
			.collect()
	}

	/// Builds a chain from a tokenized corpus.
	///
	/// For each window `(w0, w1, w2)` of three consecutive tokens, `w2` is
	/// appended to the successors of `(w0, w1)`.
	///
	/// # Notes
	/// - Corpora shorter than 3 tokens yield an empty chain.
	/// - The final bigram of the corpus never gets an entry.
	pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
		let mut model = Self::new();
		for window in tokens.windows(3) {
			let key = Bigram::new(window[0].as_ref(), window[1].as_ref());
			model.add_transition(key, window[2].as_ref());
		}
		log::debug!(
			"Built chain: {} tokens, {} bigrams, {} transitions",
			tokens.len(),
			model.len(),
			model.transition_count()
		);
		model
	}

	/// Records that `next` was observed after `key`.
	fn add_transition(&mut self, key: Bigram, next: &str) {
		match self.chains.get_mut(&key) {
			Some(successors) => successors.push(next.to_owned()),
			None => {
				self.order.push(key.clone());
				self.chains.insert(key, vec![next.to_owned()]);
			}
		}
	}

	/// Returns the successors recorded for `key`, or `None` if the bigram
	/// never occurred with a following word.
	pub fn successors(&self, key: &Bigram) -> Option<&[String]> {
		self.chains.get(key).map(Vec::as_slice)
	}

	/// Returns all keys, in the order they were first seen in the corpus.
	pub fn keys(&self) -> impl Iterator<Item = &Bigram> {
		self.order.iter()
	}

	/// Number of distinct bigram keys.
	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// Total number of recorded transitions (sum of successor list lengths).
	///
	/// Always `max(0, tokens - 2)` for the corpus the chain was built from.
	pub fn transition_count(&self) -> usize {
		self.chains.values().map(Vec::len).sum()
	}

	/// Returns a uniformly chosen key.
	///
	/// Returns `None` if the chain is empty.
	pub fn random_key<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Bigram> {
		self.order.choose(rng)
	}

	/// Returns a uniformly chosen successor of `key`.
	///
	/// Duplicated successors are weighted by their number of occurrences.
	/// Returns `None` if `key` is unknown.
	pub fn random_successor<R: Rng + ?Sized>(&self, key: &Bigram, rng: &mut R) -> Option<&str> {
		self.successors(key)?.choose(rng).map(String::as_str)
	}
}
