use crate::config::Config;
use crate::error::{ChainError, Result};
use crate::io;
use crate::model::chain_model::ChainModel;
use rand::Rng;

/// Generates text from `chains` by random walk, using `rng` for every choice.
///
/// # Behavior
/// - Picks a uniformly random starting bigram.
/// - Emits a random successor of the current bigram, then shifts the bigram
///   to `(previous second word, emitted word)`.
/// - Stops as soon as the shifted bigram has no recorded successors.
///
/// # Returns
/// - `Ok(String)` with the emitted words joined by single spaces
/// - `Err(ChainError::EmptyChain)` if `chains` has no key to start from
///
/// # Notes
/// - The words of the starting bigram are not part of the output.
/// - There is no length cap. A chain whose reachable keys all have
///   successors walks until the random choices reach a dead key.
pub fn generate_text<R: Rng + ?Sized>(chains: &ChainModel, rng: &mut R) -> Result<String> {
	let mut key = chains.random_key(rng).ok_or(ChainError::EmptyChain)?.clone();
	let mut words: Vec<String> = Vec::new();

	while let Some(next) = chains.random_successor(&key, rng) {
		words.push(next.to_owned());
		key = key.shift(next);
	}

	log::debug!("Generated {} words, stopped at {}", words.len(), key);
	Ok(words.join(" "))
}

/// High-level generator bound to one corpus.
///
/// # Responsibilities
/// - Load the corpus named by a [`Config`]
/// - Build the chain once, keep it read-only afterwards
/// - Generate any number of texts from it
#[derive(Debug)]
pub struct TextGenerator {
	config: Config,
	model: ChainModel,
}

impl TextGenerator {
	/// Creates a generator by reading and indexing `config.input_path`.
	///
	/// # Errors
	/// Returns `ChainError::Io` if the corpus cannot be opened or read.
	pub fn new(config: Config) -> Result<Self> {
		let text = io::read_corpus(&config.input_path)?;
		let model = ChainModel::from_text(&text);
		log::info!(
			"Indexed {} bigrams from {}",
			model.len(),
			config.input_path.display()
		);
		Ok(Self { config, model })
	}

	/// Creates a generator around an already built chain.
	pub fn from_model(config: Config, model: ChainModel) -> Self {
		Self { config, model }
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn model(&self) -> &ChainModel {
		&self.model
	}

	/// Generates one text using the thread-local random source.
	///
	/// # Errors
	/// Returns `ChainError::EmptyChain` if the corpus had fewer than 3 words.
	pub fn generate(&self) -> Result<String> {
		generate_text(&self.model, &mut rand::rng())
	}

	/// Generates one text using the given random source.
	pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		generate_text(&self.model, rng)
	}
}
