//! Bigram Markov chain text generation library.
//!
//! This crate provides a word-level Markov chain system including:
//! - Chain construction from a whitespace-tokenized corpus
//! - Random-walk text generation over the chain
//! - Configuration of the corpus location
//! - Internal utilities for corpus loading
//!
//! Corpus loading is kept internal; callers go through
//! [`model::generator::TextGenerator`] or build a
//! [`model::chain_model::ChainModel`] from text they already hold.

/// Chain model, bigram keys and generation logic.
pub mod model;

/// Runtime configuration (corpus location).
pub mod config;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;
