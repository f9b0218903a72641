//! Top-level module for the Markov chain generation system.
//!
//! This module provides:
//! - Bigram keys (`Bigram`)
//! - The chain mapping and its builder (`ChainModel`)
//! - Random-walk generation (`generate_text`, `TextGenerator`)

/// Ordered pair of consecutive corpus tokens.
pub mod bigram;

/// Bigram → successors mapping.
///
/// Handles corpus ingestion, explicit successor lookups
/// and uniform random selection of keys and successors.
pub mod chain_model;

/// Random walk over a `ChainModel`.
///
/// Exposes a free function taking any `rand::Rng` and a
/// generator bound to a configured corpus.
pub mod generator;
