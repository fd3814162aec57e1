//! An ordered pile of cards, with pluggable randomness.
//!
//! A [`Deck`] supports inspecting, drawing and discarding at the top, the bottom, at random or by
//! predicate, and shuffling. All randomness is drawn from a [`RandomSource`] supplied by the
//! caller, so that seeded or scripted sources can stand in for real ones.

pub mod deck;
pub mod error;
pub mod french;
pub mod logging;
pub mod random;

pub use self::deck::{Deck, RawDeck};
pub use self::error::DeckError;
pub use self::logging::{LoggingDeck, RawLog};
pub use self::random::{RandomSource, RngSource, Scripted};
