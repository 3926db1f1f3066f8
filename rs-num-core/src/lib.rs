//! Numeral representation library.
//!
//! This crate turns base-10 integers into alternative textual representations:
//! - Positional encoding over an arbitrary, caller-supplied alphabet
//! - Base-52 letter encoding built on top of it
//! - Classical Roman numerals
//! - English cardinal words (with a decimal extension)
//! - Human-readable byte sizes
//!
//! Every operation is a pure function: no I/O, no shared state.
//! The free functions re-exported here are the intended entry points,
//! the `numeral` module exposes the reusable building blocks behind them.

/// Error taxonomy shared by every converter.
pub mod error;

/// Numeral converters (positional, Roman, words, byte sizes).
///
/// Each component lives in its own module and can be used directly
/// when the free functions are not flexible enough.
pub mod numeral;

/// Unicode helpers (grapheme splitting).
pub mod text;

pub use error::{NumeralError, Result};
pub use numeral::bytes::bytes;
pub use numeral::encoder::{alpha, encode};
pub use numeral::roman::roman;
pub use numeral::word::{word, word_float};
