use thiserror::Error;

/// Errors returned by the numeral converters.
///
/// Every failure is local to a single call: nothing is retried or logged
/// as an error by the library, callers decide what to do with it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumeralError {
	/// The input was negative where the representation requires `n >= 0`.
	#[error("input cannot be a negative number, got {0}")]
	NegativeInput(i64),

	/// Roman numerals have no symbol for zero.
	#[error("input cannot be zero")]
	ZeroInput,

	/// The alphabet string was empty.
	#[error("alphabet cannot be empty")]
	EmptyAlphabet,

	/// The alphabet has fewer than two symbols and cannot act as a radix.
	#[error("alphabet must contain at least two characters, got {len}")]
	AlphabetTooShort { len: usize },

	/// The alphabet repeats a character.
	#[error("alphabet contains duplicate character '{grapheme}'")]
	InvalidAlphabet { grapheme: String },

	/// A byte formatter threshold outside of `(0, 1]`.
	#[error("threshold must be in (0.0, 1.0], got {0}")]
	InvalidThreshold(f64),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NumeralError>;
