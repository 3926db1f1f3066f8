use std::collections::HashSet;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{NumeralError, Result};
use crate::text::split_graphemes;

/// Validation rules applied when building an [`Alphabet`].
///
/// # Variants
/// - `Strict`: at least two distinct symbols are required.
/// - `Permissive`: a single symbol is accepted. Such an alphabet can only
///   encode zero, any positive value fails with `AlphabetTooShort`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlphabetPolicy {
	#[default]
	Strict,
	Permissive,
}

/// An ordered sequence of distinct user-perceived characters.
///
/// The position of a symbol is its digit value: the first symbol is the
/// zero digit, the number of symbols is the radix.
///
/// # Invariants
/// - `symbols` is never empty
/// - No grapheme appears twice
/// - `source` is the NFC-normalized concatenation of `symbols`
///
/// Serialized as its source string. Deserialization always applies the
/// strict policy, so persisted data cannot produce an invalid alphabet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
	source: String,
	symbols: Vec<String>,
}

impl Alphabet {
	/// Splits and validates `alphabet` with the strict policy.
	///
	/// # Errors
	/// - `EmptyAlphabet` if `alphabet` is empty.
	/// - `InvalidAlphabet` if a grapheme repeats (the repeated one is reported).
	/// - `AlphabetTooShort` if fewer than two symbols remain.
	pub fn parse(alphabet: &str) -> Result<Self> {
		Self::parse_with(alphabet, AlphabetPolicy::Strict)
	}

	/// Splits and validates `alphabet` with the given policy.
	///
	/// Checks run in this order: empty, duplicates, length.
	pub fn parse_with(alphabet: &str, policy: AlphabetPolicy) -> Result<Self> {
		let symbols = split_graphemes(alphabet);
		validate(&symbols, policy)?;
		Ok(Self { source: symbols.concat(), symbols })
	}

	/// Builds an alphabet from a string of distinct single-char symbols.
	///
	/// Only used for the built-in constant alphabets, which are known
	/// to be valid.
	pub(crate) fn from_distinct_chars(source: &str) -> Self {
		Self {
			source: source.to_owned(),
			symbols: source.chars().map(String::from).collect(),
		}
	}

	/// Symbol for a digit value known to be below `len()`.
	pub(crate) fn digit(&self, value: usize) -> &str {
		&self.symbols[value]
	}

	/// Number of symbols, i.e. the radix.
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	/// `false` for any alphabet built through `parse`, `parse_with` or
	/// deserialization, which all reject empty input.
	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}

	/// The zero digit (first symbol).
	pub fn zero(&self) -> &str {
		&self.symbols[0]
	}

	/// Returns the symbol for digit value `index`, if any.
	pub fn symbol(&self, index: usize) -> Option<&str> {
		self.symbols.get(index).map(String::as_str)
	}

	/// Iterates over the symbols in digit order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.symbols.iter().map(String::as_str)
	}

	/// The normalized alphabet string.
	pub fn as_str(&self) -> &str {
		&self.source
	}
}

/// Rejects empty, duplicate-bearing, and (under `Strict`) single-symbol alphabets.
fn validate(symbols: &[String], policy: AlphabetPolicy) -> Result<()> {
	if symbols.is_empty() {
		debug!("rejected empty alphabet");
		return Err(NumeralError::EmptyAlphabet);
	}

	let mut seen: HashSet<&str> = HashSet::with_capacity(symbols.len());
	for symbol in symbols {
		if !seen.insert(symbol.as_str()) {
			debug!("rejected alphabet: '{}' appears more than once", symbol);
			return Err(NumeralError::InvalidAlphabet { grapheme: symbol.clone() });
		}
	}

	if policy == AlphabetPolicy::Strict && symbols.len() < 2 {
		debug!("rejected alphabet of {} symbol(s) under strict policy", symbols.len());
		return Err(NumeralError::AlphabetTooShort { len: symbols.len() });
	}

	Ok(())
}

impl TryFrom<String> for Alphabet {
	type Error = NumeralError;

	fn try_from(value: String) -> Result<Self> {
		Self::parse(&value)
	}
}

impl From<Alphabet> for String {
	fn from(alphabet: Alphabet) -> Self {
		alphabet.source
	}
}

impl fmt::Display for Alphabet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}
