use std::sync::LazyLock;

use log::{debug, trace};

use super::alphabet::{Alphabet, AlphabetPolicy};
use crate::error::{NumeralError, Result};

/// The 52 upper and lower case Latin letters, in that order.
pub const ALPHA_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

static ALPHA_ENCODER: LazyLock<Encoder> =
	LazyLock::new(|| Encoder::from_alphabet(Alphabet::from_distinct_chars(ALPHA_ALPHABET)));

/// Positional encoder over a pre-validated alphabet.
///
/// The alphabet is split and checked once, then reused for every call,
/// which makes `Encoder` the right tool when encoding many values.
///
/// This is a direct place-value system: the first symbol is the zero
/// digit and value `radix` is written as `symbol(1) symbol(0)`, just like
/// decimal "10". It is not a bijective (zero-less) numeration.
#[derive(Clone, Debug)]
pub struct Encoder {
	alphabet: Alphabet,
}

impl Encoder {
	/// Creates an encoder with the strict alphabet policy.
	///
	/// # Errors
	/// Any alphabet validation failure (`EmptyAlphabet`, `InvalidAlphabet`,
	/// `AlphabetTooShort`).
	pub fn new(alphabet: &str) -> Result<Self> {
		Self::with_policy(alphabet, AlphabetPolicy::Strict)
	}

	/// Creates an encoder with an explicit alphabet policy.
	pub fn with_policy(alphabet: &str, policy: AlphabetPolicy) -> Result<Self> {
		Ok(Self::from_alphabet(Alphabet::parse_with(alphabet, policy)?))
	}

	/// Wraps an already validated alphabet.
	pub fn from_alphabet(alphabet: Alphabet) -> Self {
		Self { alphabet }
	}

	/// The base-52 letter encoder (`A` = 0 … `z` = 51).
	pub fn alpha() -> &'static Self {
		&ALPHA_ENCODER
	}

	/// The radix, i.e. the number of symbols.
	pub fn radix(&self) -> usize {
		self.alphabet.len()
	}

	/// The underlying alphabet.
	pub fn alphabet(&self) -> &Alphabet {
		&self.alphabet
	}

	/// Encodes `n`, most significant digit first.
	///
	/// # Errors
	/// - `NegativeInput` if `n < 0`.
	/// - `AlphabetTooShort` if `n > 0` and the alphabet has a single symbol
	///   (only reachable with `AlphabetPolicy::Permissive`).
	pub fn encode(&self, n: i64) -> Result<String> {
		if n < 0 {
			debug!("rejected negative input {}", n);
			return Err(NumeralError::NegativeInput(n));
		}

		// Zero is the only value that may start with the zero digit
		if n == 0 {
			return Ok(self.alphabet.zero().to_owned());
		}

		let radix = self.radix();
		if radix < 2 {
			debug!("cannot encode {} with a single-symbol alphabet", n);
			return Err(NumeralError::AlphabetTooShort { len: radix });
		}

		let base = radix as u64;
		let mut quotient = n as u64;
		let mut digits: Vec<&str> = Vec::new();
		while quotient != 0 {
			let remainder = (quotient % base) as usize;
			quotient /= base;
			digits.push(self.alphabet.digit(remainder));
		}
		digits.reverse();

		trace!("encoded {} in base {} with {} digit(s)", n, radix, digits.len());
		Ok(digits.concat())
	}
}

/// Encodes `n` using the characters of `alphabet` as numerals.
///
/// Multi-byte characters (CJK, emoji, combining sequences) count as a single
/// numeral; the radix is the number of user-perceived characters in
/// `alphabet`, not its byte length.
///
/// ```
/// use rs_num_core::encode;
///
/// assert_eq!(encode(0, "世界").unwrap(), "世");
/// assert_eq!(encode(4, "世界").unwrap(), "界世世");
/// ```
///
/// # Errors
/// `NegativeInput` is checked before the alphabet, then any alphabet
/// validation error is returned unchanged.
pub fn encode(n: i64, alphabet: &str) -> Result<String> {
	if n < 0 {
		debug!("rejected negative input {}", n);
		return Err(NumeralError::NegativeInput(n));
	}
	Encoder::new(alphabet)?.encode(n)
}

/// Encodes `n` in base 52 using upper then lower case Latin letters.
///
/// `alpha(0)` is `"A"`, `alpha(51)` is `"z"`, `alpha(52)` is `"BA"`.
///
/// # Errors
/// `NegativeInput` if `n < 0`.
pub fn alpha(n: i64) -> Result<String> {
	Encoder::alpha().encode(n)
}
