//! Top-level module for the numeral converters.
//!
//! This module groups every representation the crate can produce:
//! - Alphabet handling and validation (`Alphabet`, `AlphabetPolicy`)
//! - Positional encoding over an alphabet (`Encoder`)
//! - Roman numerals
//! - English words
//! - Human-readable byte sizes (`ByteFormatter`)

/// Ordered set of distinct graphemes used as numerals.
///
/// Handles splitting, duplicate detection and the minimum radix rule.
pub mod alphabet;

/// Positional (place-value) encoding over an arbitrary alphabet.
///
/// Also provides the fixed base-52 letter encoding.
pub mod encoder;

/// Classical Roman numerals built from a subtractive-pair table.
pub mod roman;

/// English cardinal numbers, with a decimal extension.
pub mod word;

/// Byte counts scaled to B/KB/MB/GB.
pub mod bytes;
