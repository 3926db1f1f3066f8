use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rs_num_core::numeral::alphabet::Alphabet;
use rs_num_core::numeral::encoder::{ALPHA_ALPHABET, Encoder};
use rs_num_core::text::split_graphemes;
use rs_num_core::{NumeralError, alpha, bytes, encode, roman, word};

const ALPHABETS: [&str; 6] = [
	"0123456789",
	"世界",
	"世界地球風火空水稲妻太陽",
	"😀😁😂🤣😄😅",
	"!@#$%^&*()",
	ALPHA_ALPHABET,
];

const SAMPLES: usize = 500;

/// Digit values of an encoded string, most significant first.
fn digits(encoded: &str, alphabet: &Alphabet) -> Vec<usize> {
	let positions: HashMap<&str, usize> = alphabet.iter().enumerate().map(|(i, s)| (s, i)).collect();
	split_graphemes(encoded)
		.iter()
		.map(|g| positions[g.as_str()])
		.collect()
}

#[test]
fn encodings_only_use_alphabet_symbols() {
	let mut rng = StdRng::seed_from_u64(0x5eed);
	for source in ALPHABETS {
		let alphabet = Alphabet::parse(source).unwrap();
		assert_eq!(encode(0, source).unwrap(), alphabet.zero());
		for _ in 0..SAMPLES {
			let n = rng.random_range(0..i64::MAX);
			let encoded = encode(n, source).unwrap();
			for grapheme in split_graphemes(&encoded) {
				assert!(alphabet.iter().any(|s| s == grapheme), "{} not in {}", grapheme, source);
			}
		}
	}
}

#[test]
fn encodings_preserve_numeric_order() {
	let mut rng = StdRng::seed_from_u64(7);
	for source in ALPHABETS {
		let encoder = Encoder::new(source).unwrap();
		for _ in 0..SAMPLES {
			let a = rng.random_range(0..10_000_000i64);
			let b = rng.random_range(0..10_000_000i64);
			let (low, high) = if a <= b { (a, b) } else { (b, a) };

			let low_digits = digits(&encoder.encode(low).unwrap(), encoder.alphabet());
			let high_digits = digits(&encoder.encode(high).unwrap(), encoder.alphabet());

			assert!(low_digits.len() <= high_digits.len());
			if low_digits.len() == high_digits.len() {
				assert!(low_digits <= high_digits, "{} vs {} in {}", low, high, source);
			}
		}
	}
}

#[test]
fn higher_positions_never_start_with_zero_digit() {
	let encoder = Encoder::new("世界地球風火空水稲妻太陽").unwrap();
	for n in 1..2_000 {
		let encoded = encoder.encode(n).unwrap();
		assert!(!encoded.starts_with(encoder.alphabet().zero()), "{} -> {}", n, encoded);
	}
}

#[test]
fn reused_encoder_matches_free_function() {
	let encoder = Encoder::new("😀😁😂🤣😄😅").unwrap();
	for n in 0..500 {
		assert_eq!(encoder.encode(n).unwrap(), encode(n, "😀😁😂🤣😄😅").unwrap());
	}
}

#[test]
fn negative_input_fails_for_any_alphabet() {
	for source in ALPHABETS.iter().copied().chain(["", "aa", "a"]) {
		assert_eq!(encode(-1, source), Err(NumeralError::NegativeInput(-1)));
	}
	assert_eq!(encode(3, ""), Err(NumeralError::EmptyAlphabet));
	assert_eq!(encode(3, "aa"), Err(NumeralError::InvalidAlphabet { grapheme: "a".to_owned() }));
}

#[test]
fn repeated_calls_are_identical() {
	let mut rng = StdRng::seed_from_u64(99);
	for _ in 0..SAMPLES {
		let n = rng.random_range(1..5_000i64);
		assert_eq!(alpha(n), alpha(n));
		assert_eq!(roman(n), roman(n));
		assert_eq!(word(n), word(n));
		assert_eq!(bytes(n as u64 * 1_000), bytes(n as u64 * 1_000));
	}
}

#[test]
fn worked_examples() {
	assert_eq!(encode(0, "世界").unwrap(), "世");
	assert_eq!(encode(4, "世界").unwrap(), "界世世");
	assert_eq!(encode(67427, "!@#$%^&*()").unwrap(), "&*%#*");
	assert_eq!(alpha(52).unwrap(), "BA");
	assert_eq!(alpha(0).unwrap(), "A");

	assert_eq!(roman(1991).unwrap(), "MCMXCI");
	assert_eq!(roman(0), Err(NumeralError::ZeroInput));
	assert_eq!(roman(-1), Err(NumeralError::NegativeInput(-1)));
	assert_eq!(roman(4859).unwrap(), "MMMMDCCCLIX");

	assert_eq!(word(0), "zero");
	assert_eq!(word(-5), "negative five");
	assert_eq!(word(7232), "seven thousand two hundred and thirty-two");

	assert_eq!(bytes(1000), "1KB");
	assert_eq!(bytes(600), "600B");
	assert_eq!(bytes(70_000_000_000), "65.2GB");
}
