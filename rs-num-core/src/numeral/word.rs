use std::iter;

/// Descending (magnitude, word) pairs.
///
/// Tens are named individually down to twenty, then every value
/// from nineteen to one has its own word.
const UNITS: [(u64, &str); 31] = [
	(1_000_000_000, "billion"),
	(1_000_000, "million"),
	(1_000, "thousand"),
	(100, "hundred"),
	(90, "ninety"), (80, "eighty"), (70, "seventy"), (60, "sixty"),
	(50, "fifty"), (40, "forty"), (30, "thirty"), (20, "twenty"),
	(19, "nineteen"), (18, "eighteen"), (17, "seventeen"), (16, "sixteen"),
	(15, "fifteen"), (14, "fourteen"), (13, "thirteen"), (12, "twelve"),
	(11, "eleven"), (10, "ten"), (9, "nine"), (8, "eight"), (7, "seven"),
	(6, "six"), (5, "five"), (4, "four"), (3, "three"), (2, "two"), (1, "one"),
];

const ZERO: &str = "zero";
const NEGATIVE: &str = "negative";

/// Converts `n` to English words.
///
/// Examples:
/// - `0` → `"zero"`
/// - `-5` → `"negative five"`
/// - `7232` → `"seven thousand two hundred and thirty-two"`
///
/// The whole `i64` range is supported, `i64::MIN` included.
pub fn word(n: i64) -> String {
	if n < 0 {
		return format!("{} {}", NEGATIVE, cardinal(n.unsigned_abs()));
	}
	cardinal(n as u64)
}

/// Converts `n` to English words followed by `precision` decimal digits.
///
/// The integer part is rendered like [`word`]. When `precision > 0`,
/// `" point"` is appended followed by one digit word per decimal place.
/// Digits come from the shortest decimal text that reads back as `n`,
/// so `2.3` yields a three and not the two hiding in its binary form.
/// Missing places are zeros, extra places are truncated, not rounded.
///
/// Examples:
/// - `(3.25, 2)` → `"three point two five"`
/// - `(-0.5, 1)` → `"negative zero point five"`
/// - `(12.0, 0)` → `"twelve"`
///
/// Non-finite inputs render as `"not a number"`, `"infinity"` or
/// `"negative infinity"`.
pub fn word_float(n: f64, precision: usize) -> String {
	if n.is_nan() {
		return "not a number".to_owned();
	}
	if n.is_sign_negative() && n != 0.0 {
		return format!("{} {}", NEGATIVE, word_float(-n, precision));
	}
	if n.is_infinite() {
		return "infinity".to_owned();
	}

	let whole = n.trunc();
	// Saturates above u64::MAX
	let mut words = cardinal(whole as u64);
	if precision == 0 {
		return words;
	}

	words.push_str(" point");
	// Display for f64 never switches to exponent notation
	let text = n.to_string();
	let fraction = text.split_once('.').map_or("", |(_, digits)| digits);
	for digit in fraction.chars().chain(iter::repeat('0')).take(precision) {
		words.push(' ');
		words.push_str(&cardinal(u64::from(digit.to_digit(10).unwrap_or(0))));
	}
	words
}

/// Renders a non-negative value.
///
/// Walks `UNITS` from the largest magnitude down. Multipliers above one
/// ("two million", "one hundred and twenty thousand") are rendered by
/// recursion, whose depth is bounded by the four large units.
fn cardinal(mut n: u64) -> String {
	if n == 0 {
		return ZERO.to_owned();
	}

	let mut words = String::new();
	for (magnitude, unit) in UNITS {
		let instances = n / magnitude;
		n %= magnitude;
		if instances == 0 {
			continue;
		}

		if !words.is_empty() && !words.ends_with('-') {
			words.push_str(if magnitude < 100 { " and " } else { " " });
		}

		if instances == 1 {
			if magnitude >= 100 {
				words.push_str("one ");
			}
			words.push_str(unit);
			// Compound tens, e.g. "sixty-nine"
			if magnitude < 100 && n != 0 {
				words.push('-');
			}
		} else {
			words.push_str(&cardinal(instances));
			words.push(' ');
			words.push_str(unit);
		}
	}
	words
}
