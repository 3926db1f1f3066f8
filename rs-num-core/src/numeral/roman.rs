use log::debug;

use crate::error::{NumeralError, Result};

/// Descending (magnitude, symbol) pairs, subtractive pairs included.
const NUMERALS: [(u64, &str); 13] = [
	(1000, "M"), (900, "CM"),
	(500, "D"), (400, "CD"),
	(100, "C"), (90, "XC"),
	(50, "L"), (40, "XL"),
	(10, "X"), (9, "IX"),
	(5, "V"), (4, "IV"),
	(1, "I"),
];

/// Converts `n` to a Roman numeral.
///
/// There is no numeral above M, so values over a few thousand simply
/// repeat it: 4859 gives `"MMMMDCCCLIX"`. The output grows linearly
/// with `n`, so very large inputs are bounded by available memory
/// (near `i64::MAX` the allocation fails).
///
/// ```
/// use rs_num_core::roman;
///
/// assert_eq!(roman(1991).unwrap(), "MCMXCI");
/// ```
///
/// # Errors
/// - `ZeroInput` if `n == 0`.
/// - `NegativeInput` if `n < 0`.
pub fn roman(n: i64) -> Result<String> {
	if n == 0 {
		debug!("rejected zero input for roman numeral");
		return Err(NumeralError::ZeroInput);
	}
	if n < 0 {
		debug!("rejected negative input {} for roman numeral", n);
		return Err(NumeralError::NegativeInput(n));
	}

	let mut n = n as u64;
	let mut numeral = String::new();
	for (magnitude, symbol) in NUMERALS {
		numeral.push_str(&symbol.repeat((n / magnitude) as usize));
		n %= magnitude;
	}
	Ok(numeral)
}
