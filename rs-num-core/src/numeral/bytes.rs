use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{NumeralError, Result};

/// Display units, scaled by powers of 1024.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteUnit {
	B,
	KB,
	MB,
	GB,
}

impl ByteUnit {
	/// Number of bytes in one unit.
	pub fn size(self) -> u64 {
		match self {
			ByteUnit::B => 1,
			ByteUnit::KB => 1 << 10,
			ByteUnit::MB => 1 << 20,
			ByteUnit::GB => 1 << 30,
		}
	}

	/// Suffix appended to the formatted value.
	pub fn label(self) -> &'static str {
		match self {
			ByteUnit::B => "B",
			ByteUnit::KB => "KB",
			ByteUnit::MB => "MB",
			ByteUnit::GB => "GB",
		}
	}
}

/// Scaled units, largest first.
const SCALED_UNITS: [ByteUnit; 3] = [ByteUnit::GB, ByteUnit::MB, ByteUnit::KB];

/// Default ratio a count must exceed to be shown in a unit.
pub const DEFAULT_THRESHOLD: f64 = 0.95;

/// Formats byte counts with the largest fitting unit.
///
/// A unit fits when `n / unit_size > threshold`. Scaled values whose
/// fractional part is below 0.1 or above 0.9 are rounded to an integer,
/// the others keep one decimal place.
///
/// # Invariants
/// - `threshold` is in `(0.0, 1.0]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ByteFormatter {
	threshold: f64,
}

impl Default for ByteFormatter {
	fn default() -> Self {
		Self { threshold: DEFAULT_THRESHOLD }
	}
}

impl ByteFormatter {
	/// Returns the current threshold.
	pub fn threshold(&self) -> f64 {
		self.threshold
	}

	/// Sets the threshold used to pick a unit.
	///
	/// # Errors
	/// Returns `InvalidThreshold` if the value is outside `(0.0, 1.0]`.
	pub fn set_threshold(&mut self, threshold: f64) -> Result<()> {
		if !(threshold > 0.0 && threshold <= 1.0) {
			return Err(NumeralError::InvalidThreshold(threshold));
		}
		self.threshold = threshold;
		Ok(())
	}

	/// Picks the largest unit `n` fills past the threshold, or `B`.
	pub fn unit_for(&self, n: u64) -> ByteUnit {
		SCALED_UNITS
			.into_iter()
			.find(|unit| n as f64 / unit.size() as f64 > self.threshold)
			.unwrap_or(ByteUnit::B)
	}

	/// Formats `n` bytes.
	///
	/// Plain bytes never carry a decimal point: `600` gives `"600B"`.
	pub fn format(&self, n: u64) -> String {
		let unit = self.unit_for(n);
		trace!("formatting {} bytes as {:?}", n, unit);
		if unit == ByteUnit::B {
			return format!("{}{}", n, unit.label());
		}

		let value = n as f64 / unit.size() as f64;
		let fraction = value - value.floor();
		if fraction < 0.1 || fraction > 0.9 {
			format!("{:.0}{}", value.round(), unit.label())
		} else {
			format!("{:.1}{}", value, unit.label())
		}
	}
}

/// Formats a byte count with the default formatter.
///
/// ```
/// use rs_num_core::bytes;
///
/// assert_eq!(bytes(1000), "1KB");
/// assert_eq!(bytes(70_000_000_000), "65.2GB");
/// ```
pub fn bytes(n: u64) -> String {
	ByteFormatter::default().format(n)
}
