use std::fmt;

/// Floats whose magnitude is at or above 2^53 have no fractional digits left.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;
/// 2^127, the first magnitude that no longer fits an `i128`.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// A quantity that is either an exact integer or a float.
///
/// Results are collapsed to [`Number::Int`] whenever they are numerically whole, so
/// `8` and `8.0` are different values even though they compare equal through
/// [`Number::as_f64`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	Int(i128),
	Float(f64),
}

impl Number {
	pub fn as_f64(self) -> f64 {
		match self {
			Number::Int(n) => n as f64,
			Number::Float(n) => n,
		}
	}

	pub fn is_integer(self) -> bool {
		matches!(self, Number::Int(_))
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Number::Int(n) => write!(f, "{n}"),
			Number::Float(n) => write!(f, "{n}"),
		}
	}
}

macro_rules! impl_from_int {
	($($t: ty),+) => {
		$(impl From<$t> for Number {
			fn from(value: $t) -> Self {
				Number::Int(i128::from(value))
			}
		})+
	};
}

impl_from_int!(u8, i8, u16, i16, u32, i32, u64, i64, i128);

impl From<usize> for Number {
	fn from(value: usize) -> Self {
		Number::Int(value as i128)
	}
}

impl From<isize> for Number {
	fn from(value: isize) -> Self {
		Number::Int(value as i128)
	}
}

impl From<u128> for Number {
	fn from(value: u128) -> Self {
		i128::try_from(value)
			.map(Number::Int)
			.unwrap_or(Number::Float(value as f64))
	}
}

impl From<f32> for Number {
	fn from(value: f32) -> Self {
		Number::Float(f64::from(value))
	}
}

impl From<f64> for Number {
	fn from(value: f64) -> Self {
		Number::Float(value)
	}
}

/// Folds a numerically whole float back into an integer, leaving everything else as is.
pub fn collapse_if_integral(n: Number) -> Number {
	match n {
		Number::Float(f) if f.is_finite() && f.round() == f && f.abs() < I128_BOUND => {
			Number::Int(f as i128)
		}
		other => other,
	}
}

/// `base^e` as a float, exact whenever the power fits in a `u128`.
pub fn power(base: u32, e: i32) -> f64 {
	u32::try_from(e)
		.ok()
		.and_then(|e| u128::from(base).checked_pow(e))
		.map(|p| p as f64)
		.unwrap_or_else(|| f64::from(base).powi(e))
}

/// Magnitude class of `n` in `base`, i.e. `floor(log_base(|n|))`.
///
/// Zero (either sign) and non-finite values have exponent 0. `base` must be greater than 1.
pub fn exponent(n: f64, base: u32) -> i32 {
	let magnitude = n.abs();
	if magnitude == 0.0 || !magnitude.is_finite() {
		return 0;
	}
	let mut e = magnitude.log(f64::from(base)).floor() as i32;
	// the logarithm drifts by an ulp around exact powers of the base
	if power(base, e.saturating_add(1)) <= magnitude {
		e += 1;
	} else if power(base, e) > magnitude {
		e -= 1;
	}
	e
}

/// Rounds half away from zero to `precision` decimal places.
pub fn round_to_precision(n: f64, precision: u32) -> f64 {
	let factor = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
	let scaled = n * factor;
	if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_FLOAT {
		return n;
	}
	scaled.round() / factor
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn collapse_whole_floats() {
		assert_eq!(collapse_if_integral(Number::Float(1.0)), Number::Int(1));
		assert_eq!(collapse_if_integral(Number::Float(-0.0)), Number::Int(0));
		assert_eq!(collapse_if_integral(Number::Float(8e30)), Number::Int(8e30 as i128));
		assert_eq!(collapse_if_integral(Number::Float(1.5)), Number::Float(1.5));
		assert_eq!(collapse_if_integral(Number::Int(7)), Number::Int(7));
	}

	#[test]
	fn collapse_keeps_out_of_range_floats() {
		assert_eq!(collapse_if_integral(Number::Float(1e40)), Number::Float(1e40));
		assert_eq!(
			collapse_if_integral(Number::Float(f64::INFINITY)),
			Number::Float(f64::INFINITY)
		);
		assert!(matches!(collapse_if_integral(Number::Float(f64::NAN)), Number::Float(n) if n.is_nan()));
	}

	#[test]
	fn exponent_of_exact_powers() {
		assert_eq!(exponent(1.0, 1000), 0);
		assert_eq!(exponent(999.0, 1000), 0);
		assert_eq!(exponent(1000.0, 1000), 1);
		assert_eq!(exponent(1e6, 1000), 2);
		assert_eq!(exponent(1e15, 1000), 5);
		assert_eq!(exponent(1e30, 1000), 10);
		assert_eq!(exponent(1024.0, 1024), 1);
		assert_eq!(exponent(1023.0, 1024), 0);
		assert_eq!(exponent(2f64.powi(80), 1024), 8);
		assert_eq!(exponent(2f64.powi(80) - 2f64.powi(30), 1024), 7);
	}

	#[test]
	fn exponent_special_cases() {
		assert_eq!(exponent(0.0, 1000), 0);
		assert_eq!(exponent(-0.0, 1024), 0);
		assert_eq!(exponent(-8192.0, 1000), 1);
		assert_eq!(exponent(0.5, 1000), -1);
		assert!(exponent(f64::MIN_POSITIVE / 4.0, 1024) < 0);
		assert_eq!(exponent(f64::NAN, 1000), 0);
	}

	#[test]
	fn rounding() {
		assert_eq!(round_to_precision(8.192, 2), 8.19);
		assert_eq!(round_to_precision(1.024, 2), 1.02);
		assert_eq!(round_to_precision(2.5, 0), 3.0);
		assert_eq!(round_to_precision(-2.5, 0), -3.0);
		assert_eq!(round_to_precision(1.23456, 4), 1.2346);
		assert_eq!(round_to_precision(1e300, 2), 1e300);
		assert_eq!(round_to_precision(0.1, 400), 0.1);
		assert_eq!(round_to_precision(0.0, 400), 0.0);
	}

	#[test]
	fn display() {
		assert_eq!(Number::Int(8).to_string(), "8");
		assert_eq!(Number::Float(8.19).to_string(), "8.19");
		assert_eq!(Number::from(u128::MAX), Number::Float(u128::MAX as f64));
	}
}
