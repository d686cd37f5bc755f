use std::fmt;

use itertools::Itertools;
use tracing::debug;

use crate::numeric::{collapse_if_integral, Number};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
	Bit,
	Byte,
}

impl Kind {
	pub fn suffix(self) -> &'static str {
		match self {
			Kind::Bit => "b",
			Kind::Byte => "B",
		}
	}
}

/// Exact conversion factor, `multiplier / divisor`. Both are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
	pub multiplier: i128,
	pub divisor: i128,
}

impl Ratio {
	fn whole(multiplier: i128) -> Self {
		Self {
			multiplier,
			divisor: 1,
		}
	}

	pub fn as_f64(self) -> f64 {
		self.multiplier as f64 / self.divisor as f64
	}

	/// Scales `value`, staying in integer arithmetic while the result is exact.
	pub fn apply(self, value: Number) -> Number {
		let exact = match value {
			Number::Int(n) => n
				.checked_mul(self.multiplier)
				.filter(|scaled| scaled % self.divisor == 0)
				.map(|scaled| Number::Int(scaled / self.divisor)),
			Number::Float(_) => None,
		};
		exact.unwrap_or_else(|| {
			collapse_if_integral(Number::Float(
				value.as_f64() * self.multiplier as f64 / self.divisor as f64,
			))
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitEntry {
	kind: Kind,
	ordinal: usize,
	prefix: &'static str,
	symbol: String,
	to_bits: Ratio,
	to_bytes: Ratio,
}

impl UnitEntry {
	pub fn kind(&self) -> Kind {
		self.kind
	}

	/// Position of the prefix in its standard's prefix sequence.
	pub fn ordinal(&self) -> usize {
		self.ordinal
	}

	pub fn prefix(&self) -> &'static str {
		self.prefix
	}

	pub fn symbol(&self) -> &str {
		&self.symbol
	}

	pub fn to_bits_ratio(&self) -> Ratio {
		self.to_bits
	}

	pub fn to_bytes_ratio(&self) -> Ratio {
		self.to_bytes
	}
}

impl fmt::Display for UnitEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.symbol)
	}
}

/// Every bit and byte unit of one standard, ordered by prefix ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTable {
	base: u32,
	bits: Vec<UnitEntry>,
	bytes: Vec<UnitEntry>,
}

impl UnitTable {
	/// Builds the table for `base` and `prefixes`, where `prefixes[0]` is the empty prefix.
	///
	/// A prefix at ordinal `i` scales by `base^i`; byte units carry an extra factor of 8.
	pub fn build(base: u32, prefixes: &[&'static str]) -> Self {
		let entries = |kind: Kind| {
			prefixes
				.iter()
				.enumerate()
				.map(|(ordinal, &prefix)| {
					let scale = (0..ordinal).fold(1i128, |acc, _| acc * i128::from(base));
					let (to_bits, to_bytes) = match kind {
						Kind::Bit => (
							Ratio::whole(scale),
							Ratio {
								multiplier: scale,
								divisor: 8,
							},
						),
						Kind::Byte => (Ratio::whole(8 * scale), Ratio::whole(scale)),
					};
					UnitEntry {
						kind,
						ordinal,
						prefix,
						symbol: format!("{prefix}{}", kind.suffix()),
						to_bits,
						to_bytes,
					}
				})
				.collect_vec()
		};

		let table = Self {
			base,
			bits: entries(Kind::Bit),
			bytes: entries(Kind::Byte),
		};
		debug!(
			base,
			exponent_limit = table.exponent_limit(),
			"built unit table"
		);
		table
	}

	pub fn base(&self) -> u32 {
		self.base
	}

	/// Largest prefix ordinal in the table.
	pub fn exponent_limit(&self) -> usize {
		self.bits.len().saturating_sub(1)
	}

	pub fn entries(&self, kind: Kind) -> &[UnitEntry] {
		match kind {
			Kind::Bit => &self.bits,
			Kind::Byte => &self.bytes,
		}
	}

	pub fn entry(&self, kind: Kind, ordinal: usize) -> Option<&UnitEntry> {
		self.entries(kind).get(ordinal)
	}

	pub fn iter(&self) -> impl Iterator<Item = &UnitEntry> {
		self.bits.iter().chain(&self.bytes)
	}

	pub fn lookup(&self, symbol: &str) -> Option<&UnitEntry> {
		self.iter().find(|entry| entry.symbol == symbol)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ratios_follow_base_powers() {
		let table = UnitTable::build(1000, &["", "k", "M"]);
		assert_eq!(table.exponent_limit(), 2);

		let megabit = table.entry(Kind::Bit, 2).unwrap();
		assert_eq!(megabit.symbol(), "Mb");
		assert_eq!(megabit.to_bits_ratio().as_f64(), 1e6);
		assert_eq!(megabit.to_bytes_ratio().as_f64(), 125_000.0);

		let kilobyte = table.lookup("kB").unwrap();
		assert_eq!(kilobyte.kind(), Kind::Byte);
		assert_eq!(kilobyte.ordinal(), 1);
		assert_eq!(kilobyte.to_bits_ratio().as_f64(), 8000.0);
		assert_eq!(kilobyte.to_bytes_ratio().as_f64(), 1000.0);
	}

	#[test]
	fn byte_ratio_is_eight_bit_ratios() {
		let table = UnitTable::build(1024, &["", "Ki", "Mi", "Gi"]);
		for (bit, byte) in table.entries(Kind::Bit).iter().zip(table.entries(Kind::Byte)) {
			assert_eq!(bit.ordinal(), byte.ordinal());
			assert_eq!(
				byte.to_bits_ratio().multiplier,
				8 * bit.to_bits_ratio().multiplier
			);
		}
	}

	#[test]
	fn ratio_application() {
		let eighth = Ratio {
			multiplier: 1,
			divisor: 8,
		};
		assert_eq!(eighth.apply(Number::Int(16)), Number::Int(2));
		assert_eq!(eighth.apply(Number::Int(1)), Number::Float(0.125));
		assert_eq!(eighth.apply(Number::Float(4.0)), Number::Float(0.5));
		assert_eq!(Ratio::whole(1000).apply(Number::Float(1.5)), Number::Int(1500));
		assert_eq!(
			Ratio::whole(i128::MAX).apply(Number::Int(2)),
			Number::Float(2.0 * i128::MAX as f64)
		);
	}

	#[test]
	fn unknown_symbol() {
		let table = UnitTable::build(1024, &["", "K"]);
		assert!(table.lookup("KiB").is_none());
		assert!(table.lookup("kB").is_none());
		assert!(table.lookup("KB").is_some());
	}
}
