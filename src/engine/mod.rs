use std::{fmt, str::FromStr};

use tracing::trace;

use crate::{
	error::ConversionError,
	numeric::{collapse_if_integral, exponent, power, round_to_precision, Number},
	table::{Kind, UnitEntry, UnitTable},
};

pub const DEFAULT_PRECISION: u32 = 2;

/// Which flavour of unit a humanized quantity is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum As {
	Bits,
	#[default]
	Bytes,
}

impl As {
	pub fn kind(self) -> Kind {
		match self {
			As::Bits => Kind::Bit,
			As::Bytes => Kind::Byte,
		}
	}
}

impl fmt::Display for As {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			As::Bits => "bits",
			As::Bytes => "bytes",
		})
	}
}

impl FromStr for As {
	type Err = ConversionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"bits" => Ok(As::Bits),
			"bytes" => Ok(As::Bytes),
			_ => Err(ConversionError::InvalidOption {
				option: "as",
				value: s.to_owned(),
			}),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversionOptions {
	pub target: As,
	/// Decimal places kept in the coefficient.
	pub precision: u32,
}

impl Default for ConversionOptions {
	fn default() -> Self {
		Self {
			target: As::default(),
			precision: DEFAULT_PRECISION,
		}
	}
}

impl ConversionOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_as(self, target: As) -> Self {
		Self { target, ..self }
	}

	pub fn with_precision(self, precision: u32) -> Self {
		Self { precision, ..self }
	}

	/// Builds options from loosely typed input, falling back to the defaults for missing values.
	pub fn parse(target: Option<&str>, precision: Option<i64>) -> Result<Self, ConversionError> {
		let mut options = Self::default();
		if let Some(target) = target {
			options.target = target.parse()?;
		}
		if let Some(precision) = precision {
			options.precision =
				u32::try_from(precision).map_err(|_| ConversionError::InvalidOption {
					option: "precision",
					value: precision.to_string(),
				})?;
		}
		Ok(options)
	}
}

pub fn to_bits(unit: &UnitEntry, value: Number) -> Number {
	unit.to_bits_ratio().apply(value)
}

pub fn to_bytes(unit: &UnitEntry, value: Number) -> Number {
	unit.to_bytes_ratio().apply(value)
}

/// Picks the best fitting unit of `table` for a raw bit count.
pub fn from_bits(
	table: &UnitTable,
	bits: Number,
	ConversionOptions { target, precision }: ConversionOptions,
) -> (Number, &UnitEntry) {
	let magnitude = match target {
		As::Bits => bits.as_f64(),
		As::Bytes => bits.as_f64() / 8.0,
	};
	humanize(table, magnitude, target.kind(), precision)
}

/// Picks the best fitting unit of `table` for a raw byte count.
pub fn from_bytes(
	table: &UnitTable,
	bytes: Number,
	ConversionOptions { target, precision }: ConversionOptions,
) -> (Number, &UnitEntry) {
	let magnitude = match target {
		As::Bits => bytes.as_f64() * 8.0,
		As::Bytes => bytes.as_f64(),
	};
	humanize(table, magnitude, target.kind(), precision)
}

fn humanize(table: &UnitTable, magnitude: f64, kind: Kind, precision: u32) -> (Number, &UnitEntry) {
	let raw = exponent(magnitude, table.base());
	// no fractional prefixes below ordinal 0, saturate above the largest one
	let e = usize::try_from(raw)
		.unwrap_or(0)
		.min(table.exponent_limit());
	if usize::try_from(raw) != Ok(e) {
		trace!(raw, clamped = e, "exponent clamped");
	}

	let unit = &table.entries(kind)[e];
	let scaled = magnitude / power(table.base(), e as i32);
	let coefficient = collapse_if_integral(Number::Float(round_to_precision(scaled, precision)));
	(coefficient, unit)
}
