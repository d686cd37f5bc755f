use std::{fmt, hash::Hash, str::FromStr, sync::LazyLock};

use tracing::debug;

use crate::{
	engine::{self, ConversionOptions},
	error::ConversionError,
	numeric::Number,
	table::{Kind, UnitEntry, UnitTable},
};

/// A closed set of units belonging to one standard.
pub trait Unit:
	Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr<Err = ConversionError> + Send + Sync + 'static
{
	const STANDARD: Standard;
	/// Bit units by ascending prefix ordinal.
	const BITS: &'static [Self];
	/// Byte units by ascending prefix ordinal.
	const BYTES: &'static [Self];

	fn kind(self) -> Kind;
	fn ordinal(self) -> usize;
	fn symbol(self) -> &'static str;

	fn units(kind: Kind) -> &'static [Self] {
		match kind {
			Kind::Bit => Self::BITS,
			Kind::Byte => Self::BYTES,
		}
	}

	fn entry(self) -> &'static UnitEntry {
		&Self::STANDARD.table().entries(self.kind())[self.ordinal()]
	}
}

macro_rules! unit_system {
	(
		$(#[$meta: meta])*
		$name: ident,
		standard: $standard: expr,
		base: $base: literal,
		prefixes: [$($prefix: literal),+ $(,)?],
		bits: [$($bit: ident => $bit_symbol: literal),+ $(,)?],
		bytes: [$($byte: ident => $byte_symbol: literal),+ $(,)?] $(,)?
	) => {
		use std::{fmt, str::FromStr};

		use $crate::{
			engine::ConversionOptions,
			error::ConversionError,
			numeric::Number,
			standard::{self, Standard, Unit},
			table::Kind,
		};

		pub const BASE: u32 = $base;
		pub const PREFIXES: &[&str] = &[$($prefix),+];

		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub enum $name {
			$($bit,)+
			$($byte,)+
		}

		impl Unit for $name {
			const STANDARD: Standard = $standard;
			const BITS: &'static [Self] = &[$(Self::$bit),+];
			const BYTES: &'static [Self] = &[$(Self::$byte),+];

			fn kind(self) -> Kind {
				match self {
					$(Self::$bit)|+ => Kind::Bit,
					$(Self::$byte)|+ => Kind::Byte,
				}
			}

			fn ordinal(self) -> usize {
				match self.kind() {
					Kind::Bit => self as usize,
					Kind::Byte => self as usize - Self::BITS.len(),
				}
			}

			fn symbol(self) -> &'static str {
				match self {
					$(Self::$bit => $bit_symbol,)+
					$(Self::$byte => $byte_symbol,)+
				}
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.symbol())
			}
		}

		impl FromStr for $name {
			type Err = ConversionError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($bit_symbol => Ok(Self::$bit),)+
					$($byte_symbol => Ok(Self::$byte),)+
					_ => Err(ConversionError::UnknownUnit {
						standard: $standard,
						unit: s.to_owned(),
					}),
				}
			}
		}

		pub fn to_bits(value: impl Into<Number>, unit: $name) -> Number {
			standard::to_bits(value, unit)
		}

		pub fn to_bytes(value: impl Into<Number>, unit: $name) -> Number {
			standard::to_bytes(value, unit)
		}

		pub fn from_bits(bits: impl Into<Number>, options: ConversionOptions) -> (Number, $name) {
			standard::from_bits(bits, options)
		}

		pub fn from_bytes(bytes: impl Into<Number>, options: ConversionOptions) -> (Number, $name) {
			standard::from_bytes(bytes, options)
		}
	};
}

pub mod iec;
pub mod jedec;
pub mod si;

pub fn to_bits<U: Unit>(value: impl Into<Number>, unit: U) -> Number {
	engine::to_bits(unit.entry(), value.into())
}

pub fn to_bytes<U: Unit>(value: impl Into<Number>, unit: U) -> Number {
	engine::to_bytes(unit.entry(), value.into())
}

pub fn from_bits<U: Unit>(bits: impl Into<Number>, options: ConversionOptions) -> (Number, U) {
	let (coefficient, entry) = engine::from_bits(U::STANDARD.table(), bits.into(), options);
	(coefficient, U::units(entry.kind())[entry.ordinal()])
}

pub fn from_bytes<U: Unit>(bytes: impl Into<Number>, options: ConversionOptions) -> (Number, U) {
	let (coefficient, entry) = engine::from_bytes(U::STANDARD.table(), bytes.into(), options);
	(coefficient, U::units(entry.kind())[entry.ordinal()])
}

static SI_TABLE: LazyLock<UnitTable> = LazyLock::new(|| UnitTable::build(si::BASE, si::PREFIXES));
static IEC_TABLE: LazyLock<UnitTable> =
	LazyLock::new(|| UnitTable::build(iec::BASE, iec::PREFIXES));
static JEDEC_TABLE: LazyLock<UnitTable> =
	LazyLock::new(|| UnitTable::build(jedec::BASE, jedec::PREFIXES));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Standard {
	Si,
	Iec,
	Jedec,
}

impl Standard {
	pub const ALL: [Standard; 3] = [Standard::Si, Standard::Iec, Standard::Jedec];

	pub fn base(self) -> u32 {
		self.table().base()
	}

	pub fn prefixes(self) -> &'static [&'static str] {
		match self {
			Standard::Si => si::PREFIXES,
			Standard::Iec => iec::PREFIXES,
			Standard::Jedec => jedec::PREFIXES,
		}
	}

	pub fn table(self) -> &'static UnitTable {
		match self {
			Standard::Si => &SI_TABLE,
			Standard::Iec => &IEC_TABLE,
			Standard::Jedec => &JEDEC_TABLE,
		}
	}

	/// Resolves a unit symbol such as `kB` or `Mib` against this standard's table.
	pub fn lookup(self, unit: &str) -> Result<&'static UnitEntry, ConversionError> {
		self.table().lookup(unit).ok_or_else(|| {
			debug!(standard = %self, unit, "rejected unit symbol");
			ConversionError::UnknownUnit {
				standard: self,
				unit: unit.to_owned(),
			}
		})
	}

	pub fn to_bits(self, value: impl Into<Number>, unit: &str) -> Result<Number, ConversionError> {
		Ok(engine::to_bits(self.lookup(unit)?, value.into()))
	}

	pub fn to_bytes(self, value: impl Into<Number>, unit: &str) -> Result<Number, ConversionError> {
		Ok(engine::to_bytes(self.lookup(unit)?, value.into()))
	}

	pub fn from_bits(
		self,
		bits: impl Into<Number>,
		options: ConversionOptions,
	) -> (Number, &'static UnitEntry) {
		engine::from_bits(self.table(), bits.into(), options)
	}

	pub fn from_bytes(
		self,
		bytes: impl Into<Number>,
		options: ConversionOptions,
	) -> (Number, &'static UnitEntry) {
		engine::from_bytes(self.table(), bytes.into(), options)
	}
}

impl fmt::Display for Standard {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Standard::Si => "SI",
			Standard::Iec => "IEC",
			Standard::Jedec => "JEDEC",
		})
	}
}

impl FromStr for Standard {
	type Err = ConversionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"si" => Ok(Standard::Si),
			"iec" => Ok(Standard::Iec),
			"jedec" => Ok(Standard::Jedec),
			_ => Err(ConversionError::InvalidOption {
				option: "standard",
				value: s.to_owned(),
			}),
		}
	}
}
