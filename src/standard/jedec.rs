//! Memory industry convention: base 1024 with unsuffixed prefixes, stopping at tera.
//!
//! Anything past terabytes is reported as a (large) number of `TB`.

unit_system! {
	/// A bit or byte unit as used for memory sizes.
	JedecUnit,
	standard: Standard::Jedec,
	base: 1024,
	prefixes: ["", "K", "M", "G", "T"],
	bits: [
		Bit => "b",
		Kilobit => "Kb",
		Megabit => "Mb",
		Gigabit => "Gb",
		Terabit => "Tb",
	],
	bytes: [
		Byte => "B",
		Kilobyte => "KB",
		Megabyte => "MB",
		Gigabyte => "GB",
		Terabyte => "TB",
	],
}
