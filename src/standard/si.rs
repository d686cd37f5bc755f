//! Decimal prefixes, base 1000, from kilo up to quetta.

unit_system! {
	/// A bit or byte unit with a decimal prefix.
	SiUnit,
	standard: Standard::Si,
	base: 1000,
	prefixes: ["", "k", "M", "G", "T", "P", "E", "Z", "Y", "R", "Q"],
	bits: [
		Bit => "b",
		Kilobit => "kb",
		Megabit => "Mb",
		Gigabit => "Gb",
		Terabit => "Tb",
		Petabit => "Pb",
		Exabit => "Eb",
		Zettabit => "Zb",
		Yottabit => "Yb",
		Ronnabit => "Rb",
		Quettabit => "Qb",
	],
	bytes: [
		Byte => "B",
		Kilobyte => "kB",
		Megabyte => "MB",
		Gigabyte => "GB",
		Terabyte => "TB",
		Petabyte => "PB",
		Exabyte => "EB",
		Zettabyte => "ZB",
		Yottabyte => "YB",
		Ronnabyte => "RB",
		Quettabyte => "QB",
	],
}
