//! Binary prefixes, base 1024, from kibi up to yobi.

unit_system! {
	/// A bit or byte unit with a binary prefix.
	IecUnit,
	standard: Standard::Iec,
	base: 1024,
	prefixes: ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi", "Yi"],
	bits: [
		Bit => "b",
		Kibibit => "Kib",
		Mebibit => "Mib",
		Gibibit => "Gib",
		Tebibit => "Tib",
		Pebibit => "Pib",
		Exbibit => "Eib",
		Zebibit => "Zib",
		Yobibit => "Yib",
	],
	bytes: [
		Byte => "B",
		Kibibyte => "KiB",
		Mebibyte => "MiB",
		Gibibyte => "GiB",
		Tebibyte => "TiB",
		Pebibyte => "PiB",
		Exbibyte => "EiB",
		Zebibyte => "ZiB",
		Yobibyte => "YiB",
	],
}
