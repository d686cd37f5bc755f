use std::process::exit;

use clap::{Parser, Subcommand};
use sizeconv::{ConversionOptions, Number, Standard};
use tracing::{debug, error, Level};

#[derive(Parser, Clone, Debug)]
#[command(version = "1.0.0", about = "sizeconv - convert bit and byte quantities between raw magnitudes and SI, IEC or JEDEC units", long_about = None)]
#[command(next_line_help = true)]
struct CliArgs {
	#[arg(
		short = 's',
		long,
		global = true,
		help = "unit standard to convert with: si (base 1000), iec (base 1024, KiB/MiB...) or jedec (base 1024, KB/MB... up to TB)",
		default_value = "si",
		value_parser = parse_standard
	)]
	standard: Standard,
	#[arg(short = 'v', long, global = true, action = clap::ArgAction::Count, help = "select the log level by passing this flag multiple times. The min log level is 0 (no flag), max is 4 (-vvvv)")]
	verbose: u8,
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
	#[command(about = "convert a quantity expressed in UNIT to bits")]
	ToBits {
		#[arg(value_parser = parse_number, allow_hyphen_values = true)]
		value: Number,
		unit: String,
	},
	#[command(about = "convert a quantity expressed in UNIT to bytes")]
	ToBytes {
		#[arg(value_parser = parse_number, allow_hyphen_values = true)]
		value: Number,
		unit: String,
	},
	#[command(about = "express a raw bit count in the best fitting unit")]
	FromBits {
		#[arg(value_parser = parse_number, allow_hyphen_values = true)]
		value: Number,
		#[command(flatten)]
		humanize: HumanizeArgs,
	},
	#[command(about = "express a raw byte count in the best fitting unit")]
	FromBytes {
		#[arg(value_parser = parse_number, allow_hyphen_values = true)]
		value: Number,
		#[command(flatten)]
		humanize: HumanizeArgs,
	},
}

#[derive(clap::Args, Clone, Debug)]
struct HumanizeArgs {
	#[arg(
		short = 'a',
		long = "as",
		help = "report the result in bit units or byte units (bits|bytes). Defaults to bytes"
	)]
	target: Option<String>,
	#[arg(
		short = 'p',
		long,
		allow_hyphen_values = true,
		help = "number of decimal places kept in the coefficient. Defaults to 2"
	)]
	precision: Option<i64>,
}

fn parse_standard(s: &str) -> Result<Standard, String> {
	s.parse().map_err(|err| format!("{err}"))
}

fn parse_number(s: &str) -> Result<Number, String> {
	s.parse::<i128>()
		.map(Number::Int)
		.or_else(|_| s.parse::<f64>().map(Number::Float))
		.map_err(|err| format!("{s:?} is not a number: {err}"))
}

fn main() {
	let opts = CliArgs::parse();

	tracing_subscriber::fmt()
		.without_time()
		.with_target(false)
		.with_writer(std::io::stderr)
		.with_max_level(match opts.verbose {
			0 => Level::ERROR,
			1 => Level::WARN,
			2 => Level::INFO,
			3 => Level::DEBUG,
			_ => Level::TRACE,
		})
		.init();

	debug!(standard = %opts.standard, "converting...");

	let result = match opts.command {
		Command::ToBits { value, unit } => opts.standard.to_bits(value, &unit).map(|n| n.to_string()),
		Command::ToBytes { value, unit } => {
			opts.standard.to_bytes(value, &unit).map(|n| n.to_string())
		}
		Command::FromBits { value, humanize } => {
			ConversionOptions::parse(humanize.target.as_deref(), humanize.precision).map(|options| {
				let (coefficient, unit) = opts.standard.from_bits(value, options);
				format!("{coefficient} {unit}")
			})
		}
		Command::FromBytes { value, humanize } => {
			ConversionOptions::parse(humanize.target.as_deref(), humanize.precision).map(|options| {
				let (coefficient, unit) = opts.standard.from_bytes(value, options);
				format!("{coefficient} {unit}")
			})
		}
	};

	match result {
		Ok(output) => println!("{output}"),
		Err(err) => {
			error!(%err, "conversion failed");
			exit(1);
		}
	}
}
