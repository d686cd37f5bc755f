use crate::standard::Standard;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
	#[error("unknown unit {unit:?} for the {standard} standard")]
	UnknownUnit { standard: Standard, unit: String },
	#[error("invalid value {value:?} for option `{option}`")]
	InvalidOption { option: &'static str, value: String },
}
