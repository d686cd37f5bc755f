pub mod engine;
pub mod error;
pub mod numeric;
pub mod standard;
pub mod table;

pub use engine::{As, ConversionOptions};
pub use error::ConversionError;
pub use numeric::Number;
pub use standard::{iec, jedec, si, Standard, Unit};
pub use table::{Kind, UnitEntry, UnitTable};
