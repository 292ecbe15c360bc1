#[macro_use]
extern crate lazy_static;

pub mod parser;
pub mod properties;
pub mod tables;

mod config;
mod error;
mod property_set;
mod range;
mod symbol;
mod ucd;

pub use config::{Config, UNICODE_VERSION};
pub use error::{FormatError, ParseError, UcdError};
pub use property_set::PropertySet;
pub use range::{CodePointRange, RangeList, MAX_CODE_POINT};
pub use symbol::{normalize_symbol, Symbol};
pub use ucd::{SourceFile, Sources, Tables, Ucd};

pub use properties::{PropertyName, PropertyValue};
