//! Pass-through conversions between text and typed values, byte encodings
//! and serde formats.

#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::Operand, CliConfig, Command};

pub use crate::core::{
    from_base64, from_bool, from_float64, from_hex, from_int, from_int64, from_json,
    from_json_into, from_uint64, from_xml, from_xml_into, to_base64, to_bool, to_float64, to_hex,
    to_int, to_int64, to_json, to_uint64, to_xml, to_xml_with_root,
};
pub use utils::error::{ConvertError, Direction, ErrorCategory, Format, Result};
