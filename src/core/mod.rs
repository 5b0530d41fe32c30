pub mod boolean;
pub mod encoding;
pub mod number;
pub mod structured;

pub use boolean::{from_bool, to_bool};
pub use encoding::{from_base64, from_hex, to_base64, to_hex};
pub use number::{
    from_float64, from_int, from_int64, from_uint64, to_float64, to_int, to_int64, to_uint64,
};
pub use structured::{from_json, from_json_into, from_xml, from_xml_into, to_json, to_xml, to_xml_with_root};
