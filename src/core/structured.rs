//! JSON and XML serialization through serde.
//!
//! Key and element order follows the serde iteration order of the value:
//! struct fields in declaration order, `BTreeMap` keys sorted, and
//! `HashMap` keys in no particular order.

use crate::utils::error::{ConvertError, Direction, Format, Result};
use serde::{de::DeserializeOwned, Serialize};

/// Serializes `value` to compact JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| ConvertError::serialization(Format::Json, Direction::Serialize, e))
}

pub fn from_json<T: DeserializeOwned>(s: &str) -> Result<T> {
    serde_json::from_str(s)
        .map_err(|e| ConvertError::serialization(Format::Json, Direction::Deserialize, e))
}

/// Decodes `s` into `target`. `target` is only written when decoding
/// succeeds.
pub fn from_json_into<T: DeserializeOwned>(s: &str, target: &mut T) -> Result<()> {
    *target = from_json(s)?;
    Ok(())
}

/// Serializes `value` to XML. The root element is named after the type
/// (or its `#[serde(rename)]`), child elements after the fields.
pub fn to_xml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    quick_xml::se::to_string(value)
        .map_err(|e| ConvertError::serialization(Format::Xml, Direction::Serialize, e))
}

/// Like [`to_xml`] but with an explicit root element name.
pub fn to_xml_with_root<T: Serialize + ?Sized>(root: &str, value: &T) -> Result<String> {
    quick_xml::se::to_string_with_root(root, value)
        .map_err(|e| ConvertError::serialization(Format::Xml, Direction::Serialize, e))
}

/// Decodes an XML document. The root element name is not checked against
/// the target type.
pub fn from_xml<T: DeserializeOwned>(s: &str) -> Result<T> {
    quick_xml::de::from_str(s)
        .map_err(|e| ConvertError::serialization(Format::Xml, Direction::Deserialize, e))
}

pub fn from_xml_into<T: DeserializeOwned>(s: &str, target: &mut T) -> Result<()> {
    *target = from_xml(s)?;
    Ok(())
}
