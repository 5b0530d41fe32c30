//! Base64 (standard alphabet, padded) and hexadecimal byte encodings.

use crate::utils::error::{ConvertError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::borrow::Cow;

pub fn to_base64(data: impl AsRef<[u8]>) -> String {
    STANDARD.encode(data)
}

/// Decodes standard, padded Base64. Unpadded or URL-safe input is rejected.
/// `\r` and `\n` are skipped so line-wrapped output decodes.
pub fn from_base64(s: &str) -> Result<Vec<u8>> {
    let unwrapped: Cow<'_, str> = if s.contains(['\r', '\n']) {
        Cow::Owned(s.chars().filter(|c| !matches!(c, '\r' | '\n')).collect())
    } else {
        Cow::Borrowed(s)
    };
    STANDARD
        .decode(unwrapped.as_bytes())
        .map_err(|e| ConvertError::encoding(s, "base64", e))
}

/// Lowercase hex, two digits per byte.
pub fn to_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(data)
}

/// Decodes hex digit pairs in either case.
pub fn from_hex(s: &str) -> Result<Vec<u8>> {
    hex::decode(s).map_err(|e| ConvertError::encoding(s, "hex", e))
}
