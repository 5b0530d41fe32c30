use super::{CodecAction, Command};
use crate::core::{
    from_base64, from_bool, from_float64, from_hex, from_int, from_int64, from_json, from_uint64,
    to_base64, to_bool, to_float64, to_hex, to_int, to_int64, to_json, to_uint64,
};
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

/// Raw bytes a subcommand operates on.
#[derive(Debug, Clone)]
pub struct Operand {
    bytes: Vec<u8>,
}

impl Operand {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }

    /// Positional value first, then `--input`, then stdin unless it is a
    /// terminal.
    pub fn resolve(inline: Option<&str>, input: Option<&Path>) -> Result<Self> {
        if let Some(value) = inline {
            return Ok(Self::new(value));
        }
        if let Some(path) = input {
            return Ok(Self::new(fs::read(path)?));
        }
        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Err(ConvertError::Input {
                message: "no operand given and stdin is a terminal".to_string(),
            });
        }
        Self::from_reader(stdin.lock())
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The operand as UTF-8 with one trailing line ending removed.
    pub fn as_text(&self) -> Result<&str> {
        let text = std::str::from_utf8(&self.bytes).map_err(|e| ConvertError::Input {
            message: format!("operand is not valid UTF-8: {}", e),
        })?;
        let text = text.strip_suffix('\n').unwrap_or(text);
        Ok(text.strip_suffix('\r').unwrap_or(text))
    }
}

impl Command {
    pub fn execute(&self, operand: &Operand) -> Result<Vec<u8>> {
        let out = match self {
            Command::Int { .. } => from_int(to_int(operand.as_text()?)?).into_bytes(),
            Command::Int64 { .. } => from_int64(to_int64(operand.as_text()?)?).into_bytes(),
            Command::Uint64 { .. } => from_uint64(to_uint64(operand.as_text()?)?).into_bytes(),
            Command::Float64 { .. } => from_float64(to_float64(operand.as_text()?)?).into_bytes(),
            Command::Bool { .. } => from_bool(to_bool(operand.as_text()?)?).into_bytes(),
            Command::Base64 { action } => match action {
                CodecAction::Encode { .. } => to_base64(operand.as_bytes()).into_bytes(),
                CodecAction::Decode { .. } => from_base64(operand.as_text()?)?,
            },
            Command::Hex { action } => match action {
                CodecAction::Encode { .. } => to_hex(operand.as_bytes()).into_bytes(),
                CodecAction::Decode { .. } => from_hex(operand.as_text()?)?,
            },
            Command::Json { .. } => {
                let value: serde_json::Value = from_json(operand.as_text()?)?;
                to_json(&value)?.into_bytes()
            }
        };
        Ok(out)
    }
}

/// Writes to `path`, or stdout when `None`. Text results get a trailing
/// newline.
pub fn write_output(path: Option<&Path>, data: &[u8], text: bool) -> Result<()> {
    let mut buf = Vec::with_capacity(data.len() + 1);
    buf.extend_from_slice(data);
    if text {
        buf.push(b'\n');
    }

    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, buf)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&buf)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
