use std::fmt;
use thiserror::Error;

/// Structured text format that failed to (de)serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Xml => f.write_str("xml"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Serialize,
    Deserialize,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Serialize => f.write_str("serialize"),
            Direction::Deserialize => f.write_str("deserialize"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("cannot parse {input:?} as {target}: {reason}")]
    Parse {
        input: String,
        target: &'static str,
        reason: String,
    },

    #[error("invalid {encoding} input {input:?}: {reason}")]
    Encoding {
        input: String,
        encoding: &'static str,
        reason: String,
    },

    #[error("failed to {direction} {format}: {message}")]
    Serialization {
        format: Format,
        direction: Direction,
        message: String,
    },

    #[error("Input error: {message}")]
    Input { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Encoding,
    Serialization,
    Input,
    Io,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::Parse { .. } => ErrorCategory::Parse,
            ConvertError::Encoding { .. } => ErrorCategory::Encoding,
            ConvertError::Serialization { .. } => ErrorCategory::Serialization,
            ConvertError::Input { .. } => ErrorCategory::Input,
            ConvertError::Io(_) => ErrorCategory::Io,
        }
    }

    /// True for failures caused by the operand's content rather than by
    /// how it was supplied.
    pub fn is_conversion_failure(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Parse | ErrorCategory::Encoding | ErrorCategory::Serialization
        )
    }

    /// Process exit code for the CLI: 1 for bad operand content, 2 for
    /// missing or unreadable input. Output failures are mapped by the caller.
    pub fn exit_code(&self) -> i32 {
        if self.is_conversion_failure() {
            1
        } else {
            2
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::Parse { target: "bool", .. } => {
                "use one of 1, t, T, true, TRUE, True, 0, f, F, false, FALSE, False"
            }
            ConvertError::Parse { .. } => {
                "check for stray whitespace, separators or a value outside the target range"
            }
            ConvertError::Encoding { encoding: "hex", .. } => {
                "hex input needs an even number of 0-9/a-f characters"
            }
            ConvertError::Encoding { .. } => {
                "base64 input must use the standard alphabet with '=' padding"
            }
            ConvertError::Serialization { .. } => {
                "make sure the document is well-formed and matches the target shape"
            }
            ConvertError::Input { .. } => "pass the operand as an argument, via --input, or on stdin",
            ConvertError::Io(_) => "check the file path and permissions",
        }
    }

    pub(crate) fn parse(input: &str, target: &'static str, reason: impl Into<String>) -> Self {
        ConvertError::Parse {
            input: input.to_string(),
            target,
            reason: reason.into(),
        }
    }

    pub(crate) fn encoding(input: &str, encoding: &'static str, reason: impl fmt::Display) -> Self {
        ConvertError::Encoding {
            input: input.to_string(),
            encoding,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn serialization(
        format: Format,
        direction: Direction,
        message: impl fmt::Display,
    ) -> Self {
        ConvertError::Serialization {
            format,
            direction,
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
