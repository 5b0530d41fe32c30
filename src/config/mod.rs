pub mod cli;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "strconv")]
#[command(about = "Convert between text, numbers, byte encodings and JSON")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Read the operand from this file instead of stdin")]
    pub input: Option<PathBuf>,

    #[arg(long, global = true, help = "Write the result to this file instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse a machine word integer and print it canonically
    Int { value: Option<String> },
    /// Parse a 64-bit signed integer and print it canonically
    Int64 { value: Option<String> },
    /// Parse a 64-bit unsigned integer and print it canonically
    Uint64 { value: Option<String> },
    /// Parse a float and print it in fixed-point notation
    Float64 { value: Option<String> },
    /// Parse a boolean literal and print true or false
    Bool { value: Option<String> },
    /// Standard padded Base64
    Base64 {
        #[command(subcommand)]
        action: CodecAction,
    },
    /// Lowercase hexadecimal
    Hex {
        #[command(subcommand)]
        action: CodecAction,
    },
    /// Parse any JSON value and print it compactly
    Json { value: Option<String> },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CodecAction {
    /// Encode the operand's raw bytes
    Encode { value: Option<String> },
    /// Decode the operand to raw bytes
    Decode { value: Option<String> },
}

impl CliConfig {
    /// `--input` when a positional operand takes precedence over it.
    pub fn shadowed_input(&self) -> Option<&Path> {
        self.command
            .inline_operand()
            .and(self.input.as_deref())
    }
}

impl Command {
    /// The positional operand, if one was given on the command line.
    pub fn inline_operand(&self) -> Option<&str> {
        match self {
            Command::Int { value }
            | Command::Int64 { value }
            | Command::Uint64 { value }
            | Command::Float64 { value }
            | Command::Bool { value }
            | Command::Json { value } => value.as_deref(),
            Command::Base64 { action } | Command::Hex { action } => match action {
                CodecAction::Encode { value } | CodecAction::Decode { value } => value.as_deref(),
            },
        }
    }

    /// Whether the result is text (newline terminated) or raw bytes.
    pub fn emits_text(&self) -> bool {
        !matches!(
            self,
            Command::Base64 { action: CodecAction::Decode { .. } }
                | Command::Hex { action: CodecAction::Decode { .. } }
        )
    }
}
