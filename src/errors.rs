//! Error handling for the NFT activity parser.
//!
//! Classification itself never fails on well-formed input: a transaction
//! that matches nothing becomes an `UnknownActivity`. Errors only describe
//! bad caller input, malformed instruction payloads of a recognized
//! protocol, and failures of the surrounding RPC and file layers.

use thiserror::Error;
use std::fmt;

/// Main error type for the parser.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed or incomplete caller input, such as a missing mint or a
    /// raw transaction without an instruction list.
    #[error("Input error: {0}")]
    Input(String),

    /// A recognized instruction whose payload does not fit the layout
    /// registered for its program.
    #[error("Decode error: {context}: {message}")]
    Decode {
        /// Where the decode was attempted.
        context: ErrorContext,
        /// What went wrong.
        message: String,
    },

    /// Errors related to RPC communication.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Errors related to file I/O.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors from (de)serializing transaction or activity JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    /// Shorthand for an input error.
    pub fn input(message: impl Into<String>) -> Self {
        ParseError::Input(message.into())
    }

    /// Shorthand for a decode error with the given context.
    pub fn decode(context: ErrorContext, message: impl Into<String>) -> Self {
        ParseError::Decode {
            context,
            message: message.into(),
        }
    }

    /// Whether this is a decode error, the only kind a detector may recover from.
    pub fn is_decode(&self) -> bool {
        matches!(self, ParseError::Decode { .. })
    }
}

/// Result type alias for the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Context information for decode errors.
///
/// Records which component was decoding what, so a warning about a skipped
/// instruction can be traced back to the program that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Program ID that owns the instruction, if known.
    pub program_id: Option<String>,

    /// Component where the error occurred (e.g., "price_decoder").
    pub component: String,

    /// Operation being performed when the error occurred (e.g., "decode_price").
    pub operation: String,

    /// Additional details, such as payload length.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with just a component and an operation.
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            program_id: None,
            component: component.to_string(),
            operation: operation.to_string(),
            details: None,
        }
    }

    /// Attach the program ID.
    pub fn with_program(mut self, program_id: &str) -> Self {
        self.program_id = Some(program_id.to_string());
        self
    }

    /// Attach free-form details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "In {} while {}", self.component, self.operation)?;
        if let Some(program_id) = &self.program_id {
            write!(f, " for program {}", program_id)?;
        }
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

/// Extension trait for turning foreign errors into input errors.
pub trait ErrorExt<T> {
    /// Map any error into `ParseError::Input`, prefixed with the field it concerns.
    fn input_context(self, field: &str) -> ParseResult<T>;
}

impl<T, E: std::error::Error> ErrorExt<T> for Result<T, E> {
    fn input_context(self, field: &str) -> ParseResult<T> {
        self.map_err(|e| ParseError::Input(format!("invalid {}: {}", field, e)))
    }
}
