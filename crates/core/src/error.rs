//! Error types for the Toolpilot domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Tool failures are
//! tool-local and non-fatal: the orchestrator converts each one into a
//! trace step, never into an error visible to its caller.

use thiserror::Error;

/// The top-level error type for Toolpilot operations outside the core
/// orchestration path (config loading, serialization, server startup).
#[derive(Debug, Error)]
pub enum Error {
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures a tool can report.
///
/// Every variant is recoverable: the orchestrator turns it into a
/// `ToolStep` whose output is `user_message()` and whose reasoning is
/// `reasoning()`, then continues with the next matched intent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("No curated entry matched: {0}")]
    NoMatch(String),
}

impl ToolError {
    /// Plain-language explanation shown to the end user as the failed
    /// step's output. Never empty.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidExpression(expr) => format!(
                "I couldn't evaluate \"{expr}\" — only numbers, + - * / and parentheses are supported."
            ),
            Self::DivisionByZero => "Cannot divide by zero.".to_string(),
            Self::UnknownLocation(city) => format!(
                "I don't have a weather snapshot for \"{city}\". Try one of the cities I know, like London or Tokyo."
            ),
            Self::NoMatch(query) => format!(
                "No curated knowledge entry matched \"{query}\"."
            ),
        }
    }

    /// One-line reasoning recorded on the failed step's trace entry.
    pub fn reasoning(&self) -> String {
        match self {
            Self::InvalidExpression(_) => {
                "Rejected the input because it is not a valid arithmetic expression.".to_string()
            }
            Self::DivisionByZero => {
                "Stopped evaluation because the expression divides by zero.".to_string()
            }
            Self::UnknownLocation(_) => {
                "Fell back because the location was not recognized in the curated snapshot table."
                    .to_string()
            }
            Self::NoMatch(_) => {
                "Searched the curated knowledge entries but none of their keywords overlapped the query."
                    .to_string()
            }
        }
    }
}
