//! Trace types — the structured record of what the agent did.
//!
//! A `ToolStep` is created by the step recorder at invocation time and
//! never mutated afterwards. Steps are owned by the `AgentResult` they
//! are attached to and discarded after the response is sent; nothing
//! here persists across requests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed tool invocation, shown to the end user as a trace entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolStep {
    /// Unique id within a single `AgentResult` (UUID v4).
    pub id: String,

    /// Human-readable tool title, e.g. "Calculator".
    pub title: String,

    /// One-line explanation of why/how the tool acted.
    pub reasoning: String,

    /// The argument the tool operated on.
    pub input: String,

    /// The tool's output, or the plain-language failure explanation.
    pub output: String,
}

impl ToolStep {
    /// Create a step with a fresh id.
    pub fn new(
        title: impl Into<String>,
        reasoning: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            reasoning: reasoning.into(),
            input: input.into(),
            output: output.into(),
        }
    }
}

/// The sole artifact returned by the orchestrator.
///
/// `steps` preserves invocation order (insertion order = execution
/// order) and may be empty when no tool matched. `reply` is never
/// empty: when steps exist it is derived from their outputs, otherwise
/// it is a generic conversational acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResult {
    pub reply: String,
    pub steps: Vec<ToolStep>,
}
