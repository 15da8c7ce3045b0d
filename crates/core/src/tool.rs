//! Tool trait — the abstraction over agent capabilities.
//!
//! Tools are pure, deterministic functions over static curated tables:
//! arithmetic evaluation, weather snapshot lookup, knowledge lookup,
//! idea generation. Identical input always yields identical output,
//! independent of call order or prior calls.

use std::collections::HashMap;

use crate::error::ToolError;
use crate::intent::Intent;

/// A successful tool invocation: the output text plus a one-line
/// reasoning string describing what the tool did.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub output: String,
    pub reasoning: String,
}

impl ToolOutput {
    pub fn new(output: impl Into<String>, reasoning: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            reasoning: reasoning.into(),
        }
    }
}

/// The core Tool trait.
///
/// Each tool implements this trait and is registered in the
/// `ToolRegistry` under the `Intent` that dispatches to it. The trait
/// is synchronous: tools never perform I/O or block.
pub trait Tool: Send + Sync {
    /// The unique machine name of this tool (e.g., "calculator").
    fn name(&self) -> &str;

    /// The human-readable title shown on trace steps (e.g., "Calculator").
    fn title(&self) -> &str;

    /// A description of what this tool does and when it applies.
    fn description(&self) -> &str;

    /// Run the tool against an extracted argument.
    fn run(&self, argument: &str) -> std::result::Result<ToolOutput, ToolError>;
}

/// A registry of available tools, keyed by the intent that selects them.
///
/// The orchestrator uses this to look up and invoke the tool for each
/// matched intent.
pub struct ToolRegistry {
    tools: HashMap<Intent, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Replaces any existing tool for the same intent.
    pub fn register(&mut self, intent: Intent, tool: Box<dyn Tool>) {
        self.tools.insert(intent, tool);
    }

    /// Get the tool for an intent.
    pub fn get(&self, intent: Intent) -> Option<&dyn Tool> {
        self.tools.get(&intent).map(|t| t.as_ref())
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
