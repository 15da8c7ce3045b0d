//! Step recorder — wraps tool invocations into trace entries.
//!
//! A success records the tool's output and reasoning verbatim. A
//! failure records the error's plain-language explanation as the
//! output, so the trace always shows what the user was actually told.
//! Failures never cross this boundary as errors.

use toolpilot_core::error::ToolError;
use toolpilot_core::step::ToolStep;
use toolpilot_core::tool::{Tool, ToolOutput};
use tracing::debug;

/// Record one completed invocation (success or failure) as a step.
pub fn record(
    tool: &dyn Tool,
    argument: &str,
    result: Result<ToolOutput, ToolError>,
) -> ToolStep {
    match result {
        Ok(out) => {
            debug!(tool = tool.name(), "Tool succeeded");
            ToolStep::new(tool.title(), out.reasoning, argument, out.output)
        }
        Err(err) => {
            debug!(tool = tool.name(), error = %err, "Tool failed; recording as step");
            ToolStep::new(tool.title(), err.reasoning(), argument, err.user_message())
        }
    }
}
