//! Idea generator tool — composes a brainstorm checklist.
//!
//! The checklist comes from a fixed planning template interpolated
//! with the topic, so output is a pure function of input. No
//! randomness anywhere.

use toolpilot_core::error::ToolError;
use toolpilot_core::tool::{Tool, ToolOutput};

const REASONING: &str = "Generated a structured idea list using the planning template.";

/// Subject used when the classifier extracted no residual topic.
const FALLBACK_TOPIC: &str = "your next project";

pub struct IdeaGeneratorTool;

impl Tool for IdeaGeneratorTool {
    fn name(&self) -> &str {
        "idea_generator"
    }

    fn title(&self) -> &str {
        "Idea sparks"
    }

    fn description(&self) -> &str {
        "Generate a short templated brainstorm checklist for a topic."
    }

    fn run(&self, argument: &str) -> Result<ToolOutput, ToolError> {
        let topic = match argument.trim() {
            "" => FALLBACK_TOPIC,
            t => t,
        };

        let output = format!(
            "Here's a starting checklist for {topic}:\n\
             - Write down the single outcome that would make {topic} a success.\n\
             - List the three riskiest assumptions behind {topic} and how to test each cheaply.\n\
             - Sketch a one-week slice of {topic} you could ship and show to someone.\n\
             - Decide what you will deliberately leave out of the first version."
        );
        Ok(ToolOutput::new(output, REASONING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_is_interpolated() {
        let tool = IdeaGeneratorTool;
        let out = tool.run("a weekend bakery").unwrap();
        assert!(out.output.contains("a weekend bakery"));
        assert_eq!(out.reasoning, REASONING);
    }

    #[test]
    fn empty_topic_uses_fallback() {
        let tool = IdeaGeneratorTool;
        let out = tool.run("").unwrap();
        assert!(out.output.contains(FALLBACK_TOPIC));
    }

    #[test]
    fn checklist_has_four_bullets() {
        let tool = IdeaGeneratorTool;
        let out = tool.run("launch").unwrap();
        assert_eq!(out.output.matches("\n- ").count(), 4);
    }

    #[test]
    fn generation_is_pure() {
        let tool = IdeaGeneratorTool;
        assert_eq!(tool.run("a launch").unwrap(), tool.run("a launch").unwrap());
    }
}
