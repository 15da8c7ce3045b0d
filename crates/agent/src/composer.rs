//! Reply composer — merges step outputs into the final reply.
//!
//! Deterministic by construction: the reply depends only on the
//! ordered step outputs. With no steps it degrades to a generic
//! conversational acknowledgement that does not claim tool use.

use toolpilot_core::step::ToolStep;

const FALLBACK_REPLY: &str = "Nothing in that needed my tools, but I'm listening! \
Ask me to crunch numbers, check a weather snapshot, look up a topic, or brainstorm ideas.";

const SINGLE_LEAD_IN: &str = "Here's what I put together:";

/// Produce the single reply string from the completed steps.
pub fn compose(steps: &[ToolStep]) -> String {
    match steps {
        [] => FALLBACK_REPLY.to_string(),
        [only] => format!("{SINGLE_LEAD_IN}\n\n{}", only.output),
        many => many
            .iter()
            .map(|s| s.output.as_str())
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(output: &str) -> ToolStep {
        ToolStep::new("Calculator", "r", "in", output)
    }

    #[test]
    fn zero_steps_gives_generic_reply() {
        let reply = compose(&[]);
        assert!(!reply.is_empty());
        assert!(!reply.contains("Here's what I put together"));
    }

    #[test]
    fn one_step_leads_with_its_output() {
        let reply = compose(&[step("4")]);
        assert!(reply.starts_with(SINGLE_LEAD_IN));
        assert!(reply.ends_with('4'));
    }

    #[test]
    fn multiple_steps_joined_in_order() {
        let reply = compose(&[step("first answer"), step("second answer")]);
        let first = reply.find("first answer").unwrap();
        let second = reply.find("second answer").unwrap();
        assert!(first < second);
        assert!(reply.contains("\n\n"));
    }

    #[test]
    fn reply_is_never_empty() {
        assert!(!compose(&[]).is_empty());
        assert!(!compose(&[step("x")]).is_empty());
    }
}
