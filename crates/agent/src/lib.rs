//! The Toolpilot orchestrator — classify, invoke, record, compose.
//!
//! `run_agent` is the single entry point: it takes a trimmed message
//! and returns the reply plus the ordered tool trace. Synchronous, no
//! suspension points, no I/O; every call is independent and stateless.

pub mod classifier;
pub mod composer;
pub mod recorder;

use toolpilot_core::step::AgentResult;
use toolpilot_core::tool::ToolRegistry;
use tracing::{info, warn};

pub use classifier::{MatcherRule, classify, default_rules};

/// A configured agent: a tool registry plus the ordered rule list.
pub struct Agent {
    registry: ToolRegistry,
    rules: Vec<MatcherRule>,
}

impl Agent {
    /// Create an agent with the default rule list.
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            rules: default_rules(),
        }
    }

    /// Replace the rule list (primarily for tests).
    pub fn with_rules(mut self, rules: Vec<MatcherRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Run one message through the full pipeline.
    ///
    /// The caller is responsible for rejecting empty/whitespace-only
    /// input; the message is trimmed here as a courtesy. A tool
    /// failure never aborts the call — it becomes a step whose output
    /// is the failure explanation, and processing continues with the
    /// next matched intent.
    pub fn run(&self, message: &str) -> AgentResult {
        let message = message.trim();
        let matches = classifier::classify(message, &self.rules);

        let mut steps = Vec::with_capacity(matches.len());
        for m in &matches {
            let Some(tool) = self.registry.get(m.intent) else {
                warn!(intent = %m.intent, "No tool registered for matched intent; skipping");
                continue;
            };
            let result = tool.run(&m.argument);
            steps.push(recorder::record(tool, &m.argument, result));
        }

        let reply = composer::compose(&steps);
        info!(
            matched = matches.len(),
            steps = steps.len(),
            "Agent run complete"
        );
        AgentResult { reply, steps }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new(toolpilot_tools::default_registry())
    }
}

/// Run a message through a default agent. Convenience for callers that
/// don't need to hold an `Agent`.
pub fn run_agent(message: &str) -> AgentResult {
    Agent::default().run(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculator_answer() {
        let result = run_agent("what is 2+2");
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].output, "4");
        assert!(result.reply.contains('4'));
    }

    #[test]
    fn division_by_zero_degrades_to_step() {
        let result = run_agent("12/0");
        assert_eq!(result.steps.len(), 1);
        assert!(result.steps[0].output.contains("divide by zero"));
        assert!(result.reply.contains("divide by zero"));
    }

    #[test]
    fn weather_for_known_city() {
        let result = run_agent("weather in London");
        assert_eq!(result.steps.len(), 1);
        assert!(result.steps[0].output.contains("London"));
        assert!(result.steps[0].output.contains("14"));
    }

    #[test]
    fn weather_for_unknown_city_degrades() {
        let result = run_agent("weather in Atlantis");
        assert_eq!(result.steps.len(), 1);
        assert!(result.steps[0].output.contains("Atlantis"));
        assert!(result.steps[0].reasoning.contains("not recognized"));
    }

    #[test]
    fn multi_intent_produces_both_answers_in_order() {
        let result = run_agent("What's the weather in London and can you add 2+2?");
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[0].title, "Calculator");
        assert_eq!(result.steps[1].title, "Weather desk");
        assert!(result.reply.contains('4'));
        assert!(result.reply.contains("London"));
    }

    #[test]
    fn no_match_falls_back_to_generic_reply() {
        let result = run_agent("hello");
        assert!(result.steps.is_empty());
        assert!(!result.reply.is_empty());
    }

    #[test]
    fn repeated_runs_are_identical_modulo_ids() {
        let a = run_agent("plan a launch and add 3*3 for the rust team in Oslo weather");
        let b = run_agent("plan a launch and add 3*3 for the rust team in Oslo weather");
        assert_eq!(a.reply, b.reply);
        assert_eq!(a.steps.len(), b.steps.len());
        for (sa, sb) in a.steps.iter().zip(&b.steps) {
            assert_eq!(sa.title, sb.title);
            assert_eq!(sa.reasoning, sb.reasoning);
            assert_eq!(sa.input, sb.input);
            assert_eq!(sa.output, sb.output);
        }
    }

    #[test]
    fn step_ids_unique_within_result() {
        let result = run_agent("weather in London and 2+2 for the rust launch plan");
        assert!(result.steps.len() >= 2);
        let mut ids: Vec<_> = result.steps.iter().map(|s| s.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), result.steps.len());
    }

    #[test]
    fn every_step_output_feeds_the_reply() {
        let result = run_agent("weather in Tokyo and what is 6*7");
        for step in &result.steps {
            assert!(result.reply.contains(&step.output));
        }
    }
}
