//! Built-in tool implementations for Toolpilot.
//!
//! Four capabilities: arithmetic evaluation, curated weather snapshot
//! lookup, curated knowledge lookup, and templated idea generation.
//! Every tool is a pure, deterministic function over static tables —
//! no network, disk, or clock access.

pub mod calculator;
pub mod idea_generator;
pub mod knowledge_base;
pub mod weather_desk;

use toolpilot_core::intent::Intent;
use toolpilot_core::tool::ToolRegistry;

/// Create the default tool registry with all four built-in tools,
/// each registered under the intent that dispatches to it.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Intent::Calculator, Box::new(calculator::CalculatorTool));
    registry.register(Intent::WeatherDesk, Box::new(weather_desk::WeatherDeskTool));
    registry.register(Intent::KnowledgeBase, Box::new(knowledge_base::KnowledgeBaseTool));
    registry.register(Intent::IdeaGenerator, Box::new(idea_generator::IdeaGeneratorTool));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_covers_every_intent() {
        let registry = default_registry();
        assert_eq!(registry.len(), 4);
        for intent in Intent::PRIORITY_ORDER {
            assert!(registry.get(intent).is_some(), "missing tool for {intent}");
        }
    }
}
