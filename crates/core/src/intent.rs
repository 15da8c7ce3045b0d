//! Intents — the classified purpose of a message.
//!
//! An intent maps to exactly one tool. Classification is deterministic
//! rule matching; the fixed priority order (Calculator, WeatherDesk,
//! KnowledgeBase, IdeaGenerator) guarantees reproducible trace
//! ordering for any given message.

use serde::{Deserialize, Serialize};

/// Which tool a matched rule dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Calculator,
    WeatherDesk,
    KnowledgeBase,
    IdeaGenerator,
}

impl Intent {
    /// All intents in the fixed rule-priority order.
    pub const PRIORITY_ORDER: [Intent; 4] = [
        Intent::Calculator,
        Intent::WeatherDesk,
        Intent::KnowledgeBase,
        Intent::IdeaGenerator,
    ];
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Calculator => "calculator",
            Self::WeatherDesk => "weather_desk",
            Self::KnowledgeBase => "knowledge_base",
            Self::IdeaGenerator => "idea_generator",
        };
        write!(f, "{s}")
    }
}

/// A classification outcome: the tool to run and the argument it
/// should operate on. Transient — exists only within one orchestrator
/// call, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentMatch {
    pub intent: Intent,
    pub argument: String,
}

impl IntentMatch {
    pub fn new(intent: Intent, argument: impl Into<String>) -> Self {
        Self {
            intent,
            argument: argument.into(),
        }
    }
}
