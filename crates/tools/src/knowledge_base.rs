//! Knowledge base tool — keyword matching over curated entries.
//!
//! Accepts either a free-text query or a topic key already extracted
//! by the classifier. Each entry is scored by how many of its keywords
//! occur in the query; the best score wins, ties break by earliest
//! entry in table-declaration order.

use toolpilot_core::error::ToolError;
use toolpilot_core::tool::{Tool, ToolOutput};

/// One curated entry: topic key, the keywords that select it, and the
/// fact summary returned as output.
struct Entry {
    topic: &'static str,
    keywords: &'static [&'static str],
    summary: &'static str,
}

static ENTRIES: &[Entry] = &[
    Entry {
        topic: "rust",
        keywords: &["rust", "borrow checker", "cargo", "ownership"],
        summary: "Rust is a systems programming language focused on performance and memory safety. Its ownership model eliminates data races at compile time, and Cargo handles builds and dependencies.",
    },
    Entry {
        topic: "webassembly",
        keywords: &["webassembly", "wasm"],
        summary: "WebAssembly is a portable binary instruction format. It runs at near-native speed in browsers and server runtimes, and is a common compilation target for Rust.",
    },
    Entry {
        topic: "agents",
        keywords: &["agent", "react pattern", "orchestration"],
        summary: "An AI agent pairs a reasoning loop with tools it can invoke. The ReAct pattern interleaves thinking, acting, and observing until the task is done.",
    },
    Entry {
        topic: "retrieval-augmented generation",
        keywords: &["rag", "retrieval", "grounding"],
        summary: "Retrieval-augmented generation grounds model responses in factual data by fetching relevant documents before composing an answer, which reduces hallucination.",
    },
    Entry {
        topic: "productivity",
        keywords: &["productivity", "focus", "deep work"],
        summary: "Sustained productivity comes from batching shallow tasks, protecting blocks of deep work, and writing tomorrow's top priority down before closing out the day.",
    },
];

/// Topic keywords in declaration order, paired with their topic key.
/// The classifier scans messages against this list.
pub fn topic_keywords() -> impl Iterator<Item = (&'static str, &'static str)> {
    ENTRIES
        .iter()
        .flat_map(|e| e.keywords.iter().map(|k| (*k, e.topic)))
}

pub struct KnowledgeBaseTool;

impl Tool for KnowledgeBaseTool {
    fn name(&self) -> &str {
        "knowledge_base"
    }

    fn title(&self) -> &str {
        "Knowledge base"
    }

    fn description(&self) -> &str {
        "Look up a curated fact summary by topic keyword overlap with the query."
    }

    fn run(&self, argument: &str) -> Result<ToolOutput, ToolError> {
        let query = argument.trim().to_lowercase();

        let mut best: Option<(usize, &Entry, Vec<&str>)> = None;
        for entry in ENTRIES {
            let hits: Vec<&str> = entry
                .keywords
                .iter()
                .copied()
                .filter(|k| query.contains(k))
                .collect();
            // Strictly-greater keeps the earliest entry on ties.
            if !hits.is_empty() && best.as_ref().is_none_or(|(n, _, _)| hits.len() > *n) {
                best = Some((hits.len(), entry, hits));
            }
        }

        let (_, entry, hits) =
            best.ok_or_else(|| ToolError::NoMatch(argument.trim().to_string()))?;

        tracing::debug!(topic = entry.topic, hits = hits.len(), "Knowledge entry matched");

        let reasoning = format!(
            "Matched the curated \"{}\" entry on keyword(s): {}.",
            entry.topic,
            hits.join(", ")
        );
        Ok(ToolOutput::new(entry.summary, reasoning))
    }
}
