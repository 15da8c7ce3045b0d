//! # Toolpilot Core
//!
//! Domain types, traits, and error definitions for the Toolpilot agent.
//! This crate has **zero framework dependencies** — it defines the domain
//! model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The orchestration core is synchronous and pure: every tool is a
//! deterministic function over static curated tables, so there is no
//! async runtime, no I/O, and no shared mutable state anywhere in this
//! crate. The async boundary lives in the gateway and CLI layers.

pub mod error;
pub mod intent;
pub mod step;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result, ToolError};
pub use intent::{Intent, IntentMatch};
pub use step::{AgentResult, ToolStep};
pub use tool::{Tool, ToolOutput, ToolRegistry};
