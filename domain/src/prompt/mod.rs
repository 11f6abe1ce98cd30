//! Prompt domain
//!
//! The single prompt template used for every turn.

pub mod agent;

pub use agent::AgentPromptTemplate;
