//! Application layer for agentic-gemini
//!
//! This crate contains the agent turn use case and the port definitions
//! it depends on. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, TurnProgressNotifier},
    tool_executor::ToolExecutorPort,
};
pub use use_cases::run_turn::{RunTurnUseCase, TurnError, TurnOutcome};
