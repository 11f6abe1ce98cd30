//! Tool implementations for the agent
//!
//! - `weather`: `get_weather(city)`
//! - `math`: `add_numbers(a, b)`
//!
//! Both are registered by [`ToolRegistry::with_builtin_tools`].

pub mod math;
pub mod weather;

mod registry;

pub use registry::{ToolHandler, ToolRegistry};
