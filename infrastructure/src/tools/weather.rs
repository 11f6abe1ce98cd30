//! get_weather tool: canned weather report for a city

use agentic_domain::tool::{
    entities::{ToolDefinition, ToolParameter},
    value_objects::ToolError,
};

/// Tool name constant
pub const GET_WEATHER: &str = "get_weather";

/// Get the tool definition for get_weather
pub fn get_weather_definition() -> ToolDefinition {
    ToolDefinition::new(GET_WEATHER, "Returns the current weather in a city.")
        .with_parameter(ToolParameter::new("city", "Name of the city"))
}

/// Weather report for `city`. There is no real lookup behind it.
pub fn get_weather(city: &str) -> String {
    format!("The weather in {} is sunny with 30°C.", city)
}

/// Execute get_weather with already converted arguments
pub fn execute_get_weather(args: &[String]) -> Result<String, ToolError> {
    match args {
        [city] => Ok(get_weather(city)),
        _ => Err(ToolError::arity_mismatch(
            &get_weather_definition(),
            args.len(),
        )),
    }
}
