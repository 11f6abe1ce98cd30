//! add_numbers tool: sum of two numbers given as text

use agentic_domain::tool::{
    entities::{ToolDefinition, ToolParameter},
    literal::format_float,
    value_objects::ToolError,
};

/// Tool name constant
pub const ADD_NUMBERS: &str = "add_numbers";

/// Get the tool definition for add_numbers
pub fn add_numbers_definition() -> ToolDefinition {
    ToolDefinition::new(ADD_NUMBERS, "Adds two numbers.")
        .with_parameter(ToolParameter::new("a", "First number"))
        .with_parameter(ToolParameter::new("b", "Second number"))
}

/// Parse `a` and `b` as floats and return their sum, e.g. `"5.0"`.
pub fn add_numbers(a: &str, b: &str) -> Result<String, ToolError> {
    Ok(format_float(parse_float(a)? + parse_float(b)?))
}

/// Execute add_numbers with already converted arguments
pub fn execute_add_numbers(args: &[String]) -> Result<String, ToolError> {
    match args {
        [a, b] => add_numbers(a, b),
        _ => Err(ToolError::arity_mismatch(
            &add_numbers_definition(),
            args.len(),
        )),
    }
}

/// Lenient float parsing: surrounding whitespace, `inf`/`nan` and
/// underscores between digits (`1_000`) are accepted.
fn parse_float(text: &str) -> Result<f64, ToolError> {
    let invalid = || ToolError::invalid_argument(format!("could not convert string to float: '{}'", text));

    let trimmed = text.trim();
    let cleaned = if trimmed.contains('_') {
        let chars: Vec<char> = trimmed.chars().collect();
        let well_placed = chars.iter().enumerate().all(|(i, c)| {
            *c != '_'
                || (i > 0
                    && i + 1 < chars.len()
                    && chars[i - 1].is_ascii_digit()
                    && chars[i + 1].is_ascii_digit())
        });
        if !well_placed {
            return Err(invalid());
        }
        trimmed.replace('_', "")
    } else {
        trimmed.to_string()
    };

    cleaned.parse::<f64>().map_err(|_| invalid())
}
