//! Action tool definitions and argument validation.

pub mod types;
pub mod validation;

pub use types::{FunctionDefinition, ParameterBuilder, ToolDefinition, ToolParameters};
pub use validation::validate_arguments;

use strum::IntoEnumIterator;

use crate::actions::ActionKind;

/// Function-tool definitions for every registered action, in registry order.
pub fn definitions() -> Vec<ToolDefinition> {
    ActionKind::iter().map(ActionKind::definition).collect()
}
