//! Monitor expression parsing and validation

pub mod definition;
pub mod expression;

pub use definition::{DefinitionError, MonitorDefinition};
pub use expression::{
    parse_expression, EvaluationWindow, ExpressionError, MonitorExpression, WindowUnit,
};
