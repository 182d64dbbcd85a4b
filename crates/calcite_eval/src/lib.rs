//! Calcite Evaluation
//!
//! 表达式树的数值求值与结果格式化

pub mod error;
pub mod evaluator;
pub mod format;
pub mod functions;

pub use error::{RuntimeError, RuntimeResult};
pub use evaluator::{evaluate, Evaluator};
pub use format::format_value;
