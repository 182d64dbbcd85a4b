//! Calcite Driver
//!
//! 驱动模块，串联预处理、括号检查、词法、语法、求值和格式化，
//! 并提供会话历史与批量求值。

pub mod batch;
pub mod error;
pub mod history;
pub mod pipeline;
pub mod session;

pub use batch::{BatchError, BatchRunner, BatchSummary, LineOutcome};
pub use error::{EvalError, EvalResult};
pub use history::{HistoryRecord, HistorySession};
pub use pipeline::{evaluate_one, Evaluation};
pub use session::{Pipeline, Session};
