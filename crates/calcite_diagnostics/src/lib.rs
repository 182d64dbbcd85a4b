//! Calcite Diagnostics
//!
//! 统一的诊断系统，为计算器的每一个阶段提供清晰的错误报告。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器
//! - [`Span`] - 输入位置信息
//!
//! # 示例
//!
//! ```rust
//! use calcite_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
//!
//! let mut sink = DiagnosticSink::new();
//!
//! sink.add(
//!     Diagnostic::error("division by zero")
//!         .labeled(2..7, "evaluates to 0")
//!         .suggest("check the divisor"),
//! );
//!
//! if sink.has_errors() {
//!     let emitter = Emitter::without_colors();
//!     for diagnostic in sink.diagnostics() {
//!         emitter.emit(diagnostic);
//!     }
//! }
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::Diagnostic;
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
pub use span::{Span, SpanExt};
