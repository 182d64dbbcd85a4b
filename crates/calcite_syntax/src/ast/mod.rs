pub mod display;
pub mod expr;
pub mod function;
pub mod visitor;

// 重新导出核心类型，方便外部直接使用 calcite_syntax::ast::Expr 等
pub use expr::{BinaryOp, Expr, ExprKind, Span, UnaryOp};
pub use function::Function;
pub use visitor::Visitor;
