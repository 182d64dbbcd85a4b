//! Calcite Syntax
//!
//! 表达式前端：预处理、括号检查、词法分析、语法分析

pub mod ast;
pub mod brackets;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod preprocess;

pub use ast::{BinaryOp, Expr, ExprKind, Function, Span, UnaryOp, Visitor};
pub use brackets::is_balanced;
pub use error::{
    ArityError, LexError, LexErrorKind, ParseError, SyntaxError, SyntaxResult,
};
pub use lexer::{tokenize, Token};
pub use parser::parse;
pub use preprocess::{normalize, normalize_with_offsets, Normalized};

/// 对已经规范化的文本做词法 + 语法分析
pub fn parse_str(text: &str) -> SyntaxResult<Expr> {
    let tokens = tokenize(text)?;
    parse(&tokens, text.len())
}
