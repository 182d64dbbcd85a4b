//! Syntax Error Types
//!
//! 词法 / 语法 / 参数个数错误。位置都是字节偏移，只保存在 span 中，
//! 行列号由诊断渲染时按字符计算。

use crate::ast::{Function, Span};
use thiserror::Error;

/// 词法错误的种类（同时也是 logos 的错误类型）
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
pub enum LexErrorKind {
    #[default]
    #[error("unknown character")]
    UnknownCharacter,

    #[error("unknown function")]
    UnknownFunction,

    #[error("malformed number")]
    MalformedNumber,
}

/// 词法错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} '{text}'")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 出错的原文片段
    pub text: String,
    pub span: Span,
}

/// 语法错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected {token}")]
    UnexpectedToken { token: String, span: Span },

    #[error("empty expression")]
    EmptyExpression,

    #[error("missing operand")]
    MissingOperand { span: Span },
}

/// 参数个数错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("function '{function}' expects {expected} argument(s), but got {actual}")]
pub struct ArityError {
    pub function: Function,
    pub expected: usize,
    pub actual: usize,
    pub span: Span,
}

/// 语法阶段的任意错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Arity(#[from] ArityError),
}

impl LexError {
    pub fn map_span(self, f: impl Fn(&Span) -> Span) -> Self {
        Self {
            span: f(&self.span),
            ..self
        }
    }
}

impl ParseError {
    /// 错误位置（空表达式没有位置）
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::UnexpectedToken { span, .. } | Self::MissingOperand { span } => Some(span),
            Self::EmptyExpression => None,
        }
    }

    pub fn map_span(self, f: impl Fn(&Span) -> Span) -> Self {
        match self {
            Self::UnexpectedToken { token, span } => Self::UnexpectedToken {
                token,
                span: f(&span),
            },
            Self::MissingOperand { span } => Self::MissingOperand { span: f(&span) },
            Self::EmptyExpression => Self::EmptyExpression,
        }
    }
}

impl ArityError {
    pub fn map_span(self, f: impl Fn(&Span) -> Span) -> Self {
        Self {
            span: f(&self.span),
            ..self
        }
    }
}

/// 语法阶段结果类型
pub type SyntaxResult<T> = Result<T, SyntaxError>;
