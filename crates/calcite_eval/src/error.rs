//! Runtime Error Types
//!
//! 求值过程中可能出现的错误。除零检查针对求值后的数值，而不是源码文本。

use calcite_syntax::{ArityError, Span};
use thiserror::Error;

/// 运行时错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// `/` 的右操作数求值为 0
    #[error("division by zero: `{dividend}` / `{divisor}`, divisor evaluates to 0")]
    DivisionByZero {
        dividend: String,
        divisor: String,
        span: Span,
    },

    /// `%` 的右操作数求值为 0
    #[error("modulo by zero: `{dividend}` % `{divisor}`, divisor evaluates to 0")]
    ModuloByZero {
        dividend: String,
        divisor: String,
        span: Span,
    },

    /// 手工构造的树里参数个数不对
    #[error(transparent)]
    Arity(#[from] ArityError),
}

impl RuntimeError {
    /// 获取错误发生的位置
    pub fn span(&self) -> &Span {
        match self {
            Self::DivisionByZero { span, .. } => span,
            Self::ModuloByZero { span, .. } => span,
            Self::Arity(err) => &err.span,
        }
    }

    pub fn map_span(self, f: impl Fn(&Span) -> Span) -> Self {
        match self {
            Self::DivisionByZero {
                dividend,
                divisor,
                span,
            } => Self::DivisionByZero {
                dividend,
                divisor,
                span: f(&span),
            },
            Self::ModuloByZero {
                dividend,
                divisor,
                span,
            } => Self::ModuloByZero {
                dividend,
                divisor,
                span: f(&span),
            },
            Self::Arity(err) => Self::Arity(err.map_span(f)),
        }
    }
}

/// 求值结果类型
pub type RuntimeResult<T> = Result<T, RuntimeError>;
