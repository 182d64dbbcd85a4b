//! Evaluation Errors
//!
//! 驱动层的错误类型，集成统一诊断系统。位置已经映射回用户输入的原文。

use calcite_diagnostics::{Diagnostic, DiagnosticSink, Emitter, Span};
use calcite_eval::RuntimeError;
use calcite_syntax::{ArityError, Function, LexError, LexErrorKind, ParseError, SyntaxError};
use thiserror::Error;

/// 求值错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// 括号不配对
    #[error("unbalanced brackets: close all of the brackets")]
    UnbalancedBrackets,

    /// 词法错误
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),

    /// 语法错误
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// 参数个数错误
    #[error("arity error: {0}")]
    Arity(#[from] ArityError),

    /// 除以零
    #[error("division by zero: `{dividend}` / `{divisor}`, divisor evaluates to 0")]
    DivisionByZero {
        dividend: String,
        divisor: String,
        span: Span,
    },

    /// 对零取模
    #[error("modulo by zero: `{dividend}` % `{divisor}`, divisor evaluates to 0")]
    ModuloByZero {
        dividend: String,
        divisor: String,
        span: Span,
    },
}

impl From<SyntaxError> for EvalError {
    fn from(err: SyntaxError) -> Self {
        match err {
            SyntaxError::Lex(e) => Self::Lex(e),
            SyntaxError::Parse(e) => Self::Parse(e),
            SyntaxError::Arity(e) => Self::Arity(e),
        }
    }
}

impl From<RuntimeError> for EvalError {
    fn from(err: RuntimeError) -> Self {
        match err {
            RuntimeError::DivisionByZero {
                dividend,
                divisor,
                span,
            } => Self::DivisionByZero {
                dividend,
                divisor,
                span,
            },
            RuntimeError::ModuloByZero {
                dividend,
                divisor,
                span,
            } => Self::ModuloByZero {
                dividend,
                divisor,
                span,
            },
            RuntimeError::Arity(e) => Self::Arity(e),
        }
    }
}

fn function_list() -> String {
    Function::ALL
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl EvalError {
    /// 获取错误发生的位置
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::UnbalancedBrackets => None,
            Self::Lex(e) => Some(&e.span),
            Self::Parse(e) => e.span(),
            Self::Arity(e) => Some(&e.span),
            Self::DivisionByZero { span, .. } | Self::ModuloByZero { span, .. } => Some(span),
        }
    }

    /// 变换所有位置信息
    pub fn map_span(self, f: impl Fn(&Span) -> Span) -> Self {
        match self {
            Self::UnbalancedBrackets => Self::UnbalancedBrackets,
            Self::Lex(e) => Self::Lex(e.map_span(f)),
            Self::Parse(e) => Self::Parse(e.map_span(f)),
            Self::Arity(e) => Self::Arity(e.map_span(f)),
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
        }
    }

    /// 转换为诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string());
        match self {
            Self::UnbalancedBrackets => diag.suggest("every '(' needs a matching ')'"),
            Self::Lex(e) => {
                let diag = diag.labeled(e.span.clone(), e.kind.to_string());
                match e.kind {
                    LexErrorKind::UnknownCharacter => {
                        diag.suggest("supported operators are + - * / % ^")
                    }
                    LexErrorKind::UnknownFunction => {
                        diag.suggest(format!("available functions: {}", function_list()))
                    }
                    LexErrorKind::MalformedNumber => {
                        diag.suggest("write numbers like 2, 2.5 or 0.5")
                    }
                }
            }
            Self::Parse(e) => match e {
                ParseError::UnexpectedToken { span, .. } => {
                    diag.labeled(span.clone(), "not expected here")
                }
                ParseError::MissingOperand { span } => {
                    diag.labeled(span.clone(), "an operand is expected here")
                }
                ParseError::EmptyExpression => diag.suggest("type an expression such as 2+2"),
            },
            Self::Arity(e) => diag
                .labeled(e.span.clone(), format!("{} argument(s) given", e.actual))
                .with_note(format!(
                    "'{}' takes exactly {} argument(s)",
                    e.function, e.expected
                )),
            Self::DivisionByZero { span, divisor, .. }
            | Self::ModuloByZero { span, divisor, .. } => diag
                .labeled(span.clone(), format!("`{}` evaluates to 0", divisor))
                .with_note("division by zero is not allowed"),
        }
    }

    /// 收集到 DiagnosticSink
    pub fn collect_to_sink(&self, sink: &mut DiagnosticSink) {
        sink.add(self.to_diagnostic());
    }

    /// 使用统一诊断系统输出错误，`source` 是用户输入的原文
    pub fn emit(&self, emitter: &Emitter, source: &str) {
        emitter.emit_with_source(&self.to_diagnostic(), source);
    }
}

/// 求值结果类型
pub type EvalResult<T> = Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_error_conversion() {
        let err: EvalError = RuntimeError::ModuloByZero {
            dividend: "5".to_string(),
            divisor: "0".to_string(),
            span: 0..3,
        }
        .into();
        assert!(matches!(err, EvalError::ModuloByZero { .. }));
        assert_eq!(err.span(), Some(&(0..3)));
    }

    #[test]
    fn test_syntax_error_conversion() {
        let err: EvalError = SyntaxError::Parse(ParseError::EmptyExpression).into();
        assert_eq!(err, EvalError::Parse(ParseError::EmptyExpression));
        assert_eq!(err.span(), None);
    }

    #[test]
    fn test_diagnostic_for_unknown_function() {
        let err = EvalError::Lex(LexError {
            kind: LexErrorKind::UnknownFunction,
            text: "foo".to_string(),
            span: 0..3,
        });
        let diag = err.to_diagnostic();
        assert_eq!(diag.span, Some(0..3));
        assert_eq!(
            diag.help.as_deref(),
            Some("available functions: sqrt, abs, power, round")
        );
    }

    #[test]
    fn test_diagnostic_for_arity() {
        let err = EvalError::Arity(ArityError {
            function: Function::Round,
            expected: 1,
            actual: 0,
            span: 0..7,
        });
        let diag = err.to_diagnostic();
        assert!(diag.message.contains("round"));
        assert_eq!(diag.notes, vec!["'round' takes exactly 1 argument(s)".to_string()]);
    }

    #[test]
    fn test_collect_to_sink() {
        let mut sink = DiagnosticSink::new();
        EvalError::UnbalancedBrackets.collect_to_sink(&mut sink);
        assert!(sink.has_errors());
        assert_eq!(sink.len(), 1);
    }
}
