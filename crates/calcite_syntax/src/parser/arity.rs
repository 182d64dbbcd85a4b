//! 参数个数检查
//!
//! sqrt / abs / round 恰好一个参数，power 恰好两个

use crate::ast::{Expr, ExprKind};
use crate::error::ArityError;

/// 检查整棵树中每个函数调用的参数个数
pub fn check(expr: &Expr) -> Result<(), ArityError> {
    match &expr.kind {
        ExprKind::Number(_) => Ok(()),
        ExprKind::Unary(_, operand) => check(operand),
        ExprKind::Binary(lhs, _, rhs) => {
            check(lhs)?;
            check(rhs)
        }
        ExprKind::Call { function, args } => {
            if args.len() != function.arity() {
                return Err(ArityError {
                    function: *function,
                    expected: function.arity(),
                    actual: args.len(),
                    span: expr.span.clone(),
                });
            }
            args.iter().try_for_each(check)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Function;
    use crate::error::{ArityError, SyntaxError};
    use crate::parse_str;

    fn arity_error(src: &str) -> ArityError {
        match parse_str(src).unwrap_err() {
            SyntaxError::Arity(err) => err,
            other => panic!("expected arity error, got {:?}", other),
        }
    }

    #[test]
    fn test_round_arity() {
        let err = arity_error("round()");
        assert_eq!(err.function, Function::Round);
        assert_eq!((err.expected, err.actual), (1, 0));

        let err = arity_error("round(1,2)");
        assert_eq!(err.function, Function::Round);
        assert_eq!((err.expected, err.actual), (1, 2));
    }

    #[test]
    fn test_power_arity() {
        let err = arity_error("power(2)");
        assert_eq!(err.function, Function::Power);
        assert_eq!((err.expected, err.actual), (2, 1));
    }

    #[test]
    fn test_nested_arity_error() {
        let err = arity_error("1+power(sqrt(1,2),3)");
        assert_eq!(err.function, Function::Sqrt);
        assert_eq!(err.span, 8..17);
    }

    #[test]
    fn test_valid_arity() {
        assert!(parse_str("power(abs(-2),round(1.5))").is_ok());
    }
}
