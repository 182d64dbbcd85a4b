//! Parser Module
//!
//! 表达式解析、错误归类和参数个数检查

pub mod arity;
pub mod expr;

use crate::ast::{Expr, Span};
use crate::error::{ParseError, SyntaxResult};
use crate::lexer::Token;
use chumsky::prelude::*;
use chumsky::stream::Stream;

pub type ParserError = Simple<Token>;

/// 主入口：把 token 序列解析成一棵合法的表达式树
///
/// `len` 是被解析文本的长度，用作 end of input 的位置。
pub fn parse(tokens: &[(Token, Span)], len: usize) -> SyntaxResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression.into());
    }

    let stream = Stream::from_iter(len..len + 1, tokens.iter().cloned());
    let expr = expr::expr_parser()
        .then_ignore(end())
        .parse(stream)
        .map_err(|errors| classify(tokens, errors, len))?;

    arity::check(&expr)?;
    Ok(expr)
}

/// 把 chumsky 的错误归类为 UnexpectedToken / MissingOperand
fn classify(tokens: &[(Token, Span)], errors: Vec<ParserError>, len: usize) -> ParseError {
    let Some(error) = errors.into_iter().next() else {
        return ParseError::MissingOperand { span: len..len + 1 };
    };
    let span = error.span();

    // 出错位置之前的 token 是否要求一个操作数
    let index = tokens
        .iter()
        .position(|(_, s)| s.start >= span.start)
        .unwrap_or(tokens.len());
    let operand_expected = index == 0 || tokens[index - 1].0.expects_operand();

    match error.found() {
        Some(tok) if operand_expected && !tok.starts_operand() => {
            ParseError::MissingOperand { span }
        }
        Some(tok) => ParseError::UnexpectedToken {
            token: tok.describe(),
            span,
        },
        None if operand_expected => ParseError::MissingOperand { span },
        None => ParseError::UnexpectedToken {
            token: "end of input".to_string(),
            span,
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{BinaryOp, ExprKind, Function, UnaryOp};
    use crate::error::{ParseError, SyntaxError};
    use crate::parse_str;

    fn binary_op(src: &str) -> BinaryOp {
        match parse_str(src).expect("parse").kind {
            ExprKind::Binary(_, op, _) => op,
            other => panic!("expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_precedence() {
        // 2+3*4 => 2+(3*4)
        assert_eq!(binary_op("2+3*4"), BinaryOp::Add);
        assert_eq!(binary_op("2*3+4"), BinaryOp::Add);
        assert_eq!(binary_op("2*3^2"), BinaryOp::Mul);
        assert_eq!(binary_op("(2+3)*4"), BinaryOp::Mul);
    }

    #[test]
    fn test_power_is_right_associative() {
        let expr = parse_str("2^3^2").expect("parse");
        match expr.kind {
            ExprKind::Binary(lhs, BinaryOp::Pow, rhs) => {
                assert_eq!(lhs.kind, ExprKind::Number(2.0));
                assert!(matches!(rhs.kind, ExprKind::Binary(_, BinaryOp::Pow, _)));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unary_binds_tighter_than_power() {
        let expr = parse_str("-2^2").expect("parse");
        match expr.kind {
            ExprKind::Binary(lhs, BinaryOp::Pow, _) => {
                assert!(matches!(lhs.kind, ExprKind::Unary(UnaryOp::Neg, _)));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_left_associative_subtraction() {
        let expr = parse_str("1-2-3").expect("parse");
        match expr.kind {
            ExprKind::Binary(lhs, BinaryOp::Sub, rhs) => {
                assert!(matches!(lhs.kind, ExprKind::Binary(_, BinaryOp::Sub, _)));
                assert_eq!(rhs.kind, ExprKind::Number(3.0));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_nested_calls() {
        let expr = parse_str("power(sqrt(4),2)").expect("parse");
        match expr.kind {
            ExprKind::Call { function, args } => {
                assert_eq!(function, Function::Power);
                assert_eq!(args.len(), 2);
                assert!(matches!(
                    args[0].kind,
                    ExprKind::Call {
                        function: Function::Sqrt,
                        ..
                    }
                ));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_spans_cover_parentheses() {
        let expr = parse_str("5/(3-3)").expect("parse");
        assert_eq!(expr.span, 0..7);
        match expr.kind {
            ExprKind::Binary(_, _, rhs) => assert_eq!(rhs.span, 2..7),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 60;
        let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        let expr = parse_str(&src).expect("parse");
        assert_eq!(expr.kind, ExprKind::Number(1.0));
        assert_eq!(expr.span, 0..src.len());

        let src = format!("{}16{}", "sqrt(".repeat(depth), ")".repeat(depth));
        assert!(matches!(
            parse_str(&src).expect("parse").kind,
            ExprKind::Call {
                function: Function::Sqrt,
                ..
            }
        ));
    }

    #[test]
    fn test_unary_spans() {
        let expr = parse_str("1+--2").expect("parse");
        match expr.kind {
            ExprKind::Binary(_, BinaryOp::Add, rhs) => {
                assert_eq!(rhs.span, 2..5);
                match rhs.kind {
                    ExprKind::Unary(UnaryOp::Neg, inner) => assert_eq!(inner.span, 3..5),
                    other => panic!("unexpected {:?}", other),
                }
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_power_chain_spans() {
        let expr = parse_str("2^3^2").expect("parse");
        assert_eq!(expr.span, 0..5);
        match expr.kind {
            ExprKind::Binary(_, BinaryOp::Pow, rhs) => assert_eq!(rhs.span, 2..5),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(
            parse_str("").unwrap_err(),
            SyntaxError::Parse(ParseError::EmptyExpression)
        );
    }

    #[test]
    fn test_missing_operand() {
        match parse_str("2+").unwrap_err() {
            SyntaxError::Parse(ParseError::MissingOperand { span }) => assert_eq!(span.start, 2),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            parse_str("(*3)").unwrap_err(),
            SyntaxError::Parse(ParseError::MissingOperand { .. })
        ));
    }

    #[test]
    fn test_unexpected_token() {
        match parse_str("(1)(2)").unwrap_err() {
            SyntaxError::Parse(ParseError::UnexpectedToken { token, span }) => {
                assert_eq!(token, "'('");
                assert_eq!(span, 3..4);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_trailing_input() {
        assert!(matches!(
            parse_str("sqrt(4)2").unwrap_err(),
            SyntaxError::Parse(ParseError::UnexpectedToken { .. })
        ));
    }
}
