//! Expression Parser
//!
//! 优先级从高到低：函数调用与括号、一元负号、乘方 (右结合)、乘除取模、加减

use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;

use super::ParserError;

/// 解析表达式 (公共接口)
pub fn expr_parser() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    recursive(|expr| {
        // 词法阶段已经校验过数字格式
        let number = select! { Token::Number(s) => s }
            .map_with_span(|s, span| Expr::number(s.parse().unwrap_or(f64::NAN), span));

        // 函数调用: sqrt(x), power(b, e)；参数个数稍后检查
        let call = select! { Token::Ident(function) => function }
            .then(
                expr.clone()
                    .separated_by(just(Token::Comma))
                    .delimited_by(just(Token::LParen), just(Token::RParen)),
            )
            .map_with_span(|(function, args), span| Expr {
                kind: ExprKind::Call { function, args },
                span,
            });

        // 括号分组，span 包含括号本身
        let paren = expr
            .clone()
            .delimited_by(just(Token::LParen), just(Token::RParen))
            .map_with_span(|inner: Expr, span| Expr { span, ..inner });

        let primary = number.or(call).or(paren).boxed();

        // Unary: -x
        let unary = just(Token::Minus)
            .to(UnaryOp::Neg)
            .map_with_span(|op, span: Span| (op, span))
            .repeated()
            .then(primary)
            .foldr(|(op, span), rhs| {
                let new_span = span.start..rhs.span.end;
                Expr {
                    kind: ExprKind::Unary(op, Box::new(rhs)),
                    span: new_span,
                }
            })
            .boxed();

        // Power: ^ (Right associative)
        // 每个操作数只解析一次，收集后从右向左折叠
        let power = unary
            .clone()
            .then(just(Token::Caret).ignore_then(unary).repeated())
            .map(|(first, mut rest): (Expr, Vec<Expr>)| {
                let Some(mut rhs) = rest.pop() else {
                    return first;
                };
                while let Some(lhs) = rest.pop() {
                    rhs = Expr::binary(lhs, BinaryOp::Pow, rhs);
                }
                Expr::binary(first, BinaryOp::Pow, rhs)
            })
            .boxed();

        // Product: *, /, %
        let product = power
            .clone()
            .then(
                just(Token::Star)
                    .to(BinaryOp::Mul)
                    .or(just(Token::Slash).to(BinaryOp::Div))
                    .or(just(Token::Percent).to(BinaryOp::Mod))
                    .then(power)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::binary(lhs, op, rhs))
            .boxed();

        // Sum: +, -
        product
            .clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(product)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::binary(lhs, op, rhs))
            .boxed()
    })
}
