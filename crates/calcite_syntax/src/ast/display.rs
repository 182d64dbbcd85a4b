//! 表达式打印
//!
//! 输出最少括号的规范形式，重新解析后得到同样的树。错误信息里引用子表达式时使用。

use super::expr::{Expr, ExprKind};
use std::fmt;

const UNARY_PRECEDENCE: u8 = 4;
const ATOM_PRECEDENCE: u8 = 5;

fn precedence(expr: &Expr) -> u8 {
    match &expr.kind {
        ExprKind::Number(_) | ExprKind::Call { .. } => ATOM_PRECEDENCE,
        ExprKind::Unary(..) => UNARY_PRECEDENCE,
        ExprKind::Binary(_, op, _) => op.precedence(),
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(value) => write!(f, "{}", value),
            ExprKind::Unary(op, operand) => {
                f.write_str(op.symbol())?;
                write_operand(f, operand, precedence(operand) < UNARY_PRECEDENCE)
            }
            ExprKind::Binary(lhs, op, rhs) => {
                let p = op.precedence();
                let (lp, rp) = (precedence(lhs), precedence(rhs));
                write_operand(f, lhs, lp < p || (lp == p && op.is_right_assoc()))?;
                write!(f, " {} ", op.symbol())?;
                write_operand(f, rhs, rp < p || (rp == p && !op.is_right_assoc()))
            }
            ExprKind::Call { function, args } => {
                write!(f, "{}(", function)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
        }
    }
}
