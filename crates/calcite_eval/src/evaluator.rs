//! Evaluator
//!
//! 递归求值表达式树：先求子节点，再组合。`/` 和 `%` 在运算前检查右操作数的值是否为 0。

use crate::error::{RuntimeError, RuntimeResult};
use crate::functions;
use calcite_syntax::{ArityError, BinaryOp, Expr, ExprKind, UnaryOp, Visitor};

/// 表达式求值器
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    fn binary(&mut self, lhs: &Expr, op: BinaryOp, rhs: &Expr, expr: &Expr) -> RuntimeResult<f64> {
        let a = self.visit_expr(lhs)?;
        let b = self.visit_expr(rhs)?;

        let zero_divisor = || (lhs.to_string(), rhs.to_string(), expr.span.clone());
        match op {
            BinaryOp::Add => Ok(a + b),
            BinaryOp::Sub => Ok(a - b),
            BinaryOp::Mul => Ok(a * b),
            BinaryOp::Pow => Ok(a.powf(b)),
            BinaryOp::Div if b == 0.0 => {
                let (dividend, divisor, span) = zero_divisor();
                Err(RuntimeError::DivisionByZero {
                    dividend,
                    divisor,
                    span,
                })
            }
            BinaryOp::Mod if b == 0.0 => {
                let (dividend, divisor, span) = zero_divisor();
                Err(RuntimeError::ModuloByZero {
                    dividend,
                    divisor,
                    span,
                })
            }
            BinaryOp::Div => Ok(a / b),
            BinaryOp::Mod => Ok(a % b),
        }
    }
}

impl Visitor<RuntimeResult<f64>> for Evaluator {
    fn visit_expr(&mut self, expr: &Expr) -> RuntimeResult<f64> {
        match &expr.kind {
            ExprKind::Number(value) => Ok(*value),
            ExprKind::Unary(UnaryOp::Neg, operand) => Ok(-self.visit_expr(operand)?),
            ExprKind::Binary(lhs, op, rhs) => self.binary(lhs, *op, rhs, expr),
            ExprKind::Call { function, args } => {
                if args.len() != function.arity() {
                    return Err(ArityError {
                        function: *function,
                        expected: function.arity(),
                        actual: args.len(),
                        span: expr.span.clone(),
                    }
                    .into());
                }
                let values = args
                    .iter()
                    .map(|arg| self.visit_expr(arg))
                    .collect::<RuntimeResult<Vec<_>>>()?;
                Ok(functions::apply(*function, &values))
            }
        }
    }
}

/// 求值一棵表达式树
pub fn evaluate(expr: &Expr) -> RuntimeResult<f64> {
    Evaluator::new().visit_expr(expr)
}
