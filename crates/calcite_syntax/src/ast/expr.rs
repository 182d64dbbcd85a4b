use crate::ast::Function;

// 简单的 Span 定义 (也就是输入中的起止位置: 0..5)
pub type Span = std::ops::Range<usize>;

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // 数字字面量: 1, 2.5
    Number(f64),

    // 一元操作: -a
    Unary(UnaryOp, Box<Expr>),

    // 二元操作: a + b, a ^ b
    Binary(Box<Expr>, BinaryOp, Box<Expr>),

    // 函数调用: sqrt(4), power(2, 10)
    Call { function: Function, args: Vec<Expr> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub, // +, -
    Mul,
    Div,
    Mod, // *, /, %
    Pow, // ^
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg, // -x
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "^",
        }
    }

    /// 绑定强度，数值越大越紧
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 2,
            BinaryOp::Pow => 3,
        }
    }

    pub fn is_right_assoc(&self) -> bool {
        matches!(self, BinaryOp::Pow)
    }
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
        }
    }
}

impl Expr {
    pub fn number(value: f64, span: Span) -> Self {
        Expr {
            kind: ExprKind::Number(value),
            span,
        }
    }

    pub fn binary(lhs: Expr, op: BinaryOp, rhs: Expr) -> Self {
        let span = lhs.span.start..rhs.span.end;
        Expr {
            kind: ExprKind::Binary(Box::new(lhs), op, Box::new(rhs)),
            span,
        }
    }
}
