//! 内置函数
//!
//! 计算器只认识四个固定的函数名

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sqrt,
    Abs,
    Power,
    Round,
}

impl Function {
    pub const ALL: [Function; 4] = [
        Function::Sqrt,
        Function::Abs,
        Function::Power,
        Function::Round,
    ];

    /// 源码中的名字
    pub fn name(&self) -> &'static str {
        match self {
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
            Function::Power => "power",
            Function::Round => "round",
        }
    }

    /// 参数个数
    pub fn arity(&self) -> usize {
        match self {
            Function::Power => 2,
            Function::Sqrt | Function::Abs | Function::Round => 1,
        }
    }

    /// 按名字查找（区分大小写，预处理器已经统一成小写）
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// 按名字查找（忽略大小写）
    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
        assert_eq!(Function::from_name("power"), Some(Function::Power));
        assert_eq!(Function::from_name("Sqrt"), None);
        assert_eq!(Function::from_name("pow"), None);
        assert_eq!(Function::from_name_ignore_case("ROUND"), Some(Function::Round));
    }

    #[test]
    fn test_arity() {
        assert_eq!(Function::Power.arity(), 2);
        for f in [Function::Sqrt, Function::Abs, Function::Round] {
            assert_eq!(f.arity(), 1, "{}", f);
        }
    }
}
