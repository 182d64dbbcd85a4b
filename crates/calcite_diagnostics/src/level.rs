//! DiagnosticLevel - 诊断级别

use colored::*;
use std::fmt;

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// 错误 - 该表达式没有结果
    Error,
    /// 警告 - 命令使用不当，但会话继续
    Warning,
}

impl DiagnosticLevel {
    /// 获取级别名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// 获取带颜色的级别名称
    pub fn colored_name(&self) -> ColoredString {
        match self {
            Self::Error => self.name().red().bold(),
            Self::Warning => self.name().yellow().bold(),
        }
    }

    /// 是否为错误
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_name() {
        assert_eq!(DiagnosticLevel::Error.name(), "error");
        assert_eq!(DiagnosticLevel::Warning.name(), "warning");
    }

    #[test]
    fn test_is_error() {
        assert!(DiagnosticLevel::Error.is_error());
        assert!(!DiagnosticLevel::Warning.is_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DiagnosticLevel::Error), "error");
        assert_eq!(format!("{}", DiagnosticLevel::Warning), "warning");
    }
}
