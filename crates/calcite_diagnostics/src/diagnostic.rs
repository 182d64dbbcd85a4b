//! Diagnostic - 诊断信息
//!
//! 表示一次求值失败（或提示）的诊断

use crate::level::DiagnosticLevel;
use crate::span::Span;

/// 诊断信息
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 主要消息
    pub message: String,
    /// 源码位置（输入文本中的字节偏移，可选）
    pub span: Option<Span>,
    /// 位置处的标签文字
    pub label: Option<String>,
    /// 补充注释
    pub notes: Vec<String>,
    /// 修复建议
    pub help: Option<String>,
}

impl Diagnostic {
    /// 创建新的诊断
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            label: None,
            notes: Vec::new(),
            help: None,
        }
    }

    /// 创建错误诊断
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    /// 创建警告诊断
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    /// 设置位置信息
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// 设置位置和标签
    pub fn labeled(mut self, span: Span, label: impl Into<String>) -> Self {
        self.span = Some(span);
        self.label = Some(label.into());
        self
    }

    /// 添加注释
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// 设置建议
    pub fn suggest(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
