//! DiagnosticSink - 诊断收集器
//!
//! 批量求值时收集每一行的诊断信息

use crate::diagnostic::Diagnostic;

/// 诊断收集器
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    /// 收集的诊断列表
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    /// 创建新的诊断收集器
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// 添加诊断
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// 是否有错误
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level.is_error())
    }

    /// 获取所有诊断
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// 获取错误数量
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// 获取诊断数量
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
