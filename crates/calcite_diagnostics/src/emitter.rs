//! Emitter - 诊断输出器
//!
//! 负责将诊断信息格式化输出。带源码时使用 ariadne 渲染片段。

use crate::diagnostic::Diagnostic;
use crate::level::DiagnosticLevel;
use crate::span::{Span, SpanExt};
use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use colored::*;

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// 创建新的输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 根据配置创建输出器
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// 输出单个诊断到 stderr
    pub fn emit(&self, diagnostic: &Diagnostic) {
        eprint!("{}", self.render(diagnostic));
    }

    /// 输出带源码片段的诊断到 stderr
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) {
        eprint!("{}", self.render_with_source(diagnostic, source));
    }

    /// 渲染为文本（不含源码片段）
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        if self.use_colors {
            self.render_colored(diagnostic)
        } else {
            self.render_plain(diagnostic)
        }
    }

    /// 渲染为带源码片段的文本
    ///
    /// 没有位置信息或源码为空时退回到 [`Emitter::render`]。
    pub fn render_with_source(&self, diagnostic: &Diagnostic, source: &str) -> String {
        let span = match &diagnostic.span {
            Some(span) if !source.is_empty() => visible_span(span, source),
            _ => return self.render(diagnostic),
        };

        let kind = match diagnostic.level {
            DiagnosticLevel::Error => ReportKind::Error,
            DiagnosticLevel::Warning => ReportKind::Warning,
        };

        let mut label = Label::new(span.clone());
        if let Some(text) = &diagnostic.label {
            label = label.with_message(text);
        }
        if self.use_colors {
            label = label.with_color(Color::Red);
        }

        let mut report = Report::build(kind, (), span.start)
            .with_config(
                Config::default()
                    .with_color(self.use_colors)
                    .with_index_type(IndexType::Byte),
            )
            .with_message(&diagnostic.message)
            .with_label(label);
        for note in &diagnostic.notes {
            report = report.with_note(note);
        }
        if let Some(help) = &diagnostic.help {
            report = report.with_help(help);
        }

        let mut buf = Vec::new();
        match report.finish().write(Source::from(source), &mut buf) {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.render(diagnostic),
        }
    }

    fn render_colored(&self, diagnostic: &Diagnostic) -> String {
        let mut out = format!(
            "{}: {}\n",
            diagnostic.level.colored_name(),
            diagnostic.message.bold()
        );

        if let Some(span) = &diagnostic.span {
            out.push_str(&format!("  {} {:?}\n", "-->".blue().bold(), span));
        }

        for note in &diagnostic.notes {
            out.push_str(&format!(
                "  {} {}\n",
                "=".blue().bold(),
                format!("note: {}", note).bright_black()
            ));
        }

        if let Some(help) = &diagnostic.help {
            out.push_str(&format!(
                "  {} {}\n",
                "=".green().bold(),
                format!("help: {}", help).green()
            ));
        }
        out
    }

    fn render_plain(&self, diagnostic: &Diagnostic) -> String {
        let mut out = format!("{}: {}\n", diagnostic.level, diagnostic.message);

        if let Some(span) = &diagnostic.span {
            out.push_str(&format!("  --> {:?}\n", span));
        }

        for note in &diagnostic.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }

        if let Some(help) = &diagnostic.help {
            out.push_str(&format!("  = help: {}\n", help));
        }
        out
    }
}

/// 行尾 (end of input) 的空 Span 指向最后一个字符，两端对齐到字符边界
fn visible_span(span: &Span, source: &str) -> Span {
    let len = source.len();
    let span = span.clamp_to(len);
    let start = floor_char_boundary(source, span.start);
    let end = ceil_char_boundary(source, span.end);
    if start < end {
        start..end
    } else if start < len {
        start..ceil_char_boundary(source, start + 1)
    } else {
        let last = source.char_indices().next_back().map_or(0, |(i, _)| i);
        last..len
    }
}

fn floor_char_boundary(source: &str, mut index: usize) -> usize {
    while !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(source: &str, mut index: usize) -> usize {
    while !source.is_char_boundary(index) {
        index += 1;
    }
    index
}
