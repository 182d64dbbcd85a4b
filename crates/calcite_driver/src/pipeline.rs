//! Evaluation Pipeline
//!
//! 原始文本 → 预处理 → 括号检查 → 词法 → 语法 → 求值 → 格式化

use crate::error::{EvalError, EvalResult};
use calcite_eval::{evaluate, format_value};
use calcite_syntax::{is_balanced, normalize_with_offsets, parse, tokenize};
use std::fmt;
use tracing::debug;

/// 一次成功的求值
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// 规范化后的表达式
    pub normalized: String,
    /// 数值结果
    pub value: f64,
    /// 格式化后的结果
    pub formatted: String,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// 求值一个表达式
///
/// # Arguments
/// * `raw` - 用户输入的原文（交互输入或文件中的一行）
///
/// # Returns
/// * `Ok(Evaluation)` - 求值成功
/// * `Err(EvalError)` - 任意阶段失败，位置指向 `raw`
///
/// # Example
/// ```
/// use calcite_driver::evaluate_one;
///
/// let result = evaluate_one("power(sqrt(4), 2)").unwrap();
/// assert_eq!(result.formatted, "4");
/// ```
pub fn evaluate_one(raw: &str) -> EvalResult<Evaluation> {
    let normalized = normalize_with_offsets(raw);
    debug!(raw, normalized = %normalized.text, "preprocessed");

    run_stages(&normalized.text).map_err(|err| {
        debug!(error = %err, "evaluation failed");
        err.map_span(|span| normalized.to_raw(span))
    })
}

fn run_stages(text: &str) -> EvalResult<Evaluation> {
    // 1. 括号检查，失败时不再进行后续阶段
    if !is_balanced(text) {
        return Err(EvalError::UnbalancedBrackets);
    }

    // 2. 词法 + 语法分析
    let tokens = tokenize(text)?;
    debug!(count = tokens.len(), "tokenized");
    let expr = parse(&tokens, text.len())?;

    // 3. 求值 + 格式化
    let value = evaluate(&expr)?;
    let formatted = format_value(value);
    debug!(expr = %expr, %formatted, "evaluated");

    Ok(Evaluation {
        normalized: text.to_string(),
        value,
        formatted,
    })
}
