//! Preprocessor
//!
//! 规范化原始输入：去掉所有空白，并把四个内置函数的调用改写成规范形式（小写函数名）。
//! 调用的参数体按括号深度扫描找到匹配的 `)`，所以参数里可以嵌套别的调用；
//! 只有 `power` 会在顶层逗号处切分参数。
//!
//! 改写不改变文本长度，因此每个字节都能映射回原始输入中的位置。
//! 这里不报告任何错误，格式不对的调用留给后面的阶段处理。

use crate::ast::{Function, Span};

/// 规范化后的文本以及每个字节在原始输入中的偏移
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    origins: Vec<usize>,
    raw_len: usize,
}

impl Normalized {
    /// 把规范文本中的 Span 映射回原始输入
    ///
    /// 位于文本末尾之后的 Span（例如 end of input）映射到原始输入的末尾之后。
    pub fn to_raw(&self, span: &Span) -> Span {
        let start = self.raw_offset(span.start);
        let end = if span.end > span.start {
            self.raw_offset(span.end - 1) + 1
        } else {
            start
        };
        start..end.max(start)
    }

    fn raw_offset(&self, index: usize) -> usize {
        match self.origins.get(index) {
            Some(&offset) => offset,
            None => self.raw_len + (index - self.origins.len()),
        }
    }
}

/// 规范化输入，只返回文本
pub fn normalize(text: &str) -> String {
    normalize_with_offsets(text).text
}

/// 规范化输入并记录偏移表
pub fn normalize_with_offsets(raw: &str) -> Normalized {
    let mut stripped = String::with_capacity(raw.len());
    let mut origins = Vec::with_capacity(raw.len());
    for (offset, ch) in raw.char_indices() {
        if ch.is_whitespace() {
            continue;
        }
        stripped.push(ch);
        origins.extend(offset..offset + ch.len_utf8());
    }

    let text = rewrite_calls(&stripped);
    debug_assert_eq!(text.len(), stripped.len());

    Normalized {
        text,
        origins,
        raw_len: raw.len(),
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// 找出 `name(` 形式的调用并改写为规范形式，参数递归处理
fn rewrite_calls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if !(ch.is_ascii_alphabetic() || ch == '_') {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        let word_len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
        let (word, after) = rest.split_at(word_len);

        let call = Function::from_name_ignore_case(word)
            .filter(|_| after.starts_with('('))
            .and_then(|function| matching_paren(after).map(|close| (function, close)));

        match call {
            Some((function, close)) => {
                let body = &after[1..close];
                let args = if function == Function::Power {
                    split_top_level(body)
                } else {
                    vec![body]
                };

                out.push_str(function.name());
                out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str(&rewrite_calls(arg));
                }
                out.push(')');
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(word);
                rest = after;
            }
        }
    }
    out
}

/// `text` 以 `(` 开头，返回与之匹配的 `)` 的下标
fn matching_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, byte) in text.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// 在深度为 0 的逗号处切分
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, byte) in body.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_whitespace() {
        assert_eq!(normalize("  2 +\t3 * 4 "), "2+3*4");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_canonical_function_names() {
        assert_eq!(normalize("SQRT(16)"), "sqrt(16)");
        assert_eq!(normalize("Abs(-2) + Round(2.5)"), "abs(-2)+round(2.5)");
    }

    #[test]
    fn test_nested_power_arguments() {
        assert_eq!(normalize("power( sqrt(4) , 2 )"), "power(sqrt(4),2)");
        assert_eq!(
            normalize("POWER(power(2,ABS(-1)), (1+1))"),
            "power(power(2,abs(-1)),(1+1))"
        );
    }

    #[test]
    fn test_unknown_and_incomplete_calls_untouched() {
        assert_eq!(normalize("Foo(1)"), "Foo(1)");
        assert_eq!(normalize("SQRT(4"), "SQRT(4");
        assert_eq!(normalize("sqrtx(4)"), "sqrtx(4)");
        assert_eq!(normalize("Sqrt + 1"), "Sqrt+1");
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(split_top_level("a,(b,c),d"), vec!["a", "(b,c)", "d"]);
        assert_eq!(split_top_level(""), vec![""]);
    }

    #[test]
    fn test_matching_paren() {
        assert_eq!(matching_paren("(a(b))c"), Some(5));
        assert_eq!(matching_paren("(a(b)"), None);
    }

    #[test]
    fn test_offsets_map_back_to_raw_input() {
        let normalized = normalize_with_offsets("1 +  x");
        assert_eq!(normalized.text, "1+x");
        assert_eq!(normalized.to_raw(&(2..3)), 5..6);
        assert_eq!(normalized.to_raw(&(0..3)), 0..6);
        // end of input
        assert_eq!(normalized.to_raw(&(3..4)), 6..7);
    }
}
