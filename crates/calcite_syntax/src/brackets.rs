//! BracketValidator
//!
//! 在词法分析之前确认括号配对。只有一种括号，一个计数器就够了。

/// 括号是否配对
///
/// 从左到右扫描：遇到 `(` 加一，遇到 `)` 减一，计数器会变成负数时立即失败，
/// 扫描结束时计数器必须恰好为 0。
pub fn is_balanced(text: &str) -> bool {
    let mut depth = 0usize;
    for byte in text.bytes() {
        match byte {
            b'(' => depth += 1,
            b')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}
