//! Span - 输入位置信息

/// 输入文本中的位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// Span 辅助函数
pub trait SpanExt {
    /// 把 Span 限制在长度为 `len` 的文本之内
    fn clamp_to(&self, len: usize) -> Self;
}

impl SpanExt for Span {
    fn clamp_to(&self, len: usize) -> Self {
        let start = self.start.min(len);
        let end = self.end.clamp(start, len);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_end_of_input() {
        let eoi: Span = 3..4;
        assert_eq!(eoi.clamp_to(3), 3..3);
        assert_eq!((1..2).clamp_to(3), 1..2);
    }
}
