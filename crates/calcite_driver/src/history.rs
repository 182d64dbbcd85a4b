//! HistorySession
//!
//! 一次运行内的计算记录，只追加、不删除、不持久化

use std::fmt;

/// 一条计算记录，追加后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    input: String,
    result: String,
}

impl HistoryRecord {
    /// 用户输入的原文
    pub fn input(&self) -> &str {
        &self.input
    }

    /// 格式化后的结果
    pub fn result(&self) -> &str {
        &self.result
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.input, self.result)
    }
}

/// 按到达顺序保存的计算记录
#[derive(Debug, Default)]
pub struct HistorySession {
    records: Vec<HistoryRecord>,
}

impl HistorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条记录
    pub fn append(&mut self, input: impl Into<String>, result: impl Into<String>) {
        self.records.push(HistoryRecord {
            input: input.into(),
            result: result.into(),
        });
    }

    /// 所有记录（插入顺序）
    pub fn all(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let history = HistorySession::new();
        assert!(history.is_empty());
        assert_eq!(history.all(), &[]);
    }

    #[test]
    fn test_insertion_order() {
        let mut history = HistorySession::new();
        history.append("2+2", "4");
        history.append("1/4", "0.25");

        let lines: Vec<String> = history.all().iter().map(|r| r.to_string()).collect();
        assert_eq!(lines, vec!["2+2 = 4", "1/4 = 0.25"]);
        assert_eq!(history.all()[1].input(), "1/4");
        assert_eq!(history.all()[1].result(), "0.25");
        assert_eq!(history.len(), 2);
    }
}
