//! Session
//!
//! 运行循环持有的会话状态：每次成功的求值都会写入历史

use crate::error::EvalResult;
use crate::history::HistorySession;
use crate::pipeline::{evaluate_one, Evaluation};
use tracing::debug;

/// 逐行求值的管线，BatchRunner 通过它驱动每一行
pub trait Pipeline {
    fn evaluate(&mut self, input: &str) -> EvalResult<Evaluation>;
}

/// 一次进程运行对应的会话
#[derive(Debug, Default)]
pub struct Session {
    history: HistorySession,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &HistorySession {
        &self.history
    }
}

impl Pipeline for Session {
    fn evaluate(&mut self, input: &str) -> EvalResult<Evaluation> {
        let input = input.trim();
        let evaluation = evaluate_one(input)?;
        self.history.append(input, evaluation.formatted.clone());
        debug!(records = self.history.len(), "history appended");
        Ok(evaluation)
    }
}
