//! BatchRunner
//!
//! 对一组行逐一执行完整的求值管线。单行失败不影响后续行；
//! 行来源本身的 I/O 错误会中止整批并只报告一次。

use crate::error::EvalResult;
use crate::pipeline::Evaluation;
use crate::session::Pipeline;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// 批处理错误
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 单行的处理结果
#[derive(Debug)]
pub struct LineOutcome {
    /// 行号（从 1 开始）
    pub line_number: usize,
    /// 去掉首尾空白后的行，错误位置相对于它
    pub input: String,
    pub result: EvalResult<Evaluation>,
}

/// 批处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// 实际求值的行数（不含空行）
    pub evaluated: usize,
    /// 失败的行数
    pub failed: usize,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.evaluated - self.failed
    }
}

pub struct BatchRunner;

impl BatchRunner {
    /// 逐行求值，每行的结果按顺序交给 `report`
    ///
    /// 空白行会被跳过。行来源返回 I/O 错误时立即中止并返回该错误。
    pub fn run<P, I, F>(lines: I, pipeline: &mut P, mut report: F) -> io::Result<BatchSummary>
    where
        P: Pipeline + ?Sized,
        I: IntoIterator<Item = io::Result<String>>,
        F: FnMut(&LineOutcome),
    {
        let mut summary = BatchSummary::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let input = line.trim().to_string();
            if input.is_empty() {
                debug!(line_number, "skipping blank line");
                continue;
            }

            let result = pipeline.evaluate(&input);
            summary.evaluated += 1;
            if result.is_err() {
                summary.failed += 1;
            }

            debug!(line_number, ok = result.is_ok(), "batch line evaluated");
            report(&LineOutcome {
                line_number,
                input,
                result,
            });
        }

        Ok(summary)
    }

    /// 从任意 BufRead 读取行
    pub fn run_reader<P, R, F>(reader: R, pipeline: &mut P, report: F) -> io::Result<BatchSummary>
    where
        P: Pipeline + ?Sized,
        R: BufRead,
        F: FnMut(&LineOutcome),
    {
        Self::run(reader.lines(), pipeline, report)
    }

    /// 打开文件并逐行求值
    pub fn run_file<P, F>(
        path: impl AsRef<Path>,
        pipeline: &mut P,
        report: F,
    ) -> Result<BatchSummary, BatchError>
    where
        P: Pipeline + ?Sized,
        F: FnMut(&LineOutcome),
    {
        let path = path.as_ref();
        let io_error = |source| {
            warn!(path = %path.display(), error = %source, "batch aborted");
            BatchError::Io {
                path: path.to_path_buf(),
                source,
            }
        };

        let file = File::open(path).map_err(io_error)?;
        let summary = Self::run_reader(BufReader::new(file), pipeline, report).map_err(io_error)?;
        debug!(path = %path.display(), ?summary, "batch finished");
        Ok(summary)
    }
}
