//! 终端输出：欢迎信息、结果、历史、批处理进度

use crate::config::OutputConfig;
use calcite_diagnostics::{DiagnosticSink, Emitter};
use calcite_driver::{
    BatchError, BatchRunner, BatchSummary, Evaluation, HistorySession, LineOutcome, Pipeline,
};
use colored::*;
use std::path::Path;

/// 欢迎信息
pub fn print_banner() {
    println!("{}", "🧮 Calcite 计算器".bold());
    println!("  函数:   sqrt(x), abs(x), power(base, exponent), round(x)");
    println!("  运算符: + - * / % ^  (^ 右结合，一元负号优先于 ^)");
    println!("  命令:   history 查看历史 | file <路径> 批量计算 | help 帮助 | exit 退出");
}

/// 输出一次成功的求值
pub fn print_evaluation(evaluation: &Evaluation, output: &OutputConfig) {
    if output.show_normalized {
        println!("  {}", evaluation.normalized.bright_black());
    }
    println!("{} {}", "=".green().bold(), evaluation.formatted.bold());
}

/// 输出历史记录
pub fn print_history(history: &HistorySession) {
    if history.is_empty() {
        println!("📭 历史为空");
        return;
    }
    println!("📜 计算历史:");
    for record in history.all() {
        println!("{}", record);
    }
}

/// 逐行输出批处理结果，最后输出统计
pub fn run_batch<P: Pipeline>(
    path: &Path,
    pipeline: &mut P,
    output: &OutputConfig,
    emitter: &Emitter,
) -> Result<BatchSummary, BatchError> {
    println!("📂 批量计算 {} ...", path.display());

    let mut sink = DiagnosticSink::new();
    let summary = BatchRunner::run_file(path, pipeline, |outcome: &LineOutcome| {
        println!("{} {}", "Processing:".blue(), outcome.input);
        match &outcome.result {
            Ok(evaluation) => print_evaluation(evaluation, output),
            Err(err) => {
                err.emit(emitter, &outcome.input);
                err.collect_to_sink(&mut sink);
            }
        }
    });

    match &summary {
        Ok(summary) if sink.has_errors() => println!(
            "⚠️  完成 {} 行，其中 {} 行失败",
            summary.evaluated,
            sink.error_count()
        ),
        Ok(summary) => println!("✅ 完成 {} 行", summary.evaluated),
        Err(err) => eprintln!("❌ {}", err),
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcite_driver::Session;
    use std::io::Write;

    #[test]
    fn test_run_batch_reports_summary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1+1\n\n5/0\nsqrt(9)").unwrap();

        let mut session = Session::new();
        let summary = run_batch(
            file.path(),
            &mut session,
            &OutputConfig::default(),
            &Emitter::without_colors(),
        )
        .unwrap();

        assert_eq!(summary.evaluated, 3);
        assert_eq!(summary.failed, 1);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_run_batch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        let result = run_batch(
            &dir.path().join("missing.txt"),
            &mut session,
            &OutputConfig::default(),
            &Emitter::without_colors(),
        );
        assert!(matches!(result, Err(BatchError::Io { .. })));
        assert!(session.history().is_empty());
    }
}
