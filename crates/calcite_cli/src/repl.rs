//! 交互式会话
//!
//! 读取一行，识别命令，其余内容交给求值管线

use crate::config::Config;
use crate::output;
use anyhow::{Context, Result};
use calcite_diagnostics::{Diagnostic, Emitter};
use calcite_driver::{Pipeline, Session};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;
use tracing::debug;

/// 一行输入对应的命令
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    History,
    Help,
    Blank,
    /// `file <path>`
    File(&'a str),
    /// `file` 后面没有路径
    FileMissingPath,
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// 命令不区分大小写
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Blank;
        }
        if line.eq_ignore_ascii_case("exit") {
            return Command::Exit;
        }
        if line.eq_ignore_ascii_case("history") {
            return Command::History;
        }
        if line.eq_ignore_ascii_case("help") {
            return Command::Help;
        }
        if line.eq_ignore_ascii_case("file") {
            return Command::FileMissingPath;
        }
        match line.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("file ") => {
                Command::File(line[5..].trim())
            }
            _ => Command::Evaluate(line),
        }
    }
}

/// 运行交互式会话，直到 `exit` 或 EOF
pub fn run(config: &Config, emitter: &Emitter) -> Result<()> {
    let mut editor = DefaultEditor::new().context("failed to initialise line editor")?;
    let mut session = Session::new();

    if config.repl.banner {
        output::print_banner();
    }

    loop {
        let line = match editor.readline(&config.repl.prompt) {
            Ok(line) => line,
            // Ctrl-C 清空当前行
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        };
        if !line.trim().is_empty() {
            editor
                .add_history_entry(line.as_str())
                .context("failed to record line")?;
        }

        match Command::parse(&line) {
            Command::Exit => break,
            Command::History => output::print_history(session.history()),
            Command::Help => output::print_banner(),
            Command::Blank => {}
            Command::FileMissingPath => {
                emitter.emit(&Diagnostic::warning("missing file path").suggest("file <path>"))
            }
            Command::File(path) => {
                match output::run_batch(Path::new(path), &mut session, &config.output, emitter) {
                    Ok(summary) => debug!(?summary, "file command finished"),
                    Err(err) => debug!(error = %err, "file command failed"),
                }
            }
            Command::Evaluate(expr) => match session.evaluate(expr) {
                Ok(evaluation) => output::print_evaluation(&evaluation, &config.output),
                Err(err) => err.emit(emitter, expr),
            },
        }
    }

    println!("👋 再见!");
    Ok(())
}
