mod config;
mod output;
mod repl;

use anyhow::Result;
use calcite_diagnostics::Emitter;
use calcite_driver::{evaluate_one, Session};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calcite")]
#[command(about = "Calcite 计算器 - 表达式求值、历史记录、批量计算", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// 配置文件路径
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 禁用颜色输出
    #[arg(long, global = true)]
    no_color: bool,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 交互式会话 (默认)
    Repl,

    /// 求值一个表达式
    Eval {
        /// 表达式，例如 "power(2, 10)"
        expression: String,
    },

    /// 逐行求值文件中的表达式
    File {
        /// 输入文件
        path: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = config::load_config(cli.config.as_deref())?;
    if cli.no_color {
        config.output.color = false;
    }
    if !config.output.color {
        colored::control::set_override(false);
    }
    debug!(?config, "configuration loaded");
    let emitter = Emitter::with_colors(config.output.color);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl::run(&config, &emitter)?,
        Commands::Eval { expression } => cmd_eval(&expression, &config, &emitter),
        Commands::File { path } => cmd_file(&path, &config, &emitter),
    }

    Ok(())
}

/// 求值命令
fn cmd_eval(expression: &str, config: &config::Config, emitter: &Emitter) {
    match evaluate_one(expression) {
        Ok(evaluation) => output::print_evaluation(&evaluation, &config.output),
        Err(e) => {
            e.emit(emitter, expression);
            std::process::exit(1);
        }
    }
}

/// 批量求值命令
fn cmd_file(path: &std::path::Path, config: &config::Config, emitter: &Emitter) {
    let mut session = Session::new();
    match output::run_batch(path, &mut session, &config.output, emitter) {
        Ok(summary) if summary.failed == 0 => {}
        _ => std::process::exit(1),
    }
}
