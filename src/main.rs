//! # evkit - 证据批处理规划与质量校验工具箱
//!
//! 将分散的证据处理辅助脚本统一成单一可执行文件。
//!
//! ## 子命令
//! - `optimize` - 按复杂度分批并估算耗时（每批固定耗时模型）
//! - `parallel` - 模拟并行工作通道（每文件耗时模型）
//! - `validate` - 证据文档质量门校验
//! - `subs`     - YouTube 字幕提取为 JSON
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/      (文件收集与并行执行)
//!   │     ├── planner/    (分类、分批、估算、导出)
//!   │     ├── quality/    (质量门评分)
//!   │     ├── transcript/ (字幕获取)
//!   │     └── models/     (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod planner;
mod quality;
mod transcript;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
    log::debug!("starting evkit v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
