//! # validate 子命令 CLI 定义
//!
//! 在取证分析前校验证据文档质量
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/validate.rs`

use super::DEFAULT_EVIDENCE_DIR;
use clap::Args;
use std::path::PathBuf;

/// validate 子命令参数
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Evidence directory
    #[arg(long, default_value = DEFAULT_EVIDENCE_DIR)]
    pub directory: PathBuf,

    /// Minimum quality score to pass (0-100)
    #[arg(long, default_value_t = 60.0)]
    pub min_score: f64,

    /// Number of files to validate
    #[arg(long, default_value_t = 10)]
    pub file_limit: usize,

    /// Glob pattern for evidence files
    #[arg(long, default_value = "*.md")]
    pub pattern: String,

    /// Search subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Write per-file results to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
