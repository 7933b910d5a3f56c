//! # optimize 子命令 CLI 定义
//!
//! 按复杂度分类证据文件并生成分批规划
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/optimize.rs`

use super::DEFAULT_EVIDENCE_DIR;
use clap::Args;
use std::path::PathBuf;

/// optimize 子命令参数
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Evidence directory path
    #[arg(long, default_value = DEFAULT_EVIDENCE_DIR)]
    pub directory: PathBuf,

    /// Minimum batch size (lower bound for every category; profile sizes are kept when unset)
    #[arg(long)]
    pub min_batch_size: Option<usize>,

    /// Maximum batch size (upper bound for every category; profile sizes are kept when unset)
    #[arg(long)]
    pub max_batch_size: Option<usize>,

    /// TOML profile overriding the built-in complexity rules
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Export batch plan to JSON
    #[arg(long, default_value_t = false)]
    pub export: bool,

    /// Output path for the exported plan
    #[arg(long, default_value = "batch_plan.json")]
    pub output: PathBuf,
}
