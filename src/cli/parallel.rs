//! # parallel 子命令 CLI 定义
//!
//! 将证据文件分配到模拟工作通道并估算并行耗时
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/parallel.rs`

use super::DEFAULT_EVIDENCE_DIR;
use clap::Args;
use std::path::PathBuf;

/// parallel 子命令参数
#[derive(Args, Debug)]
pub struct ParallelArgs {
    /// Evidence directory path
    #[arg(long, default_value = DEFAULT_EVIDENCE_DIR)]
    pub directory: PathBuf,

    /// Number of parallel workers available
    #[arg(long, default_value_t = 4)]
    pub workers: usize,

    /// Files per batch inside each worker (overrides the profile)
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// TOML profile overriding the built-in worker lanes
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Export parallel plan to JSON
    #[arg(long, default_value_t = false)]
    pub export: bool,

    /// Output path for the exported plan
    #[arg(long, default_value = "parallel_plan.json")]
    pub output: PathBuf,
}
