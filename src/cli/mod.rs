//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `optimize`: 复杂度分批与耗时对比
//! - `parallel`: 并行工作通道模拟
//! - `validate`: 证据文档质量门校验
//! - `subs`: YouTube 字幕提取
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: optimize, parallel, validate, subs

pub mod optimize;
pub mod parallel;
pub mod subs;
pub mod validate;

use clap::{Parser, Subcommand};

/// 默认证据目录
pub const DEFAULT_EVIDENCE_DIR: &str = "bytecode/mapping/evidence/verified";

/// evkit - 证据批处理规划与质量校验工具箱
#[derive(Parser)]
#[command(name = "evkit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Evidence batch planning, quality gating and subtitle extraction", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Classify evidence files by complexity and build optimized batches
    Optimize(optimize::OptimizeArgs),

    /// Simulate a parallel verification plan across worker lanes
    Parallel(parallel::ParallelArgs),

    /// Validate evidence files against quality gates
    Validate(validate::ValidateArgs),

    /// Extract YouTube video subtitles as JSON with timestamps
    Subs(subs::SubsArgs),
}
