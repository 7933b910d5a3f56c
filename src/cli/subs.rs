//! # subs 子命令 CLI 定义
//!
//! 提取 YouTube 视频字幕为 JSON
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/subs.rs`

use crate::transcript::fetcher::DEFAULT_FETCHER;
use clap::Args;
use std::path::PathBuf;

/// subs 子命令参数
#[derive(Args, Debug)]
pub struct SubsArgs {
    /// YouTube video ID (11 characters), full URL or shortened URL
    pub video_id: String,

    /// Save subtitles to file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long, default_value_t = false)]
    pub pretty: bool,

    /// Suppress non-error output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Preferred subtitle languages, in priority order
    #[arg(short, long = "language", default_value = "en")]
    pub languages: Vec<String>,

    /// External transcript fetcher program
    #[arg(long, default_value = DEFAULT_FETCHER)]
    pub fetcher: String,
}
