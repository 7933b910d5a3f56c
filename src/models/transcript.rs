//! # 字幕片段数据模型
//!
//! ## 依赖关系
//! - 被 `transcript/` 和 `commands/subs.rs` 使用

use serde::{Deserialize, Serialize};

/// 带时间戳的字幕片段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    /// 起始时间（秒）
    pub start: f64,
    /// 持续时间（秒）
    pub duration: f64,
}
