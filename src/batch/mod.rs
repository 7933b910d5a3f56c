//! # 批量处理模块
//!
//! 提供统一的文件发现与逐文件并行处理能力。
//!
//! ## 功能
//! - 收集匹配文件列表
//! - 并行处理（仅用于相互独立的文件检查）
//! - 进度反馈
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::{file_names, FileCollector};
pub use runner::BatchRunner;
