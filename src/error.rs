//! # 统一错误处理模块
//!
//! 定义 evkit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// evkit 统一错误类型
#[derive(Error, Debug)]
pub enum EvkitError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("No matching files found in '{path}' with pattern: {pattern}")]
    NoFilesFound { path: String, pattern: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse profile: {path}\nReason: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Invalid profile: {0}")]
    InvalidConfig(String),

    #[error("Invalid chunk size {size} for category '{category}' (must be a positive integer)")]
    InvalidChunkSize { category: String, size: i64 },

    #[error("Unknown category referenced: '{label}'")]
    UnknownCategory { label: String },

    #[error("Category declared more than once: '{label}'")]
    DuplicateCategory { label: String },

    #[error("Invalid pattern '{pattern}'\nReason: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 字幕提取错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid video ID or URL format: {0}. Expected 11-character ID or valid YouTube URL.")]
    InvalidVideoId(String),

    #[error("Video unavailable (may be private or deleted): {video_id}")]
    VideoUnavailable { video_id: String },

    #[error("No subtitles available for video {video_id}")]
    NoTranscriptFound { video_id: String },

    #[error("This video has subtitles disabled: {video_id}")]
    TranscriptsDisabled { video_id: String },

    #[error("YouTube is blocking requests from your IP. This may be due to rate limiting or using a cloud provider IP.")]
    IpBlocked,

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Quality gate failed: {failed}/{total} files below minimum score")]
    ValidationFailed { failed: usize, total: usize },

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, EvkitError>;
