//! # 字幕获取
//!
//! 通过外部 `youtube_transcript_api` 命令行程序获取字幕，
//! 解析其 JSON 输出并将失败原因映射为具体错误。
//!
//! ## 依赖关系
//! - 被 `transcript/mod.rs` 和 `commands/subs.rs` 使用
//! - 使用 `serde_json` 解析输出

use crate::error::{EvkitError, Result};
use crate::models::Segment;

use serde::Deserialize;
use std::process::Command;

/// 默认外部程序
pub const DEFAULT_FETCHER: &str = "youtube_transcript_api";

/// 字幕来源
pub trait TranscriptSource {
    /// 获取 `video_id` 的字幕，按语言优先级顺序尝试
    fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Vec<Segment>>;
}

/// 调用外部程序的字幕来源
pub struct ExternalFetcher {
    program: String,
}

impl ExternalFetcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// 构造命令行参数
    pub fn args(video_id: &str, languages: &[String]) -> Vec<String> {
        let mut args = vec![video_id.to_string()];
        if !languages.is_empty() {
            args.push("--languages".to_string());
            args.extend(languages.iter().cloned());
        }
        args.push("--format".to_string());
        args.push("json".to_string());
        args
    }
}

impl Default for ExternalFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_FETCHER)
    }
}

impl TranscriptSource for ExternalFetcher {
    fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Vec<Segment>> {
        let args = Self::args(video_id, languages);
        log::debug!("running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => EvkitError::CommandNotFound {
                    command: self.program.clone(),
                },
                _ => EvkitError::CommandFailed {
                    command: self.program.clone(),
                    stderr: e.to_string(),
                },
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(classify_failure(&self.program, video_id, &stderr));
        }

        // 部分版本以退出码 0 结束但把异常写入 stdout
        parse_output(&stdout).or_else(|e| match known_failure(video_id, &stdout) {
            Some(err) => Err(err),
            None => Err(e),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FetcherOutput {
    Batch(Vec<Vec<Segment>>),
    Single(Vec<Segment>),
}

/// 解析外部程序的 JSON 输出
///
/// 输出可能是片段列表，或每个视频一个列表；取第一个视频。
pub fn parse_output(stdout: &str) -> Result<Vec<Segment>> {
    let parsed: FetcherOutput = serde_json::from_str(stdout.trim())?;
    Ok(match parsed {
        FetcherOutput::Single(segments) => segments,
        FetcherOutput::Batch(mut videos) => {
            if videos.is_empty() {
                Vec::new()
            } else {
                videos.swap_remove(0)
            }
        }
    })
}

fn known_failure(video_id: &str, message: &str) -> Option<EvkitError> {
    let video_id = video_id.to_string();
    if message.contains("TranscriptsDisabled") || message.contains("Subtitles are disabled") {
        Some(EvkitError::TranscriptsDisabled { video_id })
    } else if message.contains("NoTranscriptFound") || message.contains("No transcripts were found") {
        Some(EvkitError::NoTranscriptFound { video_id })
    } else if message.contains("VideoUnavailable") || message.contains("video is no longer available")
    {
        Some(EvkitError::VideoUnavailable { video_id })
    } else if message.contains("IpBlocked") || message.contains("RequestBlocked") {
        Some(EvkitError::IpBlocked)
    } else {
        None
    }
}

/// 根据 stderr 将失败映射为具体错误
pub fn classify_failure(program: &str, video_id: &str, stderr: &str) -> EvkitError {
    known_failure(video_id, stderr).unwrap_or_else(|| EvkitError::CommandFailed {
        command: program.to_string(),
        stderr: stderr.trim().to_string(),
    })
}
