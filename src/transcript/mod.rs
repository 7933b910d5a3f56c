//! # 字幕提取模块
//!
//! 校验 YouTube 视频标识，调用外部字幕获取程序，序列化结果。
//! 字幕内容本身的正确性由外部程序负责。
//!
//! ## 依赖关系
//! - 被 `commands/subs.rs` 调用
//! - 使用 `models/transcript.rs`
//! - 子模块: fetcher

pub mod fetcher;

pub use fetcher::{ExternalFetcher, TranscriptSource};

use crate::error::{EvkitError, Result};
use crate::models::Segment;

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static FULL_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"youtube\.com/watch\?v=([\w-]+)").unwrap());
static SHORT_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"youtu\.be/([\w-]+)").unwrap());
static RAW_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w-]{11}$").unwrap());

/// 校验并规范化视频标识
///
/// 接受完整 URL、短链接或 11 位原始 ID，返回原始 ID。
pub fn validate_video_id(input: &str) -> Result<String> {
    for re in [&*FULL_URL, &*SHORT_URL] {
        if let Some(id) = re.captures(input).and_then(|c| c.get(1)) {
            return Ok(id.as_str().to_string());
        }
    }

    if RAW_ID.is_match(input) {
        return Ok(input.to_string());
    }

    Err(EvkitError::InvalidVideoId(input.to_string()))
}

/// 序列化字幕片段，非 ASCII 字符原样输出
pub fn to_json(segments: &[Segment], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(segments)?
    } else {
        serde_json::to_string(segments)?
    };
    Ok(json)
}

/// 保存字幕到文件（自动创建父目录，缩进格式）
pub fn save(segments: &[Segment], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| EvkitError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    fs::write(output_path, to_json(segments, true)?).map_err(|e| EvkitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_video_id_forms() {
        assert_eq!(validate_video_id("dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
        assert_eq!(
            validate_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            validate_video_id("https://youtu.be/dQw4w9WgXcQ?si=abc").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(validate_video_id("a-b_c-d_e-f").unwrap(), "a-b_c-d_e-f");
    }

    #[test]
    fn test_validate_video_id_rejects() {
        for bad in ["", "short", "dQw4w9WgXcQx", "dQw4w9WgXc!", "https://vimeo.com/123"] {
            assert!(
                matches!(validate_video_id(bad), Err(EvkitError::InvalidVideoId(_))),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_json_keeps_unicode() {
        let segments = vec![Segment {
            text: "こんにちは".to_string(),
            start: 0.0,
            duration: 1.5,
        }];
        let compact = to_json(&segments, false).unwrap();
        assert_eq!(compact, r#"[{"text":"こんにちは","start":0.0,"duration":1.5}]"#);
        assert!(to_json(&segments, true).unwrap().contains("\n  {"));
    }

    #[test]
    fn test_save_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("subs.json");
        let segments = vec![Segment {
            text: "hi".to_string(),
            start: 1.0,
            duration: 2.0,
        }];

        save(&segments, &path).unwrap();

        let loaded: Vec<Segment> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, segments);
    }
}
