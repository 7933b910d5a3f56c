//! # subs 命令实现
//!
//! 校验视频标识 → 调用字幕来源 → 输出或保存 JSON。
//!
//! ## 依赖关系
//! - 使用 `cli/subs.rs` 定义的参数
//! - 使用 `transcript/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::subs::SubsArgs;
use crate::error::Result;
use crate::transcript::{self, ExternalFetcher, TranscriptSource};
use crate::utils::{output, progress};

/// 执行 subs 命令
pub fn execute(args: SubsArgs) -> Result<()> {
    let fetcher = ExternalFetcher::new(args.fetcher.clone());
    run_with(&args, &fetcher)
}

/// 使用给定字幕来源执行
fn run_with(args: &SubsArgs, source: &dyn TranscriptSource) -> Result<()> {
    let video_id = transcript::validate_video_id(&args.video_id)?;

    if !args.quiet {
        output::print_info(&format!("Extracting subtitles for: {}", video_id));
    }

    let segments = if args.quiet {
        source.fetch(&video_id, &args.languages)?
    } else {
        let spinner = progress::create_spinner("Fetching transcript");
        let result = source.fetch(&video_id, &args.languages);
        spinner.finish_and_clear();
        result?
    };

    if !args.quiet {
        output::print_info(&format!("Found {} subtitle segments", segments.len()));
    }

    match args.output {
        Some(ref path) => {
            transcript::save(&segments, path)?;
            if !args.quiet {
                output::print_success(&format!("Subtitles saved to: {}", path.display()));
            }
        }
        None => {
            println!("{}", transcript::to_json(&segments, args.pretty)?);
            if !args.quiet {
                output::print_info(&format!("Total segments: {}", segments.len()));
            }
        }
    }

    Ok(())
}
