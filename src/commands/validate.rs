//! # validate 命令实现
//!
//! 批量校验证据文档的质量门，任何文件未达标即返回错误（非零退出码）。
//!
//! ## 依赖关系
//! - 使用 `cli/validate.rs` 定义的参数
//! - 使用 `batch/` 收集文件并并行评分
//! - 使用 `quality/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, FileCollector};
use crate::cli::validate::ValidateArgs;
use crate::error::{EvkitError, Result};
use crate::quality::{self, FileReport, ValidationSummary};
use crate::utils::output;

/// 执行 validate 命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    output::print_header("Quality Gate Validation");

    if args.file_limit == 0 {
        return Err(EvkitError::InvalidArgument(
            "file limit must be at least 1".to_string(),
        ));
    }
    if !(0.0..=100.0).contains(&args.min_score) {
        return Err(EvkitError::InvalidArgument(format!(
            "minimum score must be within 0-100, got {}",
            args.min_score
        )));
    }

    let mut files = FileCollector::new(args.directory.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect_non_empty()?;
    files.truncate(args.file_limit);

    output::print_info(&format!(
        "Validating {} files with minimum score: {}",
        files.len(),
        args.min_score
    ));

    let runner = BatchRunner::new(args.jobs);
    let reports = runner
        .run(&files, "Scoring", |path| quality::validate_file(path))?
        .into_iter()
        .collect::<Result<Vec<FileReport>>>()?;

    output::print_separator();
    for report in &reports {
        print_file_result(report, args.min_score);
    }

    let summary = ValidationSummary::from_reports(&reports, args.min_score);
    print_summary(&summary);

    if let Some(ref csv_path) = args.csv {
        quality::to_csv(&reports, args.min_score, csv_path)?;
        output::print_success(&format!("Results saved to '{}'", csv_path.display()));
    }

    if summary.all_passed() {
        output::print_done("All files passed the quality gates");
        Ok(())
    } else {
        Err(EvkitError::ValidationFailed {
            failed: summary.failed,
            total: summary.total,
        })
    }
}

fn print_file_result(report: &FileReport, min_score: f64) {
    let line = format!(
        "{}: {:.1}/100 ({}/{} gates)",
        report.file,
        report.quality_score,
        report.passed_gates().count(),
        report.scores.len()
    );
    if report.is_passing(min_score) {
        output::print_pass(&line);
    } else {
        output::print_fail(&line);
        let failed: Vec<String> = report.failed_gates().map(|s| s.to_string()).collect();
        if !failed.is_empty() {
            println!("   Failed gates: {}", failed.join(", "));
        }
    }
}

fn print_summary(summary: &ValidationSummary) {
    output::print_header("Validation Summary");
    println!(
        "Passed: {}/{} ({:.1}%)",
        summary.passed,
        summary.total,
        summary.pass_rate()
    );
    println!(
        "Failed: {}/{} ({:.1}%)",
        summary.failed,
        summary.total,
        summary.fail_rate()
    );

    if !summary.common_failures.is_empty() {
        println!("\nCommon failure patterns:");
        for (gate, count) in &summary.common_failures {
            println!("  {}: {} files", gate, count);
        }
    }
}
