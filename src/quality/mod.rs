//! # 质量门校验模块
//!
//! 在取证分析前预先校验证据文档，减少返工。
//!
//! ## 功能
//! - 单文件评分与通过/失败判定
//! - 批量汇总与常见失败项统计
//! - 可选 CSV 导出
//!
//! ## 依赖关系
//! - 被 `commands/validate.rs` 调用
//! - 子模块: gates
//! - 使用 `csv` 导出结果

pub mod gates;

pub use gates::{Gate, GateScore};

use crate::error::{EvkitError, Result};
use crate::planner::estimator::percentage;

use serde::Serialize;
use std::fs;
use std::path::Path;

/// 单文件校验结果
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub quality_score: f64,
    pub scores: Vec<GateScore>,
}

impl FileReport {
    /// 通过的质量门
    pub fn passed_gates(&self) -> impl Iterator<Item = Gate> + '_ {
        self.scores.iter().filter(|s| s.passed()).map(|s| s.gate)
    }

    /// 未通过的质量门
    pub fn failed_gates(&self) -> impl Iterator<Item = &GateScore> + '_ {
        self.scores.iter().filter(|s| !s.passed())
    }

    /// 分数是否达到最低要求
    pub fn is_passing(&self, min_score: f64) -> bool {
        self.quality_score >= min_score
    }
}

/// 校验文档内容
pub fn validate_content(file: &str, content: &str) -> FileReport {
    let scores = gates::score_content(content);
    FileReport {
        file: file.to_string(),
        quality_score: gates::quality_score(&scores),
        scores,
    }
}

/// 读取并校验单个文件
pub fn validate_file(path: &Path) -> Result<FileReport> {
    let content = fs::read_to_string(path).map_err(|e| EvkitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    Ok(validate_content(&name, &content))
}

/// 批量校验汇总
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// 失败文件中最常见的未通过质量门（至多 3 项，按次数降序）
    pub common_failures: Vec<(Gate, usize)>,
}

impl ValidationSummary {
    pub fn from_reports(reports: &[FileReport], min_score: f64) -> Self {
        let failed_reports: Vec<&FileReport> =
            reports.iter().filter(|r| !r.is_passing(min_score)).collect();

        // 保持首次出现顺序，稳定排序后并列项按出现先后
        let mut counts: Vec<(Gate, usize)> = Vec::new();
        for report in &failed_reports {
            for score in report.failed_gates() {
                match counts.iter_mut().find(|(g, _)| *g == score.gate) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((score.gate, 1)),
                }
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(3);

        ValidationSummary {
            total: reports.len(),
            passed: reports.len() - failed_reports.len(),
            failed: failed_reports.len(),
            common_failures: counts,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        percentage(self.passed as f64, self.total as f64)
    }

    pub fn fail_rate(&self) -> f64 {
        percentage(self.failed as f64, self.total as f64)
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// 导出校验结果为 CSV
pub fn to_csv(reports: &[FileReport], min_score: f64, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["file", "quality_score", "status", "failed_gates"])?;

    for report in reports {
        let failed: Vec<String> = report.failed_gates().map(|s| s.to_string()).collect();
        wtr.write_record([
            report.file.clone(),
            format!("{:.1}", report.quality_score),
            if report.is_passing(min_score) {
                "PASS".to_string()
            } else {
                "FAIL".to_string()
            },
            failed.join("; "),
        ])?;
    }

    wtr.flush().map_err(|e| EvkitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
