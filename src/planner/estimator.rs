//! # 耗时估算
//!
//! 从批次耗时推导通道耗时与整体汇总。并行耗时是模拟上界，不是实测值。
//!
//! ## 公式
//! - 顺序耗时 = 所有批次耗时之和
//! - 并行耗时 = 各通道耗时的最大值
//! - 节省 = 顺序 − 并行
//! - 效率提升 = (顺序 / 并行 − 1) × 100，并行为 0 时记为 0
//!
//! ## 依赖关系
//! - 被 `planner/mod.rs` 和 `commands/` 使用
//! - 使用 `models/plan.rs`

use super::CategoryTable;
use crate::error::{EvkitError, Result};
use crate::models::{Batch, FileGroups, Lane, Optimization, RunSummary};

/// 统一分批基线
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformBaseline {
    pub batch_size: usize,
    pub minutes_per_batch: f64,
}

impl UniformBaseline {
    /// 基线批次数（向上取整）
    pub fn batch_count(&self, total_files: usize) -> usize {
        if self.batch_size == 0 {
            return 0;
        }
        total_files.div_ceil(self.batch_size)
    }
}

/// 按类别耗时模型计算每个批次的耗时
pub fn estimate(batches: &[Batch], configs: &CategoryTable) -> Result<Vec<f64>> {
    batches
        .iter()
        .map(|batch| {
            configs
                .get(&batch.category)
                .map(|config| config.cost.batch_cost(batch.size))
                .ok_or_else(|| EvkitError::UnknownCategory {
                    label: batch.category.clone(),
                })
        })
        .collect()
}

/// 按类别构建工作通道（类别与通道一一对应，保持分组顺序）
pub fn lanes(groups: &FileGroups, batches: &[Batch]) -> Vec<Lane> {
    groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let lane_batches: Vec<Batch> = batches
                .iter()
                .filter(|b| b.category == group.label)
                .cloned()
                .collect();
            let estimated_minutes =
                total_minutes(lane_batches.iter().map(|b| b.estimated_minutes));

            Lane {
                worker_id: format!("worker_{}", i + 1),
                category: group.label.clone(),
                file_count: group.files.len(),
                estimated_minutes,
                files: group.files.clone(),
                batches: lane_batches,
            }
        })
        .collect()
}

/// 汇总通道耗时
pub fn summarize(lanes: &[Lane]) -> RunSummary {
    let sequential_time = total_minutes(lanes.iter().map(|l| l.estimated_minutes));
    let parallel_time = lanes
        .iter()
        .map(|l| l.estimated_minutes)
        .fold(0.0_f64, f64::max);

    RunSummary {
        total_files: lanes.iter().map(|l| l.file_count).sum(),
        total_batches: lanes.iter().map(|l| l.batches.len()).sum(),
        workers_used: lanes.iter().filter(|l| l.file_count > 0).count(),
        sequential_time,
        parallel_time,
        time_savings: (sequential_time - parallel_time).max(0.0),
        efficiency_gain: efficiency_gain(sequential_time, parallel_time),
    }
}

/// 耗时求和，空输入返回 +0.0
pub fn total_minutes<I: IntoIterator<Item = f64>>(minutes: I) -> f64 {
    minutes.into_iter().fold(0.0, |acc, m| acc + m)
}

/// 效率提升百分比
pub fn efficiency_gain(sequential: f64, parallel: f64) -> f64 {
    if parallel > 0.0 && parallel.is_finite() {
        ((sequential / parallel - 1.0) * 100.0).max(0.0)
    } else {
        0.0
    }
}

/// 与统一分批基线对比（固定批次耗时模型）
pub fn compare_with_baseline(
    baseline: &UniformBaseline,
    total_files: usize,
    batches: &[Batch],
) -> Optimization {
    let baseline_batches = baseline.batch_count(total_files);
    let current_time = baseline_batches as f64 * baseline.minutes_per_batch;
    let optimized_time = total_minutes(batches.iter().map(|b| b.estimated_minutes));
    let time_savings = current_time - optimized_time;

    Optimization {
        baseline_batches,
        current_time,
        optimized_time,
        time_savings,
        improvement_percentage: percentage(time_savings, current_time).max(0.0),
    }
}

/// 百分比，分母为 0 时返回 0
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}
