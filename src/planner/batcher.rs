//! # 批次划分
//!
//! 按类别分块大小将分组切分为连续批次。
//!
//! ## 规则
//! - 类别按分组顺序（配置声明顺序）处理
//! - 批次编号全局共享，从 1 开始，类别优先、块次之
//! - 每个文件恰好出现在一个批次中，批次内保持原顺序
//! - 分块大小为 0 或类别无配置时立即报错，不产生任何批次
//!
//! ## 依赖关系
//! - 被 `planner/mod.rs` 使用
//! - 使用 `planner/estimator.rs` 计算批次耗时

use super::{estimator, CategoryTable};
use crate::error::{EvkitError, Result};
use crate::models::{Batch, FileGroups};

/// 划分所有分组为批次
pub fn make_batches(groups: &FileGroups, configs: &CategoryTable) -> Result<Vec<Batch>> {
    // 先校验全部配置，保证失败时不产生部分结果
    let mut resolved = Vec::new();
    for group in groups.iter() {
        let config = configs
            .get(&group.label)
            .ok_or_else(|| EvkitError::UnknownCategory {
                label: group.label.clone(),
            })?;
        if config.chunk_size == 0 {
            return Err(EvkitError::InvalidChunkSize {
                category: group.label.clone(),
                size: 0,
            });
        }
        resolved.push((group, config.chunk_size));
    }

    let mut batches = Vec::new();
    for (group, chunk_size) in resolved {
        for chunk in group.files.chunks(chunk_size) {
            batches.push(Batch {
                batch_id: batches.len() + 1,
                category: group.label.clone(),
                files: chunk.to_vec(),
                size: chunk.len(),
                estimated_minutes: 0.0,
            });
        }
    }

    let durations = estimator::estimate(&batches, configs)?;
    for (batch, minutes) in batches.iter_mut().zip(durations) {
        batch.estimated_minutes = minutes;
    }

    log::debug!(
        "partitioned {} files into {} batches",
        groups.total_files(),
        batches.len()
    );

    Ok(batches)
}
