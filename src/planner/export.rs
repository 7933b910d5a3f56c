//! # 规划导出
//!
//! 将批次规划与并行规划导出为 JSON，供后续自动化处理。
//!
//! ## 支持格式
//! - batch_plan.json: 全部批次（编号、类别、成员、大小、耗时）及总计
//! - parallel_plan.json: 以 worker_id 为键的通道映射（文件、批次与耗时）
//!
//! 类别字段名为 `complexity`，`created_at` 为生成时的工作目录。
//!
//! ## 依赖关系
//! - 被 `commands/optimize.rs`, `commands/parallel.rs` 调用
//! - 使用 `serde_json` 写入文件

use super::estimator::total_minutes;
use crate::error::{EvkitError, Result};
use crate::models::{Batch, Lane, Optimization, Plan};

use serde::{Serialize, Serializer};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// 批次规划文档
#[derive(Debug, Serialize)]
pub struct BatchPlanDocument<'a> {
    pub profile: &'a str,
    pub created_at: String,
    pub total_batches: usize,
    pub total_files: usize,
    pub estimated_total_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimization: Option<&'a Optimization>,
    pub batches: &'a [Batch],
}

impl<'a> BatchPlanDocument<'a> {
    pub fn new(profile: &'a str, plan: &'a Plan, optimization: Option<&'a Optimization>) -> Self {
        BatchPlanDocument {
            profile,
            created_at: working_dir(),
            total_batches: plan.batches.len(),
            total_files: plan.batches.iter().map(|b| b.size).sum(),
            estimated_total_time: total_minutes(
                plan.batches.iter().map(|b| b.estimated_minutes),
            ),
            optimization,
            batches: &plan.batches,
        }
    }
}

/// 并行规划文档
#[derive(Debug, Serialize)]
pub struct ParallelPlanDocument<'a> {
    pub profile: &'a str,
    pub created_at: String,
    pub total_workers: usize,
    pub total_files: usize,
    pub estimated_parallel_time: f64,
    pub estimated_sequential_time: f64,
    #[serde(serialize_with = "lanes_by_worker")]
    pub workers: &'a [Lane],
}

/// 按通道顺序输出 `worker_id → 通道` 映射
fn lanes_by_worker<S: Serializer>(
    lanes: &&[Lane],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(lanes.iter().map(|lane| (lane.worker_id.as_str(), lane)))
}

impl<'a> ParallelPlanDocument<'a> {
    pub fn new(profile: &'a str, plan: &'a Plan) -> Self {
        ParallelPlanDocument {
            profile,
            created_at: working_dir(),
            total_workers: plan.lanes.len(),
            total_files: plan.summary.total_files,
            estimated_parallel_time: plan.summary.parallel_time,
            estimated_sequential_time: plan.summary.sequential_time,
            workers: &plan.lanes,
        }
    }
}

fn working_dir() -> String {
    std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

/// 以缩进格式写出 JSON 文档
pub fn write_json<T: Serialize>(value: &T, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| EvkitError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let file = File::create(output_path).map_err(|e| EvkitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|e| EvkitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileConfig;
    use crate::planner::Profile;

    fn sample_plan() -> Plan {
        let profile = Profile::from_config(&ProfileConfig::parallel()).unwrap();
        profile
            .plan(&["client.md", "Model.md", "Stream.md", "RSSocket.md"])
            .unwrap()
    }

    #[test]
    fn test_batch_plan_document() {
        let plan = sample_plan();
        let doc = BatchPlanDocument::new("parallel", &plan, None);
        assert_eq!(doc.total_batches, 3);
        assert_eq!(doc.total_files, 4);
        assert_eq!(doc.estimated_total_time, 4.0 * 2.0 + 2.5 + 1.5);

        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("optimization").is_none());
        assert_eq!(json["batches"][0]["complexity"], "network");
        assert!(json["created_at"].is_string());
        assert_eq!(json["batches"][0]["size"], 2);
    }

    #[test]
    fn test_write_parallel_plan() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("parallel_plan.json");
        let plan = sample_plan();

        write_json(&ParallelPlanDocument::new("parallel", &plan), &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["total_workers"], 4);
        assert_eq!(written["total_files"], 4);
        assert_eq!(written["estimated_parallel_time"], 8.0);
        assert_eq!(written["workers"]["worker_1"]["complexity"], "network");
        assert_eq!(written["workers"]["worker_1"]["file_count"], 2);
        assert_eq!(written["workers"]["worker_3"]["file_count"], 0);
        assert!(written["workers"]["worker_1"].get("worker_id").is_none());

        let text = fs::read_to_string(&path).unwrap();
        let positions: Vec<usize> = ["\"worker_1\"", "\"worker_2\"", "\"worker_3\"", "\"worker_4\""]
            .iter()
            .map(|key| text.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
