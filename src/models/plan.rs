//! # 批次规划数据模型
//!
//! 分类结果、批次、工作通道与汇总统计。所有实体构造后不可变。
//!
//! ## 依赖关系
//! - 被 `planner/` 构造
//! - 被 `commands/optimize.rs`, `commands/parallel.rs` 读取
//! - 使用 `serde` 导出 JSON

use serde::Serialize;

/// 单个类别的文件分组
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileGroup {
    /// 类别标签
    pub label: String,
    /// 文件名（保持发现顺序）
    pub files: Vec<String>,
}

/// 类别 → 文件名列表的有序映射
///
/// 类别顺序即配置声明顺序，决定批次编号。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileGroups {
    groups: Vec<FileGroup>,
}

impl FileGroups {
    /// 以给定类别顺序创建空分组
    pub(crate) fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FileGroups {
            groups: labels
                .into_iter()
                .map(|label| FileGroup {
                    label: label.into(),
                    files: Vec::new(),
                })
                .collect(),
        }
    }

    /// 追加文件到指定类别，类别不存在时新建
    pub(crate) fn push(&mut self, label: &str, filename: String) {
        match self.groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.files.push(filename),
            None => self.groups.push(FileGroup {
                label: label.to_string(),
                files: vec![filename],
            }),
        }
    }

    /// 按顺序遍历分组
    pub fn iter(&self) -> impl Iterator<Item = &FileGroup> {
        self.groups.iter()
    }

    /// 查找类别的文件列表
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.files.as_slice())
    }

    /// 文件总数
    pub fn total_files(&self) -> usize {
        self.groups.iter().map(|g| g.files.len()).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for FileGroups {
    fn from_iter<T: IntoIterator<Item = (S, Vec<String>)>>(iter: T) -> Self {
        FileGroups {
            groups: iter
                .into_iter()
                .map(|(label, files)| FileGroup {
                    label: label.into(),
                    files,
                })
                .collect(),
        }
    }
}

/// 批次
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Batch {
    /// 全局递增编号，从 1 开始
    pub batch_id: usize,
    /// 类别标签
    #[serde(rename = "complexity")]
    pub category: String,
    /// 成员文件（分组内的连续子序列）
    pub files: Vec<String>,
    /// 成员数量
    pub size: usize,
    /// 估算耗时（分钟）
    #[serde(rename = "estimated_time")]
    pub estimated_minutes: f64,
}

/// 模拟工作通道（类别与通道一一对应）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lane {
    /// 通道标识 (worker_1, worker_2, ...)，导出时作为映射键
    #[serde(skip)]
    pub worker_id: String,
    /// 对应类别
    #[serde(rename = "complexity")]
    pub category: String,
    /// 文件数量
    pub file_count: usize,
    /// 通道总耗时（分钟）
    #[serde(rename = "estimated_time")]
    pub estimated_minutes: f64,
    /// 全部文件
    pub files: Vec<String>,
    /// 通道内批次
    pub batches: Vec<Batch>,
}

/// 单次运行的汇总统计
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub total_files: usize,
    pub total_batches: usize,
    pub workers_used: usize,
    /// 所有批次耗时之和
    pub sequential_time: f64,
    /// 通道耗时最大值（模拟并行上界）
    pub parallel_time: f64,
    pub time_savings: f64,
    /// 效率提升百分比
    pub efficiency_gain: f64,
}

/// 与统一分批基线的对比
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Optimization {
    pub baseline_batches: usize,
    pub current_time: f64,
    pub optimized_time: f64,
    /// 可能为负（优化后更慢）
    pub time_savings: f64,
    /// 改进百分比，下限为 0
    pub improvement_percentage: f64,
}

/// 完整规划结果
#[derive(Debug, Clone)]
pub struct Plan {
    pub groups: FileGroups,
    pub batches: Vec<Batch>,
    pub lanes: Vec<Lane>,
    pub summary: RunSummary,
}
