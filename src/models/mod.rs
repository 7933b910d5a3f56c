//! # 数据模型模块
//!
//! 定义规划配置、批次规划结果与字幕片段的数据模型。
//!
//! ## 依赖关系
//! - 被 `planner/`, `transcript/` 和 `commands/` 使用
//! - 子模块: profile, plan, transcript

pub mod plan;
pub mod profile;
pub mod transcript;

pub use plan::{Batch, FileGroup, FileGroups, Lane, Optimization, Plan, RunSummary};
pub use profile::{BaselineSpec, CategorySpec, CostModel, MatchMode, ProfileConfig};
pub use transcript::Segment;
