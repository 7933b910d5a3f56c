//! # 规划配置数据模型
//!
//! 描述分类规则、分块大小与耗时模型的原始配置（可从 TOML 加载）。
//!
//! ## 依赖关系
//! - 被 `planner/mod.rs` 编译为 `Profile`
//! - 被 `commands/optimize.rs`, `commands/parallel.rs` 使用
//! - 使用 `toml` 反序列化

use crate::error::{EvkitError, Result};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 模式匹配方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// 非锚定子串匹配
    #[default]
    Substring,
    /// 非锚定正则搜索
    Regex,
}

/// 批次耗时模型
///
/// 两种模型代表对“批次成本”的不同理解，按类别分别选择，不做合并。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum CostModel {
    /// 每批次固定耗时（分钟），与成员数量无关
    Flat { minutes: f64 },
    /// 每文件耗时（分钟），批次耗时 = 成员数 × 单价
    PerFile { minutes_per_file: f64 },
}

impl CostModel {
    /// 计算含 `member_count` 个文件的批次耗时
    pub fn batch_cost(&self, member_count: usize) -> f64 {
        match *self {
            CostModel::Flat { minutes } => minutes,
            CostModel::PerFile { minutes_per_file } => member_count as f64 * minutes_per_file,
        }
    }

    /// 模型参数值
    pub fn rate(&self) -> f64 {
        match *self {
            CostModel::Flat { minutes } => minutes,
            CostModel::PerFile { minutes_per_file } => minutes_per_file,
        }
    }
}

impl std::fmt::Display for CostModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostModel::Flat { minutes } => write!(f, "{:.1} min/batch", minutes),
            CostModel::PerFile { minutes_per_file } => {
                write!(f, "{:.1} min/file", minutes_per_file)
            }
        }
    }
}

/// 单个类别的原始配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    /// 类别标签
    pub label: String,

    /// 匹配模式（按声明顺序求值）
    #[serde(default)]
    pub patterns: Vec<String>,

    /// 每批文件数，编译时校验为正整数
    pub chunk_size: i64,

    /// 耗时模型
    pub cost: CostModel,
}

/// 统一分批基线（用于固定耗时模型的对比）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineSpec {
    pub batch_size: i64,
    pub minutes_per_batch: f64,
}

/// 规划配置（未校验）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// 配置名称
    pub name: String,

    /// 扫描的文件扩展名（不含点）
    #[serde(default = "default_extension")]
    pub extension: String,

    /// 模式匹配方式
    #[serde(default)]
    pub match_mode: MatchMode,

    /// 无规则匹配时的回退类别
    pub fallback: String,

    /// 可选对比基线
    #[serde(default)]
    pub baseline: Option<BaselineSpec>,

    /// 类别列表，声明顺序即规则优先级与批次编号顺序
    #[serde(rename = "category", default)]
    pub categories: Vec<CategorySpec>,
}

fn default_extension() -> String {
    "md".to_string()
}

impl ProfileConfig {
    /// 从 TOML 文件加载配置
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| EvkitError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_toml_str(&content).map_err(|reason| EvkitError::ConfigParse {
            path: path.display().to_string(),
            reason,
        })
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// 复杂度分批配置（固定批次耗时）
    pub fn optimizer() -> Self {
        ProfileConfig {
            name: "optimize".to_string(),
            extension: default_extension(),
            match_mode: MatchMode::Regex,
            fallback: "medium".to_string(),
            baseline: Some(BaselineSpec {
                batch_size: 4,
                minutes_per_batch: 35.0,
            }),
            categories: vec![
                flat(
                    "complex",
                    &["RSSocket", "OnDemand", "RSInterface", "client", "WorldController"],
                    2,
                    45.0,
                ),
                flat(
                    "medium",
                    &[r"Object\d", "Animation", "Model", "Entity", r"Class\d\d", "Animable"],
                    4,
                    30.0,
                ),
                flat(
                    "simple",
                    &["SizeConstants", "TextInput", "Node", "Stream", "Decompressor"],
                    6,
                    20.0,
                ),
            ],
        }
    }

    /// 并行工作通道配置（每文件耗时）
    pub fn parallel() -> Self {
        ProfileConfig {
            name: "parallel".to_string(),
            extension: default_extension(),
            match_mode: MatchMode::Substring,
            fallback: "utilities".to_string(),
            baseline: None,
            categories: vec![
                per_file(
                    "network",
                    &["RSSocket", "OnDemand", "RSInterface", "client", "WorldController"],
                    4.0,
                ),
                per_file("objects", &["Object", "Model", "Entity", "NPC", "Item"], 2.5),
                per_file("animation", &["Animation", "Animable", "SpotAnim"], 3.0),
                per_file("utilities", &[], 1.5),
            ],
        }
    }
}

fn flat(label: &str, patterns: &[&str], chunk_size: i64, minutes: f64) -> CategorySpec {
    CategorySpec {
        label: label.to_string(),
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
        chunk_size,
        cost: CostModel::Flat { minutes },
    }
}

fn per_file(label: &str, patterns: &[&str], minutes_per_file: f64) -> CategorySpec {
    CategorySpec {
        label: label.to_string(),
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
        chunk_size: 3,
        cost: CostModel::PerFile { minutes_per_file },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_models() {
        let flat = CostModel::Flat { minutes: 45.0 };
        assert_eq!(flat.batch_cost(1), 45.0);
        assert_eq!(flat.batch_cost(6), 45.0);

        let per_file = CostModel::PerFile {
            minutes_per_file: 2.5,
        };
        assert_eq!(per_file.batch_cost(0), 0.0);
        assert_eq!(per_file.batch_cost(4), 10.0);
    }

    #[test]
    fn test_parse_toml_profile() {
        let content = r#"
name = "custom"
match_mode = "regex"
fallback = "medium"

[baseline]
batch_size = 4
minutes_per_batch = 35.0

[[category]]
label = "complex"
patterns = ["RSSocket", "client"]
chunk_size = 2
cost = { model = "flat", minutes = 45.0 }

[[category]]
label = "medium"
chunk_size = 4
cost = { model = "per_file", minutes_per_file = 2.5 }
"#;
        let config = ProfileConfig::from_toml_str(content).unwrap();
        assert_eq!(config.name, "custom");
        assert_eq!(config.extension, "md");
        assert_eq!(config.match_mode, MatchMode::Regex);
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories[0].patterns, vec!["RSSocket", "client"]);
        assert!(config.categories[1].patterns.is_empty());
        assert_eq!(
            config.categories[1].cost,
            CostModel::PerFile {
                minutes_per_file: 2.5
            }
        );
        assert_eq!(config.baseline.map(|b| b.batch_size), Some(4));
    }

    #[test]
    fn test_parse_rejects_unknown_cost_model() {
        let content = r#"
name = "bad"
fallback = "a"

[[category]]
label = "a"
chunk_size = 1
cost = { model = "hourly", minutes = 1.0 }
"#;
        assert!(ProfileConfig::from_toml_str(content).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ProfileConfig::load(Path::new("/nonexistent/profile.toml")).unwrap_err();
        assert!(matches!(err, EvkitError::FileReadError { .. }));
    }

    #[test]
    fn test_builtin_profiles() {
        let optimizer = ProfileConfig::optimizer();
        let labels: Vec<_> = optimizer.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["complex", "medium", "simple"]);
        assert_eq!(optimizer.fallback, "medium");

        let parallel = ProfileConfig::parallel();
        assert_eq!(parallel.categories.len(), 4);
        assert!(parallel.categories.iter().all(|c| c.chunk_size == 3));
        assert_eq!(parallel.fallback, "utilities");
    }
}
