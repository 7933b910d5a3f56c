//! # 批次规划模块
//!
//! 分类 → 分批 → 估算 的单向流水线。纯函数、单线程，不做任何 I/O。
//!
//! ## 功能
//! - 将原始 `ProfileConfig` 校验并编译为 `Profile`
//! - 按有序规则分类文件名
//! - 按类别分块大小划分批次
//! - 估算批次/通道耗时并汇总
//!
//! ## 依赖关系
//! - 被 `commands/optimize.rs`, `commands/parallel.rs` 调用
//! - 使用 `models/`
//! - 子模块: classifier, batcher, estimator, export

pub mod batcher;
pub mod classifier;
pub mod estimator;
pub mod export;

pub use classifier::{CategoryRule, Classifier, Pattern};
pub use estimator::UniformBaseline;

use crate::error::{EvkitError, Result};
use crate::models::{CostModel, Plan, ProfileConfig};

use std::collections::HashSet;

/// 单个类别的分批配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryConfig {
    /// 每批最大文件数
    pub chunk_size: usize,
    pub cost: CostModel,
}

/// 类别 → 配置的有序表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTable {
    entries: Vec<(String, CategoryConfig)>,
}

impl CategoryTable {
    pub fn get(&self, label: &str) -> Option<&CategoryConfig> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryConfig)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), c))
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut CategoryConfig> {
        self.entries.iter_mut().map(|(_, c)| c)
    }
}

impl FromIterator<(String, CategoryConfig)> for CategoryTable {
    fn from_iter<T: IntoIterator<Item = (String, CategoryConfig)>>(iter: T) -> Self {
        CategoryTable {
            entries: iter.into_iter().collect(),
        }
    }
}

/// 编译后的规划配置
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub extension: String,
    pub classifier: Classifier,
    pub configs: CategoryTable,
    pub baseline: Option<UniformBaseline>,
}

impl Profile {
    /// 校验并编译配置，任何非法值都在产生批次前报错
    pub fn from_config(config: &ProfileConfig) -> Result<Self> {
        if config.categories.is_empty() {
            return Err(EvkitError::InvalidConfig(format!(
                "profile '{}' declares no categories",
                config.name
            )));
        }

        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(config.categories.len());
        let mut configs = Vec::with_capacity(config.categories.len());

        for spec in &config.categories {
            if !seen.insert(spec.label.as_str()) {
                return Err(EvkitError::DuplicateCategory {
                    label: spec.label.clone(),
                });
            }

            if spec.chunk_size <= 0 {
                return Err(EvkitError::InvalidChunkSize {
                    category: spec.label.clone(),
                    size: spec.chunk_size,
                });
            }

            let rate = spec.cost.rate();
            if !rate.is_finite() || rate < 0.0 {
                return Err(EvkitError::InvalidConfig(format!(
                    "cost for category '{}' must be a non-negative number, got {}",
                    spec.label, rate
                )));
            }

            let patterns = spec
                .patterns
                .iter()
                .map(|p| Pattern::compile(p, config.match_mode))
                .collect::<Result<Vec<_>>>()?;

            rules.push(CategoryRule::new(spec.label.clone(), patterns));
            configs.push((
                spec.label.clone(),
                CategoryConfig {
                    chunk_size: spec.chunk_size as usize,
                    cost: spec.cost,
                },
            ));
        }

        if !seen.contains(config.fallback.as_str()) {
            return Err(EvkitError::UnknownCategory {
                label: config.fallback.clone(),
            });
        }

        let baseline = match config.baseline {
            Some(b) => {
                if b.batch_size <= 0 {
                    return Err(EvkitError::InvalidChunkSize {
                        category: "baseline".to_string(),
                        size: b.batch_size,
                    });
                }
                if !b.minutes_per_batch.is_finite() || b.minutes_per_batch < 0.0 {
                    return Err(EvkitError::InvalidConfig(format!(
                        "baseline minutes_per_batch must be a non-negative number, got {}",
                        b.minutes_per_batch
                    )));
                }
                Some(UniformBaseline {
                    batch_size: b.batch_size as usize,
                    minutes_per_batch: b.minutes_per_batch,
                })
            }
            None => None,
        };

        Ok(Profile {
            name: config.name.clone(),
            extension: config.extension.trim_start_matches('.').to_string(),
            classifier: Classifier::new(rules, config.fallback.clone()),
            configs: configs.into_iter().collect(),
            baseline,
        })
    }

    /// 输入文件的 glob 模式
    pub fn file_pattern(&self) -> String {
        format!("*.{}", self.extension)
    }

    /// 将每个类别的分块大小限制在 [min, max]
    pub fn clamp_chunk_sizes(&mut self, min: usize, max: usize) -> Result<()> {
        if min == 0 || min > max {
            return Err(EvkitError::InvalidArgument(format!(
                "batch size bounds must satisfy 1 <= min <= max, got {}..{}",
                min, max
            )));
        }
        for config in self.configs.iter_mut() {
            config.chunk_size = config.chunk_size.clamp(min, max);
        }
        Ok(())
    }

    /// 用统一分块大小覆盖所有类别
    pub fn override_chunk_size(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(EvkitError::InvalidArgument(
                "batch size must be a positive integer".to_string(),
            ));
        }
        for config in self.configs.iter_mut() {
            config.chunk_size = size;
        }
        Ok(())
    }

    /// 对文件名列表执行完整规划
    pub fn plan<S: AsRef<str>>(&self, filenames: &[S]) -> Result<Plan> {
        let groups = self.classifier.group(filenames);
        let batches = batcher::make_batches(&groups, &self.configs)?;
        let lanes = estimator::lanes(&groups, &batches);
        let summary = estimator::summarize(&lanes);

        Ok(Plan {
            groups,
            batches,
            lanes,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BaselineSpec, CategorySpec, MatchMode};

    fn spec(label: &str, patterns: &[&str], chunk_size: i64) -> CategorySpec {
        CategorySpec {
            label: label.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            chunk_size,
            cost: CostModel::Flat { minutes: 10.0 },
        }
    }

    fn config(categories: Vec<CategorySpec>, fallback: &str) -> ProfileConfig {
        ProfileConfig {
            name: "test".to_string(),
            extension: "md".to_string(),
            match_mode: MatchMode::Substring,
            fallback: fallback.to_string(),
            baseline: None,
            categories,
        }
    }

    #[test]
    fn test_builtin_profiles_compile() {
        let optimizer = Profile::from_config(&ProfileConfig::optimizer()).unwrap();
        assert_eq!(optimizer.file_pattern(), "*.md");
        assert_eq!(optimizer.classifier.classify("RSSocket.md"), "complex");
        assert_eq!(optimizer.classifier.classify("Object3.md"), "medium");
        assert_eq!(optimizer.classifier.classify("Stream.md"), "simple");
        assert_eq!(optimizer.classifier.classify("Unknown.md"), "medium");
        assert!(optimizer.baseline.is_some());

        let parallel = Profile::from_config(&ProfileConfig::parallel()).unwrap();
        assert_eq!(parallel.classifier.classify("NPCDef.md"), "objects");
        assert_eq!(parallel.classifier.classify("SpotAnim.md"), "animation");
        assert_eq!(parallel.classifier.classify("Stream.md"), "utilities");
        assert!(parallel.baseline.is_none());
    }

    #[test]
    fn test_rejects_non_positive_chunk_size() {
        for size in [0, -3] {
            let cfg = config(vec![spec("a", &[], size)], "a");
            let err = Profile::from_config(&cfg).unwrap_err();
            assert!(matches!(err, EvkitError::InvalidChunkSize { size: s, .. } if s == size));
        }
    }

    #[test]
    fn test_rejects_unknown_fallback() {
        let cfg = config(vec![spec("a", &["x"], 2)], "missing");
        let err = Profile::from_config(&cfg).unwrap_err();
        assert!(matches!(err, EvkitError::UnknownCategory { .. }));
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        let cfg = config(vec![spec("a", &[], 2), spec("a", &[], 3)], "a");
        assert!(matches!(
            Profile::from_config(&cfg).unwrap_err(),
            EvkitError::DuplicateCategory { .. }
        ));

        let cfg = config(Vec::new(), "a");
        assert!(matches!(
            Profile::from_config(&cfg).unwrap_err(),
            EvkitError::InvalidConfig(_)
        ));
    }

    #[test]
    fn test_rejects_bad_cost_and_baseline() {
        let mut bad_cost = spec("a", &[], 2);
        bad_cost.cost = CostModel::PerFile {
            minutes_per_file: -1.0,
        };
        let cfg = config(vec![bad_cost], "a");
        assert!(Profile::from_config(&cfg).is_err());

        let mut cfg = config(vec![spec("a", &[], 2)], "a");
        cfg.baseline = Some(BaselineSpec {
            batch_size: 0,
            minutes_per_batch: 35.0,
        });
        assert!(matches!(
            Profile::from_config(&cfg).unwrap_err(),
            EvkitError::InvalidChunkSize { .. }
        ));
    }

    #[test]
    fn test_rejects_invalid_regex() {
        let mut cfg = config(vec![spec("a", &["Class[0-9"], 2)], "a");
        cfg.match_mode = MatchMode::Regex;
        assert!(matches!(
            Profile::from_config(&cfg).unwrap_err(),
            EvkitError::InvalidPattern { .. }
        ));
    }

    #[test]
    fn test_clamp_and_override() {
        let mut profile = Profile::from_config(&ProfileConfig::optimizer()).unwrap();
        profile.clamp_chunk_sizes(3, 5).unwrap();
        let sizes: Vec<_> = profile.configs.iter().map(|(_, c)| c.chunk_size).collect();
        assert_eq!(sizes, vec![3, 4, 5]);

        assert!(profile.clamp_chunk_sizes(0, 5).is_err());
        assert!(profile.clamp_chunk_sizes(6, 5).is_err());

        profile.override_chunk_size(7).unwrap();
        assert!(profile.configs.iter().all(|(_, c)| c.chunk_size == 7));
        assert!(profile.override_chunk_size(0).is_err());
    }

    #[test]
    fn test_plan_flat_profile() {
        let profile = Profile::from_config(&ProfileConfig::optimizer()).unwrap();
        let files = [
            "client.md",
            "RSSocket.md",
            "OnDemandFetcher.md",
            "Model.md",
            "Stream.md",
            "Misc.md",
        ];
        let plan = profile.plan(&files).unwrap();

        assert_eq!(plan.groups.get("complex").unwrap().len(), 3);
        assert_eq!(plan.groups.get("medium").unwrap(), ["Model.md", "Misc.md"]);
        assert_eq!(plan.groups.get("simple").unwrap(), ["Stream.md"]);

        // complex: 2 + 1, medium: 1 批, simple: 1 批
        assert_eq!(plan.batches.len(), 4);
        let minutes: Vec<_> = plan.batches.iter().map(|b| b.estimated_minutes).collect();
        assert_eq!(minutes, vec![45.0, 45.0, 30.0, 20.0]);
        assert_eq!(plan.summary.sequential_time, 140.0);
        assert_eq!(plan.summary.parallel_time, 90.0);
        assert_eq!(plan.summary.total_files, 6);
    }
}
