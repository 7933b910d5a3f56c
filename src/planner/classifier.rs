//! # 文件分类器
//!
//! 按有序规则将文件名映射到类别标签。
//!
//! ## 规则
//! - 按声明顺序求值规则，规则内按顺序求值模式
//! - 第一个匹配即返回，不按长度或特异性排序
//! - 匹配区分大小写且不锚定
//! - 无匹配时返回回退类别，因此总是有结果
//!
//! ## 依赖关系
//! - 被 `planner/mod.rs` 使用
//! - 使用 `regex` 编译正则模式

use crate::error::{EvkitError, Result};
use crate::models::{FileGroups, MatchMode};

use regex::Regex;

/// 单个匹配模式
#[derive(Debug, Clone)]
pub enum Pattern {
    Substring(String),
    Regex(Regex),
}

impl Pattern {
    /// 按匹配方式编译模式
    pub fn compile(raw: &str, mode: MatchMode) -> Result<Self> {
        match mode {
            MatchMode::Substring => Ok(Pattern::Substring(raw.to_string())),
            MatchMode::Regex => Regex::new(raw)
                .map(Pattern::Regex)
                .map_err(|e| EvkitError::InvalidPattern {
                    pattern: raw.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    pub fn is_match(&self, filename: &str) -> bool {
        match self {
            Pattern::Substring(needle) => filename.contains(needle.as_str()),
            Pattern::Regex(re) => re.is_match(filename),
        }
    }
}

/// 类别规则：标签 + 有序模式
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub label: String,
    pub patterns: Vec<Pattern>,
}

impl CategoryRule {
    pub fn new(label: impl Into<String>, patterns: Vec<Pattern>) -> Self {
        CategoryRule {
            label: label.into(),
            patterns,
        }
    }

    /// 任一模式匹配即命中
    pub fn matches(&self, filename: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(filename))
    }
}

/// 返回第一个命中规则的类别，否则返回 `fallback`
pub fn classify<'a>(filename: &str, rules: &'a [CategoryRule], fallback: &'a str) -> &'a str {
    rules
        .iter()
        .find(|rule| rule.matches(filename))
        .map(|rule| rule.label.as_str())
        .unwrap_or(fallback)
}

/// 文件分类器
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<CategoryRule>,
    fallback: String,
}

impl Classifier {
    pub fn new(rules: Vec<CategoryRule>, fallback: impl Into<String>) -> Self {
        Classifier {
            rules,
            fallback: fallback.into(),
        }
    }

    /// 分类单个文件名
    pub fn classify(&self, filename: &str) -> &str {
        classify(filename, &self.rules, &self.fallback)
    }

    /// 所有类别标签（规则顺序，回退类别若未声明则追加在末尾）
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.rules.iter().map(|r| r.label.as_str()).collect();
        if !labels.contains(&self.fallback.as_str()) {
            labels.push(&self.fallback);
        }
        labels
    }

    /// 将文件名按类别分组，组内保持输入顺序
    pub fn group<S: AsRef<str>>(&self, filenames: &[S]) -> FileGroups {
        let mut groups = FileGroups::with_labels(self.labels());
        for name in filenames {
            let name = name.as_ref();
            let label = self.classify(name);
            log::debug!("classified '{}' as '{}'", name, label);
            groups.push(label, name.to_string());
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn substring_rule(label: &str, patterns: &[&str]) -> CategoryRule {
        CategoryRule::new(
            label,
            patterns
                .iter()
                .map(|p| Pattern::compile(p, MatchMode::Substring).unwrap())
                .collect(),
        )
    }

    fn sample_classifier() -> Classifier {
        Classifier::new(
            vec![
                substring_rule("network", &["RSSocket", "OnDemand", "client"]),
                substring_rule("objects", &["Object", "Model"]),
            ],
            "utilities",
        )
    }

    #[test]
    fn test_first_rule_wins() {
        let classifier = sample_classifier();
        // 同时命中 network 与 objects
        assert_eq!(classifier.classify("clientObject.md"), "network");
        assert_eq!(classifier.classify("ObjectOnDemand.md"), "network");
        assert_eq!(classifier.classify("Model.md"), "objects");
    }

    #[test]
    fn test_fallback_iff_no_match() {
        let classifier = sample_classifier();
        for name in ["Stream.md", "", "x", "CLIENT.md", "rssocket.md"] {
            assert_eq!(classifier.classify(name), "utilities", "{}", name);
        }
        for name in ["RSSocket.md", "a_client_b", "Model3"] {
            assert_ne!(classifier.classify(name), "utilities", "{}", name);
        }
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let classifier = Classifier::new(vec![substring_rule("all", &[""])], "none");
        assert_eq!(classifier.classify(""), "all");
        assert_eq!(classifier.classify("anything"), "all");
    }

    #[test]
    fn test_regex_unanchored() {
        let rule = CategoryRule::new(
            "medium",
            vec![
                Pattern::compile(r"Object\d", MatchMode::Regex).unwrap(),
                Pattern::compile(r"Class\d\d", MatchMode::Regex).unwrap(),
            ],
        );
        let rules = vec![rule];
        assert_eq!(classify("Object5.md", &rules, "simple"), "medium");
        assert_eq!(classify("xxClass30yy.md", &rules, "simple"), "medium");
        assert_eq!(classify("Class3.md", &rules, "simple"), "simple");
        assert_eq!(classify("Objects.md", &rules, "simple"), "simple");
    }

    #[test]
    fn test_invalid_regex() {
        let err = Pattern::compile("Object(", MatchMode::Regex).unwrap_err();
        assert!(matches!(err, EvkitError::InvalidPattern { .. }));
        // 子串模式不解析正则语法
        assert!(Pattern::compile("Object(", MatchMode::Substring).is_ok());
    }

    #[test]
    fn test_group_preserves_discovery_order() {
        let classifier = sample_classifier();
        let files = ["b_client.md", "Model.md", "Stream.md", "a_client.md"];
        let groups = classifier.group(&files);

        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["network", "objects", "utilities"]);
        assert_eq!(groups.get("network").unwrap(), ["b_client.md", "a_client.md"]);
        assert_eq!(groups.get("objects").unwrap(), ["Model.md"]);
        assert_eq!(groups.get("utilities").unwrap(), ["Stream.md"]);
        assert_eq!(groups.total_files(), files.len());
    }

    #[test]
    fn test_labels_include_fallback_once() {
        let classifier = Classifier::new(vec![substring_rule("medium", &["Model"])], "medium");
        assert_eq!(classifier.labels(), vec!["medium"]);
        assert_eq!(sample_classifier().labels(), vec!["network", "objects", "utilities"]);
    }
}
