//! # 质量门定义与评分
//!
//! 对证据文档内容逐项打分，并按权重汇总为 0-100 的质量分数。
//!
//! ## 依赖关系
//! - 被 `quality/mod.rs` 使用
//! - 使用 `regex` + `once_cell` 缓存多行上下文正则

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// 质量门
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    BashCommands,
    MultiLineContext,
    DeobDiagrams,
    RelativePaths,
    OverviewSection,
    ArchitectureDocs,
    CommandVerification,
}

impl Gate {
    /// 全部质量门（评分与报告顺序）
    pub const ALL: [Gate; 7] = [
        Gate::BashCommands,
        Gate::MultiLineContext,
        Gate::DeobDiagrams,
        Gate::RelativePaths,
        Gate::OverviewSection,
        Gate::ArchitectureDocs,
        Gate::CommandVerification,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Gate::BashCommands => "bash_commands",
            Gate::MultiLineContext => "multi_line_context",
            Gate::DeobDiagrams => "deob_diagrams",
            Gate::RelativePaths => "relative_paths",
            Gate::OverviewSection => "overview_section",
            Gate::ArchitectureDocs => "architecture_docs",
            Gate::CommandVerification => "command_verification",
        }
    }

    /// 通过所需最低分
    pub fn min_score(&self) -> u32 {
        match self {
            Gate::BashCommands | Gate::MultiLineContext | Gate::OverviewSection => 3,
            Gate::RelativePaths => 4,
            Gate::DeobDiagrams | Gate::ArchitectureDocs | Gate::CommandVerification => 2,
        }
    }

    /// 权重（总和为 100）
    pub fn weight(&self) -> u32 {
        match self {
            Gate::BashCommands | Gate::MultiLineContext => 20,
            Gate::DeobDiagrams | Gate::OverviewSection => 15,
            Gate::RelativePaths | Gate::ArchitectureDocs | Gate::CommandVerification => 10,
        }
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 单项得分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateScore {
    pub gate: Gate,
    pub score: u32,
}

impl GateScore {
    pub fn passed(&self) -> bool {
        self.score >= self.gate.min_score()
    }
}

impl std::fmt::Display for GateScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{})", self.gate, self.score, self.gate.min_score())
    }
}

const BASH_MARKERS: [&str; 4] = ["grep -A", "grep -B", "`", "```bash"];
const OVERVIEW_MARKERS: [&str; 4] = [
    "## Overview",
    "## Class Overview",
    "### Purpose",
    "### Core Functionality",
];
const ARCHITECTURE_MARKERS: [&str; 4] = [
    "## Architecture",
    "## Relationships",
    "### Dependencies",
    "classDiagram",
];
const VERIFICATION_MARKERS: [&str; 4] = [
    "## Verification",
    "### Commands",
    "### Evidence",
    "### Testing",
];
const ABSOLUTE_PATH_MARKER: &str = "/Users/daxxog/Desktop";

static MULTI_LINE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"grep -A \d+", r"grep -B \d+", r"-A \d+ -B \d+"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

fn count_present(content: &str, markers: &[&str]) -> u32 {
    markers.iter().filter(|m| content.contains(*m)).count() as u32
}

/// 对文档内容逐项打分
pub fn score_content(content: &str) -> Vec<GateScore> {
    Gate::ALL
        .iter()
        .map(|&gate| GateScore {
            gate,
            score: score_gate(gate, content),
        })
        .collect()
}

fn score_gate(gate: Gate, content: &str) -> u32 {
    match gate {
        Gate::BashCommands => count_present(content, &BASH_MARKERS),
        Gate::MultiLineContext => MULTI_LINE_PATTERNS
            .iter()
            .filter(|re| re.is_match(content))
            .count() as u32,
        Gate::DeobDiagrams => {
            let has_diagram = content.contains("classDiagram") || content.contains("flowchart");
            // 允许少量原始名称引用
            let few_original_names = content.matches("OG_").count() <= 2;
            match (has_diagram, few_original_names) {
                (true, true) => 2,
                (true, false) => 1,
                _ => 0,
            }
        }
        Gate::RelativePaths => {
            if content.contains(ABSOLUTE_PATH_MARKER) {
                0
            } else {
                5
            }
        }
        Gate::OverviewSection => count_present(content, &OVERVIEW_MARKERS),
        Gate::ArchitectureDocs => count_present(content, &ARCHITECTURE_MARKERS),
        Gate::CommandVerification => count_present(content, &VERIFICATION_MARKERS),
    }
}

/// 加权质量分数 (0-100)
pub fn quality_score(scores: &[GateScore]) -> f64 {
    let mut total = 0.0;
    let mut max_possible = 0.0;

    for s in scores {
        let min_required = s.gate.min_score() as f64;
        let weight = s.gate.weight() as f64;

        let gate_score = if min_required > 0.0 {
            (s.score as f64 / min_required * 100.0).min(100.0)
        } else {
            0.0
        };

        total += gate_score / 100.0 * weight;
        max_possible += weight;
    }

    if max_possible > 0.0 {
        total / max_possible * 100.0
    } else {
        0.0
    }
}
