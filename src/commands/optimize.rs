//! # optimize 命令实现
//!
//! 按复杂度分类证据文件，生成分批规划并与统一分批基线对比。
//!
//! ## 功能
//! - 分类汇总（数量与占比）
//! - 批次分布与逐批明细
//! - 基线对比与模拟通道分析
//! - 可选导出 batch_plan.json
//!
//! ## 依赖关系
//! - 使用 `cli/optimize.rs` 定义的参数
//! - 使用 `planner/`
//! - 使用 `utils/output.rs`

use super::{discover, load_profile};
use crate::cli::optimize::OptimizeArgs;
use crate::error::Result;
use crate::models::{Optimization, Plan, ProfileConfig};
use crate::planner::estimator::{compare_with_baseline, percentage};
use crate::planner::export::{self, BatchPlanDocument};
use crate::planner::{Profile, UniformBaseline};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 分类汇总行
#[derive(Debug, Clone, Tabled)]
struct ClassificationRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Files")]
    files: usize,
    #[tabled(rename = "Share")]
    share: String,
}

/// 批次分布行
#[derive(Debug, Clone, Tabled)]
struct DistributionRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Batches")]
    batches: usize,
    #[tabled(rename = "Files/Batch")]
    chunk_size: usize,
    #[tabled(rename = "Cost")]
    cost: String,
}

/// 批次明细行
#[derive(Debug, Clone, Tabled)]
struct BatchRow {
    #[tabled(rename = "Batch")]
    batch_id: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Files")]
    size: usize,
    #[tabled(rename = "Minutes")]
    minutes: String,
    #[tabled(rename = "Members")]
    members: String,
}

/// 执行 optimize 命令
pub fn execute(args: OptimizeArgs) -> Result<()> {
    output::print_header("Dynamic Batch Optimization Report");

    let mut profile = load_profile(args.profile.as_deref(), ProfileConfig::optimizer)?;
    if args.min_batch_size.is_some() || args.max_batch_size.is_some() {
        profile.clamp_chunk_sizes(
            args.min_batch_size.unwrap_or(1),
            args.max_batch_size.unwrap_or(usize::MAX),
        )?;
    }

    let filenames = discover(&args.directory, &profile)?;
    let plan = profile.plan(&filenames)?;

    let optimization = profile
        .baseline
        .map(|b| compare_with_baseline(&b, plan.summary.total_files, &plan.batches));

    print_report(&profile, &plan, optimization.as_ref());

    if args.export {
        let doc = BatchPlanDocument::new(&profile.name, &plan, optimization.as_ref());
        export::write_json(&doc, &args.output)?;
        output::print_success(&format!(
            "Batch plan exported to '{}'",
            args.output.display()
        ));
    }

    output::print_done(&format!(
        "Planned {} files into {} batches",
        plan.summary.total_files,
        plan.batches.len()
    ));

    Ok(())
}

/// 基线批次数的计算方式（向上取整）
fn baseline_note(baseline: &UniformBaseline, total_files: usize) -> String {
    format!(
        "Baseline: ceil({} files / {}) = {} batches × {:.0} min",
        total_files,
        baseline.batch_size,
        baseline.batch_count(total_files),
        baseline.minutes_per_batch
    )
}

fn print_report(profile: &Profile, plan: &Plan, optimization: Option<&Optimization>) {
    output::print_header("Classification Summary");
    println!("{}", Table::new(classification_rows(plan)));

    output::print_header("Optimized Batch Distribution");
    println!("{}", Table::new(distribution_rows(profile, plan)));
    output::print_info(&format!("Total: {} batches", plan.batches.len()));

    output::print_header("Time Optimization Analysis");
    match optimization {
        Some(opt) => {
            println!(
                "Current approach:     {:>6.0} minutes ({} uniform batches)",
                opt.current_time, opt.baseline_batches
            );
            println!("Optimized approach:   {:>6.0} minutes", opt.optimized_time);
            println!(
                "Time savings:         {:>6.0} minutes ({:.1}%)",
                opt.time_savings, opt.improvement_percentage
            );
        }
        None => output::print_info("Profile declares no baseline; skipping comparison."),
    }
    if let Some(ref baseline) = profile.baseline {
        output::print_info(&baseline_note(baseline, plan.summary.total_files));
    }

    let summary = &plan.summary;
    output::print_separator();
    println!(
        "Sequential total:     {:>6.1} minutes",
        summary.sequential_time
    );
    println!(
        "Parallel bound:       {:>6.1} minutes ({} lanes)",
        summary.parallel_time, summary.workers_used
    );
    println!(
        "Efficiency gain:      {:>6.1}%",
        summary.efficiency_gain
    );

    output::print_header("Detailed Batch Breakdown");
    println!("{}", Table::new(batch_rows(plan)));
}

fn classification_rows(plan: &Plan) -> Vec<ClassificationRow> {
    let total = plan.groups.total_files();
    let mut rows: Vec<ClassificationRow> = plan
        .groups
        .iter()
        .map(|g| ClassificationRow {
            category: output::capitalize(&g.label),
            files: g.files.len(),
            share: format!("{:.1}%", percentage(g.files.len() as f64, total as f64)),
        })
        .collect();

    rows.push(ClassificationRow {
        category: "Total".to_string(),
        files: total,
        share: format!("{:.1}%", if total > 0 { 100.0 } else { 0.0 }),
    });
    rows
}

fn distribution_rows(profile: &Profile, plan: &Plan) -> Vec<DistributionRow> {
    profile
        .configs
        .iter()
        .map(|(label, config)| DistributionRow {
            category: output::capitalize(label),
            batches: plan.batches.iter().filter(|b| b.category == label).count(),
            chunk_size: config.chunk_size,
            cost: config.cost.to_string(),
        })
        .filter(|row| row.batches > 0)
        .collect()
}

fn batch_rows(plan: &Plan) -> Vec<BatchRow> {
    plan.batches
        .iter()
        .map(|b| BatchRow {
            batch_id: b.batch_id,
            category: b.category.clone(),
            size: b.size,
            minutes: format!("{:.0}", b.estimated_minutes),
            members: output::preview_files(&b.files, 2),
        })
        .collect()
}
