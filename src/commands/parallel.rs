//! # parallel 命令实现
//!
//! 将证据文件按类别分配到模拟工作通道，估算并行与顺序耗时。
//! 并行耗时是各通道耗时的最大值，仅为模拟上界。
//!
//! ## 依赖关系
//! - 使用 `cli/parallel.rs` 定义的参数
//! - 使用 `planner/`
//! - 使用 `utils/output.rs`

use super::{discover, load_profile};
use crate::cli::parallel::ParallelArgs;
use crate::error::{EvkitError, Result};
use crate::models::{Plan, ProfileConfig};
use crate::planner::export::{self, ParallelPlanDocument};
use crate::utils::output;

use colored::Colorize;
use tabled::{Table, Tabled};

/// 通道分布行
#[derive(Debug, Clone, Tabled)]
struct WorkerRow {
    #[tabled(rename = "Worker")]
    worker: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Files")]
    files: usize,
    #[tabled(rename = "Batches")]
    batches: usize,
    #[tabled(rename = "Minutes")]
    minutes: String,
}

/// 执行 parallel 命令
pub fn execute(args: ParallelArgs) -> Result<()> {
    output::print_header("Parallel Verification Pipeline Report");

    if args.workers == 0 {
        return Err(EvkitError::InvalidArgument(
            "worker count must be at least 1".to_string(),
        ));
    }

    let mut profile = load_profile(args.profile.as_deref(), ProfileConfig::parallel)?;
    if let Some(size) = args.batch_size {
        profile.override_chunk_size(size)?;
    }

    let filenames = discover(&args.directory, &profile)?;
    let plan = profile.plan(&filenames)?;

    // 每个类别对应一个通道；通道数超过可用工作者时上界不再成立
    if plan.summary.workers_used > args.workers {
        output::print_warning(&format!(
            "{} non-empty lanes but only {} workers; the parallel bound assumes one worker per lane",
            plan.summary.workers_used, args.workers
        ));
    }

    print_report(&plan);

    if args.export {
        let doc = ParallelPlanDocument::new(&profile.name, &plan);
        export::write_json(&doc, &args.output)?;
        output::print_success(&format!(
            "Parallel plan exported to '{}'",
            args.output.display()
        ));
    }

    Ok(())
}

fn print_report(plan: &Plan) {
    output::print_header("Worker Distribution");
    println!("{}", Table::new(worker_rows(plan)));
    output::print_info(&format!("Total: {} files", plan.summary.total_files));

    let summary = &plan.summary;
    output::print_header("Performance Analysis");
    println!(
        "Sequential approach:    {:>6.1} minutes",
        summary.sequential_time
    );
    println!(
        "Parallel approach:      {:>6.1} minutes",
        summary.parallel_time
    );
    println!(
        "Time savings:           {:>6.1} minutes ({:+.1}%)",
        summary.time_savings, summary.efficiency_gain
    );

    output::print_header("Detailed Processing Plan");
    for lane in &plan.lanes {
        println!(
            "\n{} ({}):",
            lane.worker_id.to_uppercase().bold(),
            output::capitalize(&lane.category)
        );
        if lane.batches.is_empty() {
            println!("  {}", "no files".dimmed());
        }
        for batch in &lane.batches {
            println!(
                "  Batch {}: {} files - {}",
                batch.batch_id,
                batch.size,
                output::preview_files(&batch.files, 2)
            );
        }
    }
}

fn worker_rows(plan: &Plan) -> Vec<WorkerRow> {
    plan.lanes
        .iter()
        .map(|lane| WorkerRow {
            worker: lane.worker_id.clone(),
            category: lane.category.clone(),
            files: lane.file_count,
            batches: lane.batches.len(),
            minutes: format!("{:.1}", lane.estimated_minutes),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn args(directory: PathBuf, output: PathBuf) -> ParallelArgs {
        ParallelArgs {
            directory,
            workers: 4,
            batch_size: None,
            profile: None,
            export: true,
            output,
        }
    }

    fn populate(dir: &std::path::Path) {
        let names = [
            "RSSocket.md",
            "OnDemandFetcher.md",
            "RSInterface.md",
            "client.md",
            "WorldController.md",
            "clientStream.md",
            "Stream.md",
            "Node.md",
            "TextInput.md",
        ];
        for name in names {
            fs::write(dir.join(name), "").unwrap();
        }
    }

    #[test]
    fn test_execute_per_file_scenario() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());
        let out = dir.path().join("parallel_plan.json");

        execute(args(dir.path().to_path_buf(), out.clone())).unwrap();

        let plan: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(plan["total_workers"], 4);
        assert_eq!(plan["total_files"], 9);
        // network: 6 × 4.0, utilities: 3 × 1.5
        assert_eq!(plan["estimated_parallel_time"], 24.0);
        assert_eq!(plan["estimated_sequential_time"], 28.5);
        assert_eq!(plan["workers"]["worker_1"]["file_count"], 6);
        assert_eq!(plan["workers"]["worker_4"]["file_count"], 3);
        assert_eq!(plan["workers"]["worker_1"]["batches"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_batch_size_override() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());
        let out = dir.path().join("plan.json");
        let mut a = args(dir.path().to_path_buf(), out.clone());
        a.batch_size = Some(6);

        execute(a).unwrap();

        let plan: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(plan["workers"]["worker_1"]["batches"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_zero_workers_and_batch_size() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());

        let mut a = args(dir.path().to_path_buf(), dir.path().join("p.json"));
        a.workers = 0;
        assert!(matches!(execute(a).unwrap_err(), EvkitError::InvalidArgument(_)));

        let mut a = args(dir.path().to_path_buf(), dir.path().join("p.json"));
        a.batch_size = Some(0);
        assert!(matches!(execute(a).unwrap_err(), EvkitError::InvalidArgument(_)));
    }

    #[test]
    fn test_worker_rows() {
        let profile = crate::planner::Profile::from_config(&ProfileConfig::parallel()).unwrap();
        let plan = profile.plan(&["Model.md", "Item.md"]).unwrap();
        let rows = worker_rows(&plan);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].category, "objects");
        assert_eq!(rows[1].files, 2);
        assert_eq!(rows[1].minutes, "5.0");
        assert_eq!(rows[0].minutes, "0.0");
    }
}
