//! # 批量执行器
//!
//! 并行执行逐文件的独立处理任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果保持输入顺序
//! - 进度条显示
//!
//! ## 依赖关系
//! - 被 `commands/validate.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{EvkitError, Result};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 表示使用全部 CPU）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行作业数
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理文件列表，返回与输入顺序一致的结果
    pub fn run<T, F>(&self, files: &[PathBuf], message: &str, processor: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&PathBuf) -> T + Sync + Send,
    {
        let pb = progress::create_progress_bar(files.len() as u64, message);

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| EvkitError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<T> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let result = processor(file);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_keep_input_order() {
        let files: Vec<PathBuf> = (0..50).map(|i| PathBuf::from(format!("{}.md", i))).collect();
        let runner = BatchRunner::new(4);
        assert_eq!(runner.jobs(), 4);

        let names = runner
            .run(&files, "Testing", |p| p.display().to_string())
            .unwrap();
        let expected: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_auto_jobs() {
        assert!(BatchRunner::new(0).jobs() >= 1);
    }
}
