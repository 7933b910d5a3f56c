//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `planner/`, `quality/`, `transcript/`, `utils/`
//! - 子模块: optimize, parallel, validate, subs

pub mod optimize;
pub mod parallel;
pub mod subs;
pub mod validate;

use crate::batch::{file_names, FileCollector};
use crate::cli::Commands;
use crate::error::Result;
use crate::models::ProfileConfig;
use crate::planner::Profile;
use crate::utils::output;

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Optimize(args) => optimize::execute(args),
        Commands::Parallel(args) => parallel::execute(args),
        Commands::Validate(args) => validate::execute(args),
        Commands::Subs(args) => subs::execute(args),
    }
}

/// 加载配置文件或使用内置配置
fn load_profile(path: Option<&Path>, builtin: fn() -> ProfileConfig) -> Result<Profile> {
    let config = match path {
        Some(p) => {
            output::print_info(&format!("Loading profile '{}'", p.display()));
            ProfileConfig::load(p)?
        }
        None => builtin(),
    };
    Profile::from_config(&config)
}

/// 扫描输入目录中匹配配置扩展名的文件
fn discover(directory: &Path, profile: &Profile) -> Result<Vec<String>> {
    let files = FileCollector::new(directory.to_path_buf())
        .with_pattern(&profile.file_pattern())?
        .collect_non_empty()?;

    output::print_info(&format!(
        "Found {} '{}' files in '{}'",
        files.len(),
        profile.file_pattern(),
        directory.display()
    ));

    Ok(file_names(&files))
}
