//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::path::Path;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印质量门通过
pub fn print_pass(msg: &str) {
    println!("{} {}", "[PASS]".green().bold(), msg);
}

/// 打印质量门失败
pub fn print_fail(msg: &str) {
    println!("{} {}", "[FAIL]".red().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 文件列表预览：前 `shown` 个文件名（去扩展名），其余以 "(+N more)" 表示
pub fn preview_files(files: &[String], shown: usize) -> String {
    let mut preview = files
        .iter()
        .take(shown)
        .map(|f| {
            Path::new(f)
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| f.clone())
        })
        .collect::<Vec<_>>()
        .join(", ");

    if files.len() > shown {
        preview.push_str(&format!(" (+{} more)", files.len() - shown));
    }
    preview
}

/// 首字母大写
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_files() {
        let files: Vec<String> = ["RSSocket.md", "client.md", "Stream.md", "Node.md"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(preview_files(&files, 2), "RSSocket, client (+2 more)");
        assert_eq!(preview_files(&files[..2], 2), "RSSocket, client");
        assert_eq!(preview_files(&[], 2), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("network"), "Network");
        assert_eq!(capitalize(""), "");
    }
}
