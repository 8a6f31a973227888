//! 目录遍历与候选文件筛选
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::FixConfig;
use crate::error::FixError;

/// 递归收集扩展名匹配的普通文件（跟随符号链接）；按文件名排序，遍历错误直接返回
pub fn collect_candidates(root: &Path, config: &FixConfig) -> Result<Vec<PathBuf>, FixError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && config.accepts(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
