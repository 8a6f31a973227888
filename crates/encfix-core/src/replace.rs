//! 事务式文件替换
//!
//! 先把完整内容写入同目录的 `<file>.converted` 并落盘，再原子重命名覆盖原文件。
//! 任一步骤失败时，守卫在析构时删除临时文件，不遗留 `.converted` 或 `.bak`。

use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::FixError;

/// 临时文件后缀
const CONVERTED_SUFFIX: &str = ".converted";

/// 未提交时删除临时路径
struct TempGuard {
    path: PathBuf,
    committed: bool,
}

impl Drop for TempGuard {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

fn converted_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(CONVERTED_SUFFIX);
    PathBuf::from(name)
}

/// 用 `content` 替换 `path` 的内容
pub fn replace_file(path: &Path, content: &[u8]) -> Result<(), FixError> {
    let tmp = converted_path(path);
    let mut guard = TempGuard { path: tmp.clone(), committed: false };

    let mut file = File::create(&tmp).map_err(|e| FixError::io(&tmp, e))?;
    file.write_all(content).map_err(|e| FixError::io(&tmp, e))?;
    file.sync_all().map_err(|e| FixError::io(&tmp, e))?;
    drop(file);

    std::fs::rename(&tmp, path).map_err(|e| FixError::io(path, e))?;
    guard.committed = true;
    Ok(())
}
