//! 配置文件加载（TOML）
use serde::Deserialize;
use std::path::Path;

use crate::error::FixError;

/// 默认重音字母表（仅小写，大写形式由 `repertoire` 追加）
pub const DEFAULT_ACCENT_CHARS: &str = "áéíóúůýěžščřďťň";
/// 默认候选扩展名（不含点，大小写不敏感）
pub const DEFAULT_EXTENSIONS: &[&str] = &["cs", "txt", "cshtml", "xaml", "xml", "html", "srt"];
/// 默认旧式编码标签
pub const DEFAULT_LEGACY_ENCODING: &str = "windows-1250";

/// 顶层配置结构；缺省字段回落到内置默认值
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FixConfig {
    /// 候选扩展名，允许带或不带前导点
    pub extensions: Vec<String>,
    /// 重音字母表（小写）
    pub accent_chars: String,
    /// 旧式单字节编码的 WHATWG 标签
    pub legacy_encoding: String,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            accent_chars: DEFAULT_ACCENT_CHARS.to_string(),
            legacy_encoding: DEFAULT_LEGACY_ENCODING.to_string(),
        }
    }
}

impl FixConfig {
    /// 判断路径扩展名是否属于候选集合
    pub fn accepts(&self, path: &Path) -> bool {
        let ext = match path.extension().and_then(|s| s.to_str()) { Some(e) => e, None => return false };
        self.extensions
            .iter()
            .any(|want| want.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

/// 从 TOML 文件加载配置
pub fn load_config(path: &Path) -> Result<FixConfig, FixError> {
    let txt = std::fs::read_to_string(path).map_err(|e| FixError::io(path, e))?;
    toml::from_str(&txt).map_err(|e| FixError::Config { path: path.to_path_buf(), source: Box::new(e) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_accepts_listed_extensions_case_insensitively() {
        let cfg = FixConfig::default();
        assert!(cfg.accepts(&PathBuf::from("a/b/Program.CS")));
        assert!(cfg.accepts(&PathBuf::from("movie.srt")));
        assert!(cfg.accepts(&PathBuf::from("page.Html")));
        assert!(!cfg.accepts(&PathBuf::from("page.htm")));
        assert!(!cfg.accepts(&PathBuf::from("README")));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encfix.toml");
        std::fs::write(&path, "extensions = [\".md\", \"rst\"]\n").unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.extensions, vec![".md".to_string(), "rst".to_string()]);
        assert_eq!(cfg.accent_chars, DEFAULT_ACCENT_CHARS);
        assert_eq!(cfg.legacy_encoding, DEFAULT_LEGACY_ENCODING);
        assert!(cfg.accepts(&PathBuf::from("notes.MD")));
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "extensions = 3").unwrap();

        assert!(matches!(load_config(&path), Err(FixError::Config { .. })));
    }
}
