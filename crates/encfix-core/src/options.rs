//! 运行选项与统计信息（模块）
use std::path::PathBuf;

/// 指纹扫描引擎类型
/// - Naive：逐偏移逐模式比较，作为语义基准。
/// - AhoCorasick：多模式自动机，一次线性扫描，判定结果与 Naive 完全一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanEngine {
    Naive,
    #[default]
    AhoCorasick,
}

/// 运行选项
#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    /// 扫描引擎；默认 AhoCorasick
    pub engine: ScanEngine,
    /// 仅判定并报告，不改写任何文件
    pub dry_run: bool,
    /// 改写后的文件是否带 UTF-8 BOM（EF BB BF）
    pub write_bom: bool,
    /// 配置文件路径（TOML）；为空则使用内置默认值
    pub config_path: Option<PathBuf>,
}

/// 运行统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixStats {
    /// 扩展名匹配的候选文件数
    pub files_visited: usize,
    /// 已带 BOM 而跳过的文件数
    pub skipped_bom: usize,
    /// 按旧式代码页解码后转写的文件数
    pub converted_legacy: usize,
    /// 判定为 UTF-8 且内容有变化（如补 BOM、替换非法字节）而改写的文件数
    pub rewritten_utf8: usize,
    /// dry-run 下本应改写、实际未写入的文件数
    pub would_convert: usize,
    /// 转写结果与原字节一致、无需改写的文件数
    pub unchanged: usize,
    /// 无法判定编码的文件数
    pub ambiguous: usize,
}
