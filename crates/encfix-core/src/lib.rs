//! 编码修复核心库
//!
//! 设计要点：
//! - 为两种候选编码（UTF-8 与旧式单字节代码页，默认 windows-1250）生成重音字母的字节指纹。
//! - 去除两组指纹之间互相包含的片段，得到互不重叠的指纹集合，用于无歧义地区分编码。
//! - 对无 BOM 的文本文件做字节级扫描，判定源编码后转写为 UTF-8。
//! - 严格串行：逐个文件读取、判定、改写；指纹集合构建一次后只读共享。

mod options;
mod config;
mod error;
mod fingerprint;
mod disambiguate;
mod matcher;
mod bom;
mod classify;
mod transcode;
mod replace;
mod walk;
mod types;
mod fix;

pub use options::{FixOptions, FixStats, ScanEngine};
pub use config::{load_config, FixConfig, DEFAULT_ACCENT_CHARS, DEFAULT_EXTENSIONS, DEFAULT_LEGACY_ENCODING};
pub use error::FixError;
pub use fingerprint::{build_snippets, repertoire};
pub use disambiguate::{disambiguate, find_subslice};
pub use matcher::{has_any_pattern, PatternSet};
pub use bom::{read_bom, sniff_bom, Bom};
pub use classify::{Charset, Classifier};
pub use transcode::{transcode, UTF8_BOM};
pub use replace::replace_file;
pub use walk::collect_candidates;
pub use types::{FileOutcome, ReportItem};
pub use fix::{fix_file, fix_tree};
