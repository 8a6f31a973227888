//! 编码判定器：构建一次指纹集合，之后对每个文件只读复用
use encoding_rs::{Encoding, UTF_8};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::FixConfig;
use crate::disambiguate::disambiguate;
use crate::error::FixError;
use crate::fingerprint::{build_snippets, repertoire};
use crate::matcher::PatternSet;
use crate::options::ScanEngine;

/// 单个无 BOM 文件的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Charset {
    /// 仅命中 UTF-8 指纹：按 UTF-8 原样转写
    Utf8,
    /// 仅命中旧式指纹或都未命中：按旧式代码页解码后转写
    Legacy,
    /// 两组指纹均命中：不改写，仅报告
    Ambiguous,
}

/// 判定器（构建后不可变，可跨线程共享）
#[derive(Debug, Clone)]
pub struct Classifier {
    legacy: &'static Encoding,
    utf8_set: PatternSet,
    legacy_set: PatternSet,
}

impl Classifier {
    /// 解析旧式编码、生成并消歧两组指纹、编译扫描引擎
    ///
    /// 旧式编码标签无法识别或字符不可表示时返回错误，此时尚未触碰任何文件。
    pub fn new(config: &FixConfig, engine: ScanEngine) -> Result<Self, FixError> {
        let legacy = Encoding::for_label(config.legacy_encoding.trim().as_bytes())
            .ok_or_else(|| FixError::EncodingUnavailable(config.legacy_encoding.clone()))?;
        // encoding_rs 对 UTF-16/replacement 只输出 UTF-8，指纹会失去意义
        if !legacy.is_single_byte() {
            return Err(FixError::NotSingleByte(legacy.name()));
        }

        let rep = repertoire(&config.accent_chars);
        let utf8_snippets = build_snippets(&rep, UTF_8)?;
        let legacy_snippets = build_snippets(&rep, legacy)?;
        let (utf8_snippets, legacy_snippets) = disambiguate(utf8_snippets, legacy_snippets);

        debug!(
            legacy = legacy.name(),
            utf8_snippets = utf8_snippets.len(),
            legacy_snippets = legacy_snippets.len(),
            ?engine,
            "fingerprints ready"
        );
        let utf8_set = PatternSet::new(utf8_snippets, engine);
        let legacy_set = PatternSet::new(legacy_snippets, engine);
        if utf8_set.is_empty() {
            warn!("no unambiguous UTF-8 fingerprints left; UTF-8 files cannot be detected");
        }
        if legacy_set.is_empty() {
            warn!(legacy = legacy.name(), "no unambiguous legacy fingerprints left");
        }

        Ok(Self { legacy, utf8_set, legacy_set })
    }

    /// 依据两组指纹的命中情况判定字符集
    pub fn classify(&self, data: &[u8]) -> Charset {
        let has_utf8 = self.utf8_set.matches(data);
        let has_legacy = self.legacy_set.matches(data);
        match (has_utf8, has_legacy) {
            (true, true) => Charset::Ambiguous,
            (true, false) => Charset::Utf8,
            _ => Charset::Legacy,
        }
    }

    /// 判定结果对应的源编码；歧义时为 None
    pub fn source_encoding(&self, charset: Charset) -> Option<&'static Encoding> {
        match charset {
            Charset::Utf8 => Some(UTF_8),
            Charset::Legacy => Some(self.legacy),
            Charset::Ambiguous => None,
        }
    }

    pub fn legacy_encoding(&self) -> &'static Encoding {
        self.legacy
    }

    pub fn utf8_fingerprints(&self) -> &[Vec<u8>] {
        self.utf8_set.patterns()
    }

    pub fn legacy_fingerprints(&self) -> &[Vec<u8>] {
        self.legacy_set.patterns()
    }
}
