//! 指纹扫描（朴素逐偏移比较 + Aho-Corasick 自动机）
//!
//! 两种引擎只回答“是否存在任一片段”，判定结果完全一致：
//! - 朴素引擎：对每个起始偏移、每个片段逐字节比较，首个命中即返回。
//! - AC 引擎：由片段构建一次自动机，之后对每个文件线性扫描。

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

use crate::options::ScanEngine;

/// 朴素扫描：任一片段在 `data` 的某个连续偏移处出现即返回 true
///
/// 片段若从偏移 `i` 起会越过 `data` 末尾则跳过；恰好结束于最后一个字节的片段仍会命中。
pub fn has_any_pattern(data: &[u8], patterns: &[Vec<u8>]) -> bool {
    for i in 0..data.len() {
        for pat in patterns {
            if pat.is_empty() || i + pat.len() > data.len() { continue; }
            if data[i..i + pat.len()] == pat[..] {
                return true;
            }
        }
    }
    false
}

/// 一组指纹片段及其扫描引擎（构建后只读，可跨线程共享）
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Vec<u8>>,
    ac: Option<AhoCorasick>,
}

impl PatternSet {
    /// 按引擎类型构建；空片段被忽略，空集合永不命中
    pub fn new(patterns: Vec<Vec<u8>>, engine: ScanEngine) -> Self {
        let patterns: Vec<Vec<u8>> = patterns.into_iter().filter(|p| !p.is_empty()).collect();
        let ac = match engine {
            ScanEngine::Naive => None,
            ScanEngine::AhoCorasick if patterns.is_empty() => None,
            ScanEngine::AhoCorasick => AhoCorasickBuilder::new()
                .match_kind(MatchKind::LeftmostFirst)
                .build(&patterns)
                .map_err(|e| tracing::warn!(error = %e, "aho-corasick build failed, using naive scan"))
                .ok(),
        };
        Self { patterns, ac }
    }

    /// 是否存在任一片段
    pub fn matches(&self, data: &[u8]) -> bool {
        match &self.ac {
            Some(ac) => ac.is_match(data),
            None => has_any_pattern(data, &self.patterns),
        }
    }

    pub fn patterns(&self) -> &[Vec<u8>] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pats() -> Vec<Vec<u8>> {
        vec![vec![0xC3, 0xA1], vec![0xC5, 0xBE]]
    }

    fn both(data: &[u8], patterns: Vec<Vec<u8>>) -> (bool, bool) {
        let naive = PatternSet::new(patterns.clone(), ScanEngine::Naive).matches(data);
        let ac = PatternSet::new(patterns, ScanEngine::AhoCorasick).matches(data);
        (naive, ac)
    }

    #[test]
    fn match_at_offset_zero() {
        let data = [0xC3, 0xA1, b'x', b'y'];
        assert!(has_any_pattern(&data, &pats()));
        assert_eq!(both(&data, pats()), (true, true));
    }

    #[test]
    fn match_at_last_valid_offset() {
        let data = [b'a', b'b', b'c', 0xC5, 0xBE];
        assert!(has_any_pattern(&data, &pats()));
        assert_eq!(both(&data, pats()), (true, true));
    }

    #[test]
    fn pattern_equal_to_whole_data() {
        let data = [0xC3, 0xA1];
        assert_eq!(both(&data, pats()), (true, true));
    }

    #[test]
    fn absent_pattern() {
        let data = b"plain ascii text";
        assert!(!has_any_pattern(data, &pats()));
        assert_eq!(both(data, pats()), (false, false));
    }

    #[test]
    fn truncated_pattern_at_end_does_not_match() {
        let data = [b'a', 0xC3];
        assert_eq!(both(&data, pats()), (false, false));
    }

    #[test]
    fn empty_inputs_never_match() {
        assert_eq!(both(b"", pats()), (false, false));
        assert_eq!(both(b"anything", Vec::new()), (false, false));
        assert_eq!(both(b"anything", vec![Vec::new()]), (false, false));
        assert!(PatternSet::new(vec![Vec::new()], ScanEngine::Naive).is_empty());
    }

    #[test]
    fn engines_agree_on_every_single_byte_window() {
        let patterns = vec![vec![0x9E], vec![0xE1], vec![0xC3, 0xA1]];
        for b0 in [0x00u8, 0x9E, 0xC3, 0xE1, 0xFF] {
            for b1 in [0x00u8, 0xA1, 0x9E, 0x41] {
                let data = [b0, b1];
                let (naive, ac) = both(&data, patterns.clone());
                assert_eq!(naive, ac, "{data:02X?}");
                assert_eq!(naive, has_any_pattern(&data, &patterns));
            }
        }
    }
}
