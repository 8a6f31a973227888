//! BOM 嗅探
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::error::FixError;

/// 文件开头识别出的字节序标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bom {
    Utf7,
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32,
    /// 无可识别的 BOM：唯一会进入转写流程的状态
    None,
}

/// 按固定顺序匹配的签名表
const SIGNATURES: &[(&[u8], Bom)] = &[
    (&[0x2B, 0x2F, 0x76], Bom::Utf7),
    (&[0xEF, 0xBB, 0xBF], Bom::Utf8),
    (&[0xFF, 0xFE], Bom::Utf16Le),
    (&[0xFE, 0xFF], Bom::Utf16Be),
    (&[0x00, 0x00, 0xFE, 0xFF], Bom::Utf32),
];

/// 依据前导字节判定 BOM；不足签名长度的输入视为不匹配该签名
pub fn sniff_bom(head: &[u8]) -> Bom {
    SIGNATURES
        .iter()
        .find(|(sig, _)| head.starts_with(sig))
        .map(|(_, bom)| *bom)
        .unwrap_or(Bom::None)
}

/// 读取文件至多前 4 个字节并判定 BOM
pub fn read_bom(path: &Path) -> Result<Bom, FixError> {
    let file = File::open(path).map_err(|e| FixError::io(path, e))?;
    let mut head = Vec::with_capacity(4);
    file.take(4).read_to_end(&mut head).map_err(|e| FixError::io(path, e))?;
    Ok(sniff_bom(&head))
}

impl Bom {
    pub fn is_none(self) -> bool {
        self == Bom::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_table() {
        assert_eq!(sniff_bom(&[0x2B, 0x2F, 0x76, 0x38]), Bom::Utf7);
        assert_eq!(sniff_bom(&[0xEF, 0xBB, 0xBF, b'a']), Bom::Utf8);
        assert_eq!(sniff_bom(&[0xFF, 0xFE, b'a', 0x00]), Bom::Utf16Le);
        assert_eq!(sniff_bom(&[0xFE, 0xFF, 0x00, b'a']), Bom::Utf16Be);
        assert_eq!(sniff_bom(&[0x00, 0x00, 0xFE, 0xFF]), Bom::Utf32);
    }

    #[test]
    fn utf32_le_bom_reads_as_utf16_le() {
        // 按表顺序 FF FE 先于更长的签名命中
        assert_eq!(sniff_bom(&[0xFF, 0xFE, 0x00, 0x00]), Bom::Utf16Le);
    }

    #[test]
    fn short_or_plain_input_has_no_bom() {
        assert_eq!(sniff_bom(&[]), Bom::None);
        assert_eq!(sniff_bom(&[0xEF, 0xBB]), Bom::None);
        assert_eq!(sniff_bom(&[0x00, 0x00]), Bom::None);
        assert_eq!(sniff_bom(b"hello"), Bom::None);
        assert_eq!(sniff_bom(&[0xE1, 0x9E]), Bom::None);
    }

    #[test]
    fn read_bom_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let marked = dir.path().join("marked.txt");
        let empty = dir.path().join("empty.txt");
        std::fs::write(&marked, [0xEF, 0xBB, 0xBF, 0xE1, 0xE9]).unwrap();
        std::fs::write(&empty, []).unwrap();

        assert_eq!(read_bom(&marked).unwrap(), Bom::Utf8);
        assert_eq!(read_bom(&empty).unwrap(), Bom::None);
        assert!(matches!(read_bom(&dir.path().join("missing.txt")), Err(FixError::Io { .. })));
    }
}
