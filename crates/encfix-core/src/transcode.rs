//! 转写：源编码字节 → UTF-8 字节
use encoding_rs::Encoding;

/// UTF-8 BOM
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// 以 `source` 解码（不做 BOM 嗅探），再编码为 UTF-8；非法序列替换为 U+FFFD
///
/// 源编码为 UTF-8 且输入合法时，除可选 BOM 外输出与输入逐字节一致。
pub fn transcode(data: &[u8], source: &'static Encoding, write_bom: bool) -> Vec<u8> {
    let (text, had_errors) = source.decode_without_bom_handling(data);
    if had_errors {
        tracing::debug!(encoding = source.name(), "malformed input replaced during decode");
    }
    let mut out = Vec::with_capacity(text.len() + UTF8_BOM.len());
    if write_bom { out.extend_from_slice(UTF8_BOM); }
    out.extend_from_slice(text.as_bytes());
    out
}
