//! 指纹构建：字符表 × 编码 → 字节片段列表
use encoding_rs::Encoding;

use crate::error::FixError;

/// 由小写重音字母生成完整字符表：原字母在前，大写形式在后
pub fn repertoire(accent_chars: &str) -> String {
    let mut out = String::with_capacity(accent_chars.len() * 2);
    out.push_str(accent_chars);
    out.push_str(&accent_chars.to_uppercase());
    out
}

/// 将字符表中每个字符单独编码，按顺序输出字节片段（不去重）
pub fn build_snippets(repertoire: &str, encoding: &'static Encoding) -> Result<Vec<Vec<u8>>, FixError> {
    let mut out = Vec::with_capacity(repertoire.chars().count());
    let mut buf = [0u8; 4];
    for ch in repertoire.chars() {
        // encoding_rs 遇到不可表示字符会输出数字实体并置 had_errors
        let (bytes, _, had_errors) = encoding.encode(ch.encode_utf8(&mut buf));
        if had_errors || bytes.is_empty() {
            return Err(FixError::Unrepresentable { ch, encoding: encoding.name() });
        }
        out.push(bytes.into_owned());
    }
    Ok(out)
}
