//! 指纹消歧：去除两组指纹之间互相包含的片段

/// 返回 `needle` 在 `haystack` 中首次出现的偏移；空 `needle` 视为在 0 处命中
pub fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() { return Some(0); }
    if needle.len() > haystack.len() { return None; }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// 对两组片段做双向包含检测，返回互不重叠的两组片段
///
/// 任意一对 (a, b) 中若 b 是 a 的连续子串或 a 是 b 的连续子串，则 a、b 同时移除。
/// 先用只读的双重遍历计算移除标记，再单独一遍按标记过滤；幸存片段保持原有顺序。
pub fn disambiguate(a: Vec<Vec<u8>>, b: Vec<Vec<u8>>) -> (Vec<Vec<u8>>, Vec<Vec<u8>>) {
    let mut drop_a = vec![false; a.len()];
    let mut drop_b = vec![false; b.len()];

    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            if find_subslice(x, y).is_some() || find_subslice(y, x).is_some() {
                drop_a[i] = true;
                drop_b[j] = true;
            }
        }
    }

    (retain_unmarked(a, &drop_a), retain_unmarked(b, &drop_b))
}

fn retain_unmarked(items: Vec<Vec<u8>>, marks: &[bool]) -> Vec<Vec<u8>> {
    items
        .into_iter()
        .zip(marks.iter())
        .filter_map(|(item, &marked)| if marked { None } else { Some(item) })
        .collect()
}
