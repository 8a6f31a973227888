//! 修复主流程（严格串行）
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::bom::read_bom;
use crate::classify::{Charset, Classifier};
use crate::config::{load_config, FixConfig};
use crate::error::FixError;
use crate::options::{FixOptions, FixStats};
use crate::replace::replace_file;
use crate::transcode::transcode;
use crate::types::{FileOutcome, ReportItem};
use crate::walk::collect_candidates;

/// 处理单个候选文件：BOM 检查 → 判定 → 转写 → 替换
///
/// 歧义文件不改写；转写结果与原字节一致时同样不改写。
pub fn fix_file(path: &Path, classifier: &Classifier, opts: &FixOptions) -> Result<FileOutcome, FixError> {
    let bom = read_bom(path)?;
    if !bom.is_none() {
        debug!(path = %path.display(), ?bom, "has byte-order-mark, skipped");
        return Ok(FileOutcome::Bom { bom });
    }

    let data = std::fs::read(path).map_err(|e| FixError::io(path, e))?;
    let charset = classifier.classify(&data);
    let source = match classifier.source_encoding(charset) {
        Some(enc) => enc,
        None => {
            debug!(path = %path.display(), "both fingerprint sets matched");
            return Ok(FileOutcome::Ambiguous);
        }
    };

    let converted = transcode(&data, source, opts.write_bom);
    if converted == data {
        debug!(path = %path.display(), ?charset, "already in target form");
        return Ok(FileOutcome::Unchanged { charset });
    }
    if opts.dry_run {
        info!(path = %path.display(), ?charset, "would convert");
        return Ok(FileOutcome::WouldConvert { charset });
    }

    replace_file(path, &converted)?;
    info!(path = %path.display(), from = source.name(), "converted to UTF-8");
    Ok(FileOutcome::Converted { charset })
}

/// 遍历 `root` 下所有候选文件并逐个修复
///
/// - 歧义文件以 `<path> - cannot detect charset` 单行写入 `out`
/// - 若提供 `report`，则以 JSON 数组流式写入每个候选文件的处理结果
/// - 除歧义外的任何错误立即返回，已处理的文件保持处理后的状态
pub fn fix_tree(
    root: &Path,
    out: &mut dyn Write,
    mut report: Option<&mut dyn Write>,
    opts: &FixOptions,
) -> Result<FixStats, FixError> {
    // 加载配置（未指定则使用内置默认值）
    let config = match &opts.config_path {
        Some(p) => load_config(p)?,
        None => FixConfig::default(),
    };
    // 任何文件被触碰之前构建指纹；旧式编码不可用在此处失败
    let classifier = Classifier::new(&config, opts.engine)?;
    debug!(legacy = classifier.legacy_encoding().name(), root = %root.display(), "classifier ready");

    let files = collect_candidates(root, &config)?;
    let mut stats = FixStats::default();

    if let Some(w) = report.as_deref_mut() { write!(w, "[").map_err(FixError::Output)?; }
    let mut first = true;

    for path in files {
        stats.files_visited += 1;
        let outcome = fix_file(&path, &classifier, opts)?;
        match outcome {
            FileOutcome::Bom { .. } => stats.skipped_bom += 1,
            FileOutcome::Ambiguous => {
                stats.ambiguous += 1;
                writeln!(out, "{} - cannot detect charset", path.display()).map_err(FixError::Output)?;
            }
            FileOutcome::Converted { charset: Charset::Legacy } => stats.converted_legacy += 1,
            FileOutcome::Converted { .. } => stats.rewritten_utf8 += 1,
            FileOutcome::WouldConvert { .. } => stats.would_convert += 1,
            FileOutcome::Unchanged { .. } => stats.unchanged += 1,
        }

        if let Some(w) = report.as_deref_mut() {
            if !first { write!(w, ",").map_err(FixError::Output)?; } else { first = false; }
            let shown = path.to_string_lossy();
            serde_json::to_writer(&mut *w, &ReportItem { path: &shown, outcome })?;
        }
    }

    if let Some(w) = report.as_deref_mut() { write!(w, "]").map_err(FixError::Output)?; }
    Ok(stats)
}
