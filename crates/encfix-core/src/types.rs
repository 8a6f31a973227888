//! 公共类型（对外暴露）
use serde::Serialize;

use crate::bom::Bom;
use crate::classify::Charset;

/// 单个候选文件的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum FileOutcome {
    /// 已带 BOM，跳过
    Bom { bom: Bom },
    /// 两组指纹均命中，未改写
    Ambiguous,
    /// 已按判定编码转写
    Converted { charset: Charset },
    /// 转写结果与原字节一致，未改写
    Unchanged { charset: Charset },
    /// dry-run：本应转写
    WouldConvert { charset: Charset },
}

/// 报告项结构（对应 report JSON 数组的单个元素）
#[derive(Debug, Clone, Serialize)]
pub struct ReportItem<'a> {
    pub path: &'a str,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}
