//! CSV 导出
//!
//! 表头使用 `utm_` 前缀，对应 Link 中不带前缀的字段。字段按原样写出，
//! 不加引号也不转义其中的逗号。

use std::fs;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;

use crate::errors::{Result, UtmError};
use crate::storage::Link;

/// 导出表头
pub const CSV_HEADER: [&str; 8] = [
    "baseUrl",
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_content",
    "utm_term",
    "finalUrl",
    "clicks",
];

/// 默认导出文件名
pub const DEFAULT_EXPORT_FILENAME: &str = "utm-links.csv";

/// CSV 行数据结构（仅用于序列化）
#[derive(Debug, Clone, Serialize)]
pub struct CsvLinkRow<'a> {
    pub base_url: &'a str,
    pub source: &'a str,
    pub medium: &'a str,
    pub campaign: &'a str,
    pub content: &'a str,
    pub term: &'a str,
    pub final_url: &'a str,
    pub clicks: u64,
}

impl<'a> From<&'a Link> for CsvLinkRow<'a> {
    fn from(link: &'a Link) -> Self {
        Self {
            base_url: &link.base_url,
            source: &link.params.source,
            medium: &link.params.medium,
            campaign: &link.params.campaign,
            content: link.params.content.as_deref().unwrap_or(""),
            term: link.params.term.as_deref().unwrap_or(""),
            final_url: &link.final_url,
            clicks: link.clicks,
        }
    }
}

/// 生成 CSV 文本；集合为空时只有表头
pub fn render_csv(links: &[Link]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for link in links {
        writer.serialize(CsvLinkRow::from(link))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| UtmError::export(format!("Failed to flush CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| UtmError::export(format!("CSV is not valid UTF-8: {}", e)))
}

/// 导出链接到 CSV 文件
pub fn export_to_csv<P: AsRef<Path>>(links: &[Link], path: P) -> Result<()> {
    let content = render_csv(links)?;
    fs::write(path.as_ref(), content).map_err(|e| {
        UtmError::file_operation(format!(
            "Failed to write {}: {}",
            path.as_ref().display(),
            e
        ))
    })
}
