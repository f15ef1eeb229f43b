//! 链接集合的统计与分组汇总
//!
//! 所有函数都是只读的纯函数，每次调用都对完整集合重新计算。

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::storage::Link;

/// 空分组键 / 无数据时的占位符
pub const PLACEHOLDER: &str = "—";

/// 仪表盘汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_clicks: u64,
    pub top_campaign: String,
    pub unique_campaigns: usize,
}

/// 分组汇总的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationRow {
    pub key: String,
    pub total: u64,
}

impl AggregationRow {
    pub fn new(key: impl Into<String>, total: u64) -> Self {
        Self {
            key: key.into(),
            total,
        }
    }
}

/// 分组字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Campaign,
    Medium,
}

impl GroupField {
    fn value<'a>(&self, link: &'a Link) -> &'a str {
        match self {
            GroupField::Campaign => link.campaign(),
            GroupField::Medium => link.medium(),
        }
    }

    /// 各视图依赖的默认排序：campaign 保持首次出现顺序，medium 按总数降序
    pub fn default_order(&self) -> GroupOrder {
        match self {
            GroupField::Campaign => GroupOrder::FirstSeen,
            GroupField::Medium => GroupOrder::TotalDescending,
        }
    }
}

/// 分组结果排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOrder {
    /// 按分组第一次出现的顺序
    FirstSeen,
    /// 按总数降序，总数相同时保持首次出现顺序
    TotalDescending,
}

/// 计算汇总统计
///
/// `top_campaign` 取点击数最高的链接的 campaign，并列时取集合中靠前的那条；
/// 集合为空或该 campaign 为空时为占位符。
pub fn summarize(links: &[Link]) -> Stats {
    // 点击数相加时饱和，不溢出
    let total_clicks = links
        .iter()
        .fold(0u64, |acc, l| acc.saturating_add(l.clicks));

    let mut top: Option<&Link> = None;
    for link in links {
        match top {
            Some(current) if link.clicks <= current.clicks => {}
            _ => top = Some(link),
        }
    }
    let top_campaign = top
        .map(|l| l.campaign())
        .filter(|c| !c.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string();

    let unique_campaigns = links
        .iter()
        .map(|l| l.campaign())
        .collect::<HashSet<_>>()
        .len();

    Stats {
        total_clicks,
        top_campaign,
        unique_campaigns,
    }
}

/// 按字段分组求和，使用该字段的默认排序
pub fn group_sum(links: &[Link], field: GroupField) -> Vec<AggregationRow> {
    group_sum_ordered(links, field, field.default_order())
}

/// 按字段分组求和，显式指定排序
pub fn group_sum_ordered(links: &[Link], field: GroupField, order: GroupOrder) -> Vec<AggregationRow> {
    let mut rows: Vec<AggregationRow> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for link in links {
        let key = match field.value(link) {
            "" => PLACEHOLDER,
            value => value,
        };
        match index.get(key) {
            Some(&i) => rows[i].total = rows[i].total.saturating_add(link.clicks),
            None => {
                index.insert(key, rows.len());
                rows.push(AggregationRow::new(key, link.clicks));
            }
        }
    }

    if order == GroupOrder::TotalDescending {
        // sort_by 是稳定排序，并列项保持首次出现顺序
        rows.sort_by(|a, b| b.total.cmp(&a.total));
    }

    rows
}

/// Analytics 视图：按 campaign 汇总，保持首次出现顺序
pub fn campaign_breakdown(links: &[Link]) -> Vec<AggregationRow> {
    group_sum_ordered(links, GroupField::Campaign, GroupOrder::FirstSeen)
}

/// Comparisons 视图：按 medium 汇总，总数降序
pub fn channel_comparison(links: &[Link]) -> Vec<AggregationRow> {
    group_sum_ordered(links, GroupField::Medium, GroupOrder::TotalDescending)
}

/// 柱状图比例的分母，至少为 1
pub fn bar_scale(rows: &[AggregationRow]) -> u64 {
    rows.iter().map(|r| r.total).max().unwrap_or(0).max(1)
}
