//! Click statistics derived from the link collection

pub mod aggregator;

pub use aggregator::{
    AggregationRow, GroupField, GroupOrder, PLACEHOLDER, Stats, bar_scale, campaign_breakdown,
    channel_comparison, group_sum, group_sum_ordered, summarize,
};
