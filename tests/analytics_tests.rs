//! 统计与分组集成测试

use chrono::{TimeZone, Utc};
use utm_command::analytics::{
    AggregationRow, GroupField, GroupOrder, PLACEHOLDER, campaign_breakdown, channel_comparison,
    group_sum, group_sum_ordered, summarize,
};
use utm_command::storage::Link;
use utm_command::utm::UtmParams;

fn link(id: &str, campaign: &str, medium: &str, clicks: u64) -> Link {
    Link {
        id: id.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
        base_url: "https://x.com".to_string(),
        params: UtmParams::new("src", medium, campaign),
        final_url: String::new(),
        clicks,
    }
}

#[test]
fn test_summarize_empty() {
    let stats = summarize(&[]);
    assert_eq!(stats.total_clicks, 0);
    assert_eq!(stats.top_campaign, PLACEHOLDER);
    assert_eq!(stats.unique_campaigns, 0);
}

#[test]
fn test_summarize_totals() {
    let links = vec![
        link("1", "spring", "email", 10),
        link("2", "summer", "ads", 40),
        link("3", "spring", "ads", 7),
    ];
    let stats = summarize(&links);
    assert_eq!(stats.total_clicks, 57);
    assert_eq!(stats.top_campaign, "summer");
    assert_eq!(stats.unique_campaigns, 2);
}

#[test]
fn test_top_campaign_tie_goes_to_first() {
    let links = vec![link("1", "first", "email", 5), link("2", "second", "email", 5)];
    assert_eq!(summarize(&links).top_campaign, "first");
}

#[test]
fn test_empty_campaign_counts_as_distinct() {
    let links = vec![link("1", "", "email", 1), link("2", "spring", "email", 1)];
    assert_eq!(summarize(&links).unique_campaigns, 2);
}

#[test]
fn test_medium_totals_descending() {
    let links = vec![
        link("1", "c", "email", 5),
        link("2", "c", "email", 3),
        link("3", "c", "ads", 10),
    ];
    assert_eq!(
        group_sum(&links, GroupField::Medium),
        vec![AggregationRow::new("ads", 10), AggregationRow::new("email", 8)]
    );
    assert_eq!(channel_comparison(&links), group_sum(&links, GroupField::Medium));
}

#[test]
fn test_campaign_rows_keep_first_seen_order() {
    let links = vec![
        link("1", "small", "email", 1),
        link("2", "big", "email", 100),
        link("3", "small", "ads", 2),
    ];
    assert_eq!(
        campaign_breakdown(&links),
        vec![AggregationRow::new("small", 3), AggregationRow::new("big", 100)]
    );
}

#[test]
fn test_blank_group_key_uses_placeholder() {
    let links = vec![link("1", "c", "", 4), link("2", "c", "email", 1)];
    let rows = group_sum_ordered(&links, GroupField::Medium, GroupOrder::FirstSeen);
    assert_eq!(
        rows,
        vec![AggregationRow::new(PLACEHOLDER, 4), AggregationRow::new("email", 1)]
    );
}

#[test]
fn test_group_sum_empty() {
    assert!(group_sum(&[], GroupField::Campaign).is_empty());
    assert!(group_sum(&[], GroupField::Medium).is_empty());
}
