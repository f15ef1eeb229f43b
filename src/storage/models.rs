use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utm::UtmParams;

/// 一条已保存的 UTM 链接
///
/// `final_url` 在创建时由 `base_url` 和 `params` 拼接得出，之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default)]
    pub id: String,
    /// 缺失时为 Unix 纪元
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub base_url: String,
    #[serde(flatten)]
    pub params: UtmParams,
    #[serde(default)]
    pub final_url: String,
    #[serde(default)]
    pub clicks: u64,
}

impl Link {
    pub fn campaign(&self) -> &str {
        &self.params.campaign
    }

    pub fn medium(&self) -> &str {
        &self.params.medium
    }
}

/// 命名的参数模板（不含 base URL）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub values: UtmParams,
}

impl Template {
    /// 模板名比较忽略大小写
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_json_shape() {
        let link = Link {
            id: "l1".into(),
            created_at: DateTime::parse_from_rfc3339("2025-03-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            base_url: "https://x.com".into(),
            params: UtmParams::new("a", "b", "c"),
            final_url: "https://x.com?utm_source=a&utm_medium=b&utm_campaign=c".into(),
            clicks: 12,
        };

        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value["baseUrl"], "https://x.com");
        assert_eq!(value["source"], "a");
        assert_eq!(value["campaign"], "c");
        assert_eq!(value["finalUrl"], link.final_url);
        assert_eq!(value["clicks"], 12);
        assert!(value.get("content").is_none());
    }

    #[test]
    fn test_link_missing_fields_default() {
        let json = r#"{"id":"x","createdAt":"2025-03-01T10:00:00.000Z","baseUrl":"https://x.com"}"#;
        let link: Link = serde_json::from_str(json).unwrap();
        assert_eq!(link.clicks, 0);
        assert_eq!(link.campaign(), "");
        assert_eq!(link.params.content, None);
    }

    #[test]
    fn test_link_without_id_or_timestamp_loads() {
        let json = r#"{"baseUrl":"https://y.com","campaign":"b","clicks":4}"#;
        let link: Link = serde_json::from_str(json).unwrap();
        assert_eq!(link.id, "");
        assert_eq!(link.created_at, DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(link.clicks, 4);
    }

    #[test]
    fn test_template_ignores_unknown_value_keys() {
        let json = r#"{"id":"t","name":"Promo","values":{"baseUrl":"https://x.com","source":"fb","medium":"cpc","campaign":"","content":"","term":""}}"#;
        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(template.values.source, "fb");
        assert_eq!(template.values.content.as_deref(), Some(""));
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let template = Template {
            id: "t".into(),
            name: "Promo".into(),
            values: UtmParams::default(),
        };
        assert!(template.matches_name("promo"));
        assert!(template.matches_name("PROMO"));
        assert!(!template.matches_name("promo2"));
    }
}
