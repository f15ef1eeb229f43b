//! UTM 参数定义

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// 五个标准 UTM 字段，声明顺序即拼接顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum UtmField {
    Source,
    Medium,
    Campaign,
    Content,
    Term,
}

impl UtmField {
    /// 查询串中的参数名，例如 `utm_source`
    pub fn query_key(&self) -> String {
        format!("utm_{}", self.as_ref())
    }
}

impl std::fmt::Display for UtmField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// 一组 UTM 参数值
///
/// `source`/`medium`/`campaign` are always present (possibly empty);
/// `content` and `term` are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmParams {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub campaign: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl UtmParams {
    pub fn new(
        source: impl Into<String>,
        medium: impl Into<String>,
        campaign: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            medium: medium.into(),
            campaign: campaign.into(),
            content: None,
            term: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn get(&self, field: UtmField) -> Option<&str> {
        match field {
            UtmField::Source => Some(self.source.as_str()),
            UtmField::Medium => Some(self.medium.as_str()),
            UtmField::Campaign => Some(self.campaign.as_str()),
            UtmField::Content => self.content.as_deref(),
            UtmField::Term => self.term.as_deref(),
        }
    }

    pub fn set(&mut self, field: UtmField, value: impl Into<String>) {
        let value = value.into();
        match field {
            UtmField::Source => self.source = value,
            UtmField::Medium => self.medium = value,
            UtmField::Campaign => self.campaign = value,
            UtmField::Content => self.content = Some(value),
            UtmField::Term => self.term = Some(value),
        }
    }

    /// 按固定顺序遍历已设置的字段
    pub fn iter(&self) -> impl Iterator<Item = (UtmField, &str)> {
        UtmField::iter().filter_map(|field| self.get(field).map(|value| (field, value)))
    }
}
