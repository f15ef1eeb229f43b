//! Workspace: the single owner of the link and template collections
//!
//! All reads go through the in-memory collections; every change produces a
//! new collection from the previous one, is written back to the store in
//! full, and only then replaces the in-memory state.

use std::sync::Arc;

use tracing::{debug, info};

use crate::analytics::{self, AggregationRow, GroupField, Stats};
use crate::config::StaticConfig;
use crate::errors::{Result, UtmError};
use crate::services::records::{RecordSource, SystemRecordSource};
use crate::storage::{
    KeyValueStore, LINKS_KEY, Link, StorageFactory, TEMPLATES_KEY, Template, load_records,
    save_records,
};
use crate::utils::csv_handler;
use crate::utm::{self, UtmParams};

// ============ Drafts ============

/// 待保存的链接输入
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub base_url: String,
    pub params: UtmParams,
}

impl LinkDraft {
    /// 完整表单：所有值按原样保留
    pub fn builder(base_url: impl Into<String>, params: UtmParams) -> Self {
        Self {
            base_url: base_url.into(),
            params,
        }
    }

    /// 快速创建：去掉首尾空白，content/term 置空
    pub fn quick(base_url: &str, source: &str, medium: &str, campaign: &str) -> Self {
        Self {
            base_url: base_url.trim().to_string(),
            params: UtmParams::new(source.trim(), medium.trim(), campaign.trim())
                .with_content("")
                .with_term(""),
        }
    }

    /// 用模板的参数值覆盖当前参数，base URL 不变
    pub fn apply_template(&mut self, template: &Template) {
        self.params = template.values.clone();
    }

    /// 当前输入对应的最终 URL
    pub fn preview(&self) -> String {
        utm::compose(&self.base_url, &self.params)
    }

    /// base URL、source、medium、campaign 为必填
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("base URL", self.base_url.as_str()),
            ("utm_source", self.params.source.as_str()),
            ("utm_medium", self.params.medium.as_str()),
            ("utm_campaign", self.params.campaign.as_str()),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(UtmError::validation(format!(
                "Missing required value: {}",
                missing.join(", ")
            )))
        }
    }
}

// ============ Transitions ============

/// 新链接排在最前
pub fn with_link(prev: &[Link], link: Link) -> Vec<Link> {
    let mut next = Vec::with_capacity(prev.len() + 1);
    next.push(link);
    next.extend_from_slice(prev);
    next
}

/// 按名称（忽略大小写）更新或新增模板
///
/// 命中已有模板时保留其 id 和位置，名称与参数值替换为新值；
/// 否则以 `new_id()` 生成的 id 插入到最前。
pub fn with_template(
    prev: &[Template],
    name: &str,
    values: UtmParams,
    new_id: impl FnOnce() -> String,
) -> Vec<Template> {
    match prev.iter().position(|t| t.matches_name(name)) {
        Some(pos) => {
            let mut next = prev.to_vec();
            next[pos] = Template {
                id: prev[pos].id.clone(),
                name: name.to_string(),
                values,
            };
            next
        }
        None => {
            let mut next = Vec::with_capacity(prev.len() + 1);
            next.push(Template {
                id: new_id(),
                name: name.to_string(),
                values,
            });
            next.extend_from_slice(prev);
            next
        }
    }
}

// ============ Workspace ============

/// 记录键名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordKeys {
    pub links: String,
    pub templates: String,
}

impl Default for RecordKeys {
    fn default() -> Self {
        Self {
            links: LINKS_KEY.to_string(),
            templates: TEMPLATES_KEY.to_string(),
        }
    }
}

pub struct Workspace {
    store: Arc<dyn KeyValueStore>,
    records: Arc<dyn RecordSource>,
    keys: RecordKeys,
    links: Vec<Link>,
    templates: Vec<Template>,
}

impl Workspace {
    /// 使用默认键名打开工作区
    pub fn open(store: Arc<dyn KeyValueStore>, records: Arc<dyn RecordSource>) -> Self {
        Self::open_with_keys(store, records, RecordKeys::default())
    }

    /// 两个记录只在这里加载一次；缺失或损坏时视为空集合
    pub fn open_with_keys(
        store: Arc<dyn KeyValueStore>,
        records: Arc<dyn RecordSource>,
        keys: RecordKeys,
    ) -> Self {
        let links: Vec<Link> = load_records(store.as_ref(), &keys.links);
        let templates: Vec<Template> = load_records(store.as_ref(), &keys.templates);
        debug!(
            "Workspace opened on {} backend: {} links, {} templates",
            store.backend_name(),
            links.len(),
            templates.len()
        );

        Self {
            store,
            records,
            keys,
            links,
            templates,
        }
    }

    /// 按配置创建文件存储和系统记录源
    pub fn from_config(config: &StaticConfig) -> Self {
        let store = StorageFactory::create(&config.storage);
        let records = Arc::new(SystemRecordSource::new(config.links.max_simulated_clicks));
        let keys = RecordKeys {
            links: config.storage.links_key.clone(),
            templates: config.storage.templates_key.clone(),
        };
        Self::open_with_keys(store, records, keys)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// 最新的 `limit` 条链接
    pub fn recent_links(&self, limit: usize) -> &[Link] {
        &self.links[..limit.min(self.links.len())]
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// 校验输入、生成最终 URL 并保存为新链接
    pub fn create_link(&mut self, draft: LinkDraft) -> Result<&Link> {
        draft.validate()?;

        let final_url = draft.preview();
        let link = Link {
            id: self.records.next_id(),
            created_at: self.records.now(),
            base_url: draft.base_url,
            params: draft.params,
            final_url,
            clicks: self.records.simulated_clicks(),
        };

        let next = with_link(&self.links, link);
        save_records(self.store.as_ref(), &self.keys.links, &next)?;
        self.links = next;

        let created = &self.links[0];
        info!("Created UTM for campaign \"{}\"", created.campaign());
        Ok(created)
    }

    /// 保存模板；名称去除首尾空白后不能为空
    pub fn save_template(&mut self, name: &str, values: UtmParams) -> Result<&Template> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UtmError::validation("Template name cannot be empty"));
        }

        let records = Arc::clone(&self.records);
        let next = with_template(&self.templates, name, values, || records.next_id());
        save_records(self.store.as_ref(), &self.keys.templates, &next)?;
        self.templates = next;

        info!("Saved template \"{}\"", name);
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| UtmError::not_found(format!("Template \"{}\" not found", name)))
    }

    /// 按名称精确查找模板
    pub fn apply_template(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// 按 id 查找链接：先精确匹配，否则接受唯一的 id 前缀
    pub fn find_link(&self, id: &str) -> Result<&Link> {
        let id = id.trim();
        if id.is_empty() {
            return Err(UtmError::validation("Link id cannot be empty"));
        }
        if let Some(link) = self.links.iter().find(|l| l.id == id) {
            return Ok(link);
        }

        let mut matches = self.links.iter().filter(|l| l.id.starts_with(id));
        match (matches.next(), matches.next()) {
            (Some(link), None) => Ok(link),
            (Some(_), Some(_)) => Err(UtmError::validation(format!(
                "Link id prefix \"{}\" is ambiguous",
                id
            ))),
            (None, _) => Err(UtmError::not_found(format!("Link not found: {}", id))),
        }
    }

    pub fn stats(&self) -> Stats {
        analytics::summarize(&self.links)
    }

    pub fn group_sum(&self, field: GroupField) -> Vec<AggregationRow> {
        analytics::group_sum(&self.links, field)
    }

    pub fn campaign_breakdown(&self) -> Vec<AggregationRow> {
        analytics::campaign_breakdown(&self.links)
    }

    pub fn channel_comparison(&self) -> Vec<AggregationRow> {
        analytics::channel_comparison(&self.links)
    }

    pub fn export_csv(&self) -> Result<String> {
        csv_handler::render_csv(&self.links)
    }
}
