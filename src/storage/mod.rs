use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::StorageConfig;
use crate::errors::Result;

pub mod backends;
pub mod models;

pub use backends::{FileStore, MemoryStore};
pub use models::{Link, Template};

/// 链接记录的默认键名
pub const LINKS_KEY: &str = "utmLinks";
/// 模板记录的默认键名
pub const TEMPLATES_KEY: &str = "utmTemplates";

/// 本地键值持久化
///
/// 每个键对应一整段 JSON 文本，写入总是整体覆盖。
pub trait KeyValueStore: Send + Sync {
    /// 读取记录，不存在时返回 `Ok(None)`
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// 覆盖写入记录
    fn save(&self, key: &str, json: &str) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}

/// 读取一个 JSON 数组记录
///
/// 记录缺失、读取失败或不是 JSON 数组时返回空集合，不向上报告错误；
/// 数组中无法识别的单条记录被跳过。
pub fn load_records<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let content = match store.load(key) {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!("Record '{}' not found, starting empty", key);
            return Vec::new();
        }
        Err(e) => {
            debug!("Failed to read record '{}': {}", key, e);
            return Vec::new();
        }
    };

    let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&content) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Record '{}' is not a valid array, starting empty: {}", key, e);
            return Vec::new();
        }
    };

    // 单条记录解析失败只跳过该条，其余照常加载
    let total = entries.len();
    let records: Vec<T> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("Skipping entry {} of '{}': {}", i, key, e);
                None
            }
        })
        .collect();
    debug!("Loaded {}/{} entries from '{}'", records.len(), total, key);
    records
}

/// 整体写回一个 JSON 数组记录
pub fn save_records<T: Serialize>(store: &dyn KeyValueStore, key: &str, records: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    store.save(key, &json)?;
    debug!("Saved {} entries to '{}'", records.len(), key);
    Ok(())
}

pub struct StorageFactory;

impl StorageFactory {
    /// 按配置创建文件存储
    pub fn create(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
        Arc::new(FileStore::new(&config.data_dir))
    }
}
