//! 新记录的标识、时间戳与模拟点击数来源

use chrono::{DateTime, Utc};

/// 为新建的 Link / Template 提供 id、创建时间和模拟点击数
pub trait RecordSource: Send + Sync {
    fn next_id(&self) -> String;

    fn now(&self) -> DateTime<Utc>;

    /// 新链接的模拟点击数（不是实际统计）
    fn simulated_clicks(&self) -> u64;
}

/// 默认实现：UUID v4、系统时钟、`[0, max_clicks)` 内的随机数
#[derive(Debug, Clone)]
pub struct SystemRecordSource {
    max_clicks: u64,
}

impl SystemRecordSource {
    pub fn new(max_clicks: u64) -> Self {
        Self { max_clicks }
    }
}

impl Default for SystemRecordSource {
    fn default() -> Self {
        Self::new(5000)
    }
}

impl RecordSource for SystemRecordSource {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn simulated_clicks(&self) -> u64 {
        if self.max_clicks == 0 {
            return 0;
        }
        rand::random_range(0..self.max_clicks)
    }
}
