use serde::{Deserialize, Serialize};

/// 配置文件名
pub const CONFIG_FILE: &str = "utm-command.toml";

/// 静态配置（启动时从 TOML 和环境变量加载）
///
/// - storage: 数据目录与记录键名
/// - logging: 日志配置
/// - links: 新链接的生成参数
/// - export: CSV 导出
/// - workspace: 工作区展示信息
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > utm-command.toml > 默认值
    /// ENV 前缀：UTM，分隔符：__
    /// 示例：UTM__STORAGE__DATA_DIR=/tmp/utm
    pub fn load() -> Self {
        match Self::try_load(CONFIG_FILE) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                Self::default()
            }
        }
    }

    /// 从指定路径加载，文件不存在时只使用环境变量和默认值
    pub fn try_load(path: &str) -> crate::errors::Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("UTM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize::<StaticConfig>()?)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_links_key")]
    pub links_key: String,
    #[serde(default = "default_templates_key")]
    pub templates_key: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
}

/// 新链接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// 模拟点击数上限（不含）
    #[serde(default = "default_max_simulated_clicks")]
    pub max_simulated_clicks: u64,
    /// 仪表盘显示的最近链接数
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

/// 导出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_filename")]
    pub default_filename: String,
}

/// 工作区信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default = "default_team_name")]
    pub team_name: String,
    #[serde(default = "default_primary_domain")]
    pub primary_domain: String,
}

// ============================================================
// Default value functions
// ============================================================

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_links_key() -> String {
    crate::storage::LINKS_KEY.to_string()
}

fn default_templates_key() -> String {
    crate::storage::TEMPLATES_KEY.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_simulated_clicks() -> u64 {
    5000
}

fn default_recent_limit() -> usize {
    5
}

fn default_export_filename() -> String {
    crate::utils::csv_handler::DEFAULT_EXPORT_FILENAME.to_string()
}

fn default_team_name() -> String {
    "Marketing Team".to_string()
}

fn default_primary_domain() -> String {
    "example.com".to_string()
}

// ============================================================
// Default implementations
// ============================================================

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            links_key: default_links_key(),
            templates_key: default_templates_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            max_simulated_clicks: default_max_simulated_clicks(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_filename: default_export_filename(),
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            team_name: default_team_name(),
            primary_domain: default_primary_domain(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = StaticConfig::default();
        assert_eq!(config.storage.links_key, "utmLinks");
        assert_eq!(config.storage.templates_key, "utmTemplates");
        assert_eq!(config.links.max_simulated_clicks, 5000);
        assert_eq!(config.links.recent_limit, 5);
        assert_eq!(config.export.default_filename, "utm-links.csv");
    }

    #[test]
    fn test_sample_config_round_trip() {
        let sample = StaticConfig::generate_sample_config();
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.storage.data_dir, "data");
        assert_eq!(parsed.workspace.team_name, "Marketing Team");
    }

    #[test]
    fn test_try_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[storage]\ndata_dir = \"/tmp/utm-data\"\n\n[links]\nrecent_limit = 3\n",
        )
        .unwrap();

        let config = StaticConfig::try_load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.storage.data_dir, "/tmp/utm-data");
        assert_eq!(config.links.recent_limit, 3);
        assert_eq!(config.links.max_simulated_clicks, 5000);
    }

    #[test]
    fn test_save_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("utm-command.toml");
        StaticConfig::default().save_to_file(&path).unwrap();
        assert!(path.exists());
    }
}
