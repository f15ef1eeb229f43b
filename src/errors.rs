use std::fmt;

#[derive(Debug, Clone)]
pub enum UtmError {
    Config(String),
    FileOperation(String),
    Serialization(String),
    Validation(String),
    NotFound(String),
    Export(String),
    Clipboard(String),
}

impl UtmError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            UtmError::Config(_) => "E001",
            UtmError::FileOperation(_) => "E002",
            UtmError::Serialization(_) => "E003",
            UtmError::Validation(_) => "E004",
            UtmError::NotFound(_) => "E005",
            UtmError::Export(_) => "E006",
            UtmError::Clipboard(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            UtmError::Config(_) => "Configuration Error",
            UtmError::FileOperation(_) => "File Operation Error",
            UtmError::Serialization(_) => "Serialization Error",
            UtmError::Validation(_) => "Validation Error",
            UtmError::NotFound(_) => "Resource Not Found",
            UtmError::Export(_) => "Export Error",
            UtmError::Clipboard(_) => "Clipboard Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            UtmError::Config(msg)
            | UtmError::FileOperation(msg)
            | UtmError::Serialization(msg)
            | UtmError::Validation(msg)
            | UtmError::NotFound(msg)
            | UtmError::Export(msg)
            | UtmError::Clipboard(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for UtmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for UtmError {}

// 便捷的构造函数
impl UtmError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        UtmError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        UtmError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        UtmError::Serialization(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        UtmError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        UtmError::NotFound(msg.into())
    }

    pub fn export<T: Into<String>>(msg: T) -> Self {
        UtmError::Export(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        UtmError::Clipboard(msg.into())
    }
}

impl From<std::io::Error> for UtmError {
    fn from(err: std::io::Error) -> Self {
        UtmError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for UtmError {
    fn from(err: serde_json::Error) -> Self {
        UtmError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for UtmError {
    fn from(err: csv::Error) -> Self {
        UtmError::Export(err.to_string())
    }
}

impl From<config::ConfigError> for UtmError {
    fn from(err: config::ConfigError) -> Self {
        UtmError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UtmError>;
