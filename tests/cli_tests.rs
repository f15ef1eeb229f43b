//! CLI 命令集成测试
//!
//! 命令在临时数据目录上执行，结果通过存储重新读取验证。

#![cfg(feature = "cli")]

use std::sync::Arc;

use clap::Parser;
use tempfile::TempDir;
use utm_command::cli::Cli;
use utm_command::config::StaticConfig;
use utm_command::interfaces::cli::{CliError, run_cli_command};
use utm_command::services::{SystemRecordSource, Workspace};
use utm_command::storage::FileStore;

fn test_config(dir: &TempDir) -> StaticConfig {
    let mut config = StaticConfig::default();
    config.storage.data_dir = dir.path().join("data").to_string_lossy().into_owned();
    config.export.default_filename = dir.path().join("out.csv").to_string_lossy().into_owned();
    config
}

fn run(config: &StaticConfig, args: &[&str]) -> Result<(), CliError> {
    let mut argv = vec!["utm-command"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    run_cli_command(cli.command, config)
}

fn reopen(config: &StaticConfig) -> Workspace {
    Workspace::open(
        Arc::new(FileStore::new(&config.storage.data_dir)),
        Arc::new(SystemRecordSource::default()),
    )
}

#[test]
fn test_add_then_reload() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    run(
        &config,
        &[
            "add",
            "https://x.com/landing",
            "--source",
            "fb",
            "--medium",
            "social",
            "--campaign",
            "launch",
        ],
    )
    .unwrap();

    let workspace = reopen(&config);
    assert_eq!(workspace.links().len(), 1);
    assert_eq!(
        workspace.links()[0].final_url,
        "https://x.com/landing?utm_source=fb&utm_medium=social&utm_campaign=launch"
    );
    assert!(workspace.links()[0].clicks < 5000);
}

#[test]
fn test_add_with_template_and_override() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    run(
        &config,
        &[
            "template", "save", "Promo", "--source", "fb", "--medium", "cpc", "--campaign",
            "spring",
        ],
    )
    .unwrap();
    run(
        &config,
        &["add", "https://x.com", "-t", "Promo", "--campaign", "summer"],
    )
    .unwrap();

    let workspace = reopen(&config);
    assert_eq!(
        workspace.links()[0].final_url,
        "https://x.com?utm_source=fb&utm_medium=cpc&utm_campaign=summer"
    );
}

#[test]
fn test_add_missing_fields_fails() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let err = run(&config, &["add", "https://x.com", "--source", "fb"]).unwrap_err();
    assert!(matches!(err, CliError::ValidationError(_)));
    assert!(reopen(&config).links().is_empty());
}

#[test]
fn test_unknown_template_fails() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let result = run(&config, &["preview", "https://x.com", "-t", "missing"]);
    assert!(result.is_err());
}

#[test]
fn test_quick_and_export() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    run(&config, &["quick", "https://x.com", "news", "email", "weekly"]).unwrap();
    run(&config, &["export"]).unwrap();

    let csv = std::fs::read_to_string(&config.export.default_filename).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("baseUrl,utm_source,utm_medium,utm_campaign,utm_content,utm_term,finalUrl,clicks")
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("https://x.com,news,email,weekly,,,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_read_only_commands_on_empty_workspace() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    for args in [
        &["list"][..],
        &["dashboard"],
        &["stats", "--json"],
        &["campaigns"],
        &["channels"],
        &["template", "list"],
    ] {
        run(&config, args).unwrap();
    }
    // 只读命令不创建数据目录
    assert!(!std::path::Path::new(&config.storage.data_dir).exists());
}

#[test]
fn test_config_generate_writes_toml() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let path = dir.path().join("sample.toml");
    let path_str = path.to_string_lossy().into_owned();

    run(&config, &["config", "generate", &path_str, "--force"]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: StaticConfig = toml::from_str(&content).unwrap();
    assert_eq!(parsed.storage.links_key, "utmLinks");
    assert_eq!(parsed.links.max_simulated_clicks, 5000);
}

#[test]
fn test_add_with_copy_saves_once_even_if_clipboard_fails() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    // 无剪贴板环境下复制失败也不影响保存结果
    let result = run(
        &config,
        &[
            "add",
            "https://x.com",
            "--source",
            "fb",
            "--medium",
            "social",
            "--campaign",
            "launch",
            "--copy",
        ],
    );
    assert!(result.is_ok());
    assert_eq!(reopen(&config).links().len(), 1);
}

#[test]
fn test_copy_unknown_link_fails() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    run(&config, &["quick", "https://x.com", "news", "email", "weekly"]).unwrap();
    assert!(run(&config, &["copy", "does-not-exist"]).is_err());
}
