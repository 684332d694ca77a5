// ==========================================
// PlanningConfig 集成测试
// ==========================================
// 测试目标: 验证配置文件读取、环境变量覆写与校验
// ==========================================

mod test_helpers;

use std::path::Path;
use std::sync::Mutex;

use site_volume_planning::config::{config_env, ConfigError, PlanningConfig};
use site_volume_planning::domain::types::Frequency;
use test_helpers::write_temp_json;

// 环境变量为进程级全局状态,相关测试串行执行
static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_from_file() {
    println!("\n=== 测试: 读取配置文件 ===");
    let file = write_temp_json(
        r#"{
            "locale": "zh-CN",
            "maxSkuRows": 8,
            "defaultFrequency": "quarterly",
            "login": { "username": "planner", "password": "secret" }
        }"#,
    );

    let config = PlanningConfig::from_file(file.path()).expect("Failed to load config");
    assert_eq!(config.locale, "zh-CN");
    assert_eq!(config.max_sku_rows, 8);
    assert_eq!(config.default_frequency, Frequency::Quarterly);
    assert_eq!(config.log_filter, "info");
    assert_eq!(
        config.login.as_ref().map(|l| l.username.as_str()),
        Some("planner")
    );
    println!("✓ 配置读取成功");
}

#[test]
fn test_from_file_errors() {
    println!("\n=== 测试: 配置文件错误 ===");
    let missing = PlanningConfig::from_file(Path::new("/nonexistent/site-volume-planning.json"));
    assert!(matches!(missing, Err(ConfigError::ReadError { .. })));

    let broken = write_temp_json("{ not json");
    assert!(matches!(
        PlanningConfig::from_file(broken.path()),
        Err(ConfigError::ParseError { .. })
    ));

    // from_file 只负责读取,取值校验在 validate/load 中
    let invalid = write_temp_json(r#"{ "maxSkuRows": 0 }"#);
    let config = PlanningConfig::from_file(invalid.path()).expect("Failed to read config");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { .. })
    ));
    println!("✓ 错误类型正确");
}

#[test]
fn test_env_overrides() {
    println!("\n=== 测试: 环境变量覆写 ===");
    let _guard = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let file = write_temp_json(r#"{ "locale": "en", "logFilter": "warn" }"#);

    std::env::set_var(config_env::LOCALE, "zh-CN");
    std::env::set_var(config_env::LOG_FILTER, "site_volume_planning=debug");
    let config = PlanningConfig::load(Some(file.path()));
    std::env::remove_var(config_env::LOCALE);
    std::env::remove_var(config_env::LOG_FILTER);

    let config = config.expect("Failed to load config");
    assert_eq!(config.locale, "zh-CN");
    assert_eq!(config.log_filter, "site_volume_planning=debug");
    println!("✓ 环境变量覆写生效");
}

#[test]
fn test_env_override_is_validated() {
    println!("\n=== 测试: 覆写后重新校验 ===");
    let _guard = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let file = write_temp_json("{}");

    std::env::set_var(config_env::LOCALE, "fr");
    let result = PlanningConfig::load(Some(file.path()));
    std::env::remove_var(config_env::LOCALE);

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    println!("✓ 不支持的语言被拒绝");
}

#[test]
fn test_env_override_repairs_file_value() {
    println!("\n=== 测试: 环境变量覆写文件中的非法语言 ===");
    let _guard = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let file = write_temp_json(r#"{ "locale": "fr" }"#);

    std::env::set_var(config_env::LOCALE, "en");
    let result = PlanningConfig::load(Some(file.path()));
    std::env::remove_var(config_env::LOCALE);

    let config = result.expect("override should make the config valid");
    assert_eq!(config.locale, "en");

    // 无覆写时仍被拒绝
    let result = PlanningConfig::load(Some(file.path()));
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    println!("✓ 覆写后再校验");
}
