// ==========================================
// 产量与产能规划 - 运行配置
// ==========================================
// 加载顺序: 显式路径 -> SITE_VOLUME_PLANNING_CONFIG -> 用户配置目录 -> 默认值
// ==========================================

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::types::Frequency;

/// 环境变量名
pub mod config_env {
    pub const CONFIG_PATH: &str = "SITE_VOLUME_PLANNING_CONFIG";
    pub const LOCALE: &str = "SITE_VOLUME_PLANNING_LOCALE";
    pub const LOG_FILTER: &str = "SITE_VOLUME_PLANNING_LOG";
}

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

const CONFIG_DIR_NAME: &str = "site-volume-planning";
const CONFIG_FILE_NAME: &str = "config.json";

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件解析失败 ({path}): {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置值错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

/// 登录凭据 (仅做简单比对,不是真实鉴权)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginConfig {
    pub username: String,
    pub password: String,
}

// ==========================================
// PlanningConfig - 运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningConfig {
    /// 界面语言 ("en" / "zh-CN")
    #[serde(default = "default_locale")]
    pub locale: String,

    /// 日志过滤器 (RUST_LOG 未设置时使用)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// 单基地录入表最大行数
    #[serde(default = "default_max_sku_rows")]
    pub max_sku_rows: usize,

    /// 新录入表的默认频率
    #[serde(default)]
    pub default_frequency: Frequency,

    /// 参考数据 JSON 文件 (缺省使用内置种子数据)
    #[serde(default)]
    pub reference_data_path: Option<PathBuf>,

    /// 登录凭据 (缺省时拒绝所有登录)
    #[serde(default)]
    pub login: Option<LoginConfig>,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_max_sku_rows() -> usize {
    20
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            log_filter: default_log_filter(),
            max_sku_rows: default_max_sku_rows(),
            default_frequency: Frequency::default(),
            reference_data_path: None,
            login: None,
        }
    }
}

impl PlanningConfig {
    /// 从 JSON 文件读取
    ///
    /// 不应用环境变量覆写,也不校验; 校验由 load 在覆写后统一执行
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: PlanningConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::ParseError {
                path: path.display().to_string(),
                source,
            })?;
        Ok(config)
    }

    /// 按加载顺序解析配置并应用环境变量覆写
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match resolve_config_path(explicit_path) {
            Some(path) => {
                tracing::info!(path = %path.display(), "加载配置文件");
                Self::from_file(&path)?
            }
            None => {
                tracing::info!("未找到配置文件,使用默认配置");
                Self::default()
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 环境变量覆写
    pub fn apply_env_overrides(&mut self) {
        if let Some(locale) = non_empty_env(config_env::LOCALE) {
            self.locale = locale;
        }
        if let Some(filter) = non_empty_env(config_env::LOG_FILTER) {
            self.log_filter = filter;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_sku_rows == 0 {
            return Err(ConfigError::InvalidValue {
                key: "maxSkuRows".to_string(),
                value: self.max_sku_rows.to_string(),
                message: "至少为 1".to_string(),
            });
        }
        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "locale".to_string(),
                value: self.locale.clone(),
                message: format!("仅支持 {:?}", SUPPORTED_LOCALES),
            });
        }
        Ok(())
    }
}

/// 默认配置文件路径: <config_dir>/site-volume-planning/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    if let Some(path) = non_empty_env(config_env::CONFIG_PATH) {
        return Some(PathBuf::from(path));
    }
    default_config_path().filter(|p| p.exists())
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlanningConfig::default();
        assert_eq!(config.locale, "en");
        assert_eq!(config.max_sku_rows, 20);
        assert_eq!(config.default_frequency, Frequency::Monthly);
        assert!(config.login.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PlanningConfig = serde_json::from_str(r#"{"maxSkuRows": 5}"#).unwrap();
        assert_eq!(config.max_sku_rows, 5);
        assert_eq!(config.locale, "en");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = PlanningConfig::default();
        config.max_sku_rows = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue { .. })));

        let mut config = PlanningConfig::default();
        config.locale = "fr".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue { .. })));
    }
}
