// ==========================================
// 产量与产能规划 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换下层错误为用户可理解的错误消息
// 红线: 所有错误信息必须包含显式原因
// ==========================================

use crate::config::ConfigError;
use crate::domain::volume::VolumeTableError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("业务规则违反: {0}")]
    BusinessRuleViolation(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    // ==========================================
    // 会话错误
    // ==========================================
    #[error("用户名或密码错误")]
    InvalidCredentials,

    #[error("当前没有已登录的会话")]
    NoActiveSession,

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})不存在", entity, id))
            }
            RepositoryError::DuplicateId { entity, id } => {
                ApiError::BusinessRuleViolation(format!("{}(id={})重复", entity, id))
            }
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),
            RepositoryError::FieldValueError { field, message } => {
                ApiError::InvalidInput(format!("字段{}错误: {}", field, message))
            }
            RepositoryError::ReferenceDataReadError { .. }
            | RepositoryError::ReferenceDataParseError(_) => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}

// ==========================================
// 从 VolumeTableError 转换
// ==========================================
impl From<VolumeTableError> for ApiError {
    fn from(err: VolumeTableError) -> Self {
        match err {
            VolumeTableError::RowNotFound(row_id) => {
                ApiError::NotFound(format!("录入行(id={})不存在", row_id))
            }
            VolumeTableError::TooManyRows(_) | VolumeTableError::LastRow => {
                ApiError::BusinessRuleViolation(err.to_string())
            }
            VolumeTableError::PeriodNotInFrequency { .. } | VolumeTableError::EmptyTable(_) => {
                ApiError::InvalidInput(err.to_string())
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
