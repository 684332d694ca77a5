// ==========================================
// 产量与产能规划 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 查找错误 =====
    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("主键重复: {entity} with id={id}")]
    DuplicateId { entity: String, id: String },

    // ===== 数据质量错误 =====
    #[error("数据验证失败: {0}")]
    ValidationError(String),

    #[error("字段值错误 (field={field}): {message}")]
    FieldValueError { field: String, message: String },

    // ===== 参考数据加载错误 =====
    #[error("参考数据读取失败 ({path}): {message}")]
    ReferenceDataReadError { path: String, message: String },

    #[error("参考数据解析失败: {0}")]
    ReferenceDataParseError(#[from] serde_json::Error),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
