// ==========================================
// 产量与产能规划 - 核心库
// ==========================================
// 系统定位: 多基地产量录入、折吨汇总、产能利用率与水资源风险预警
// 分层: domain -> engine -> repository -> api -> app
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 汇总/折算/风险规则
pub mod engine;

// 数据仓储层 - 参考数据与调整账本 (内存)
pub mod repository;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态组装与会话
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AdjustmentDirection, AdjustmentReason, Frequency, Period, Region, RiskTier, SiteStatus,
    UnitOfMeasure,
};

// 领域实体
pub use domain::{
    AdjustmentForm, AdjustmentRecord, CapacityRow, LedgerSummary, PeriodValue, Site, VolumeEntry,
    VolumeRow, VolumeTable,
};

// 引擎
pub use engine::{ConsolidationEngine, PlannedVolumeProvider, RiskAssessor, VolumeAggregator};

// 仓储
pub use repository::AdjustmentLedger;

// API
pub use api::{ApiError, ApiResult, DashboardApi, PutsTakesApi, VolumeInputApi};

// 应用
pub use app::{AppState, SessionContext};
pub use config::PlanningConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Site Volume Planning";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(!APP_NAME.is_empty());
    }
}
