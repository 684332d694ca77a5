// ==========================================
// 产量与产能规划 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod adjustment;
pub mod capacity;
pub mod site;
pub mod types;
pub mod volume;

// 重导出核心类型
pub use adjustment::{AdjustmentDraft, AdjustmentForm, AdjustmentRecord, LedgerSummary};
pub use capacity::{CapacityConstraint, CapacityRow};
pub use site::Site;
pub use types::{
    AdjustmentDirection, AdjustmentReason, Frequency, Period, Region, RiskTier, SiteStatus,
    UnitOfMeasure,
};
pub use volume::{
    parse_quantity, PeriodValue, VolumeEntry, VolumeRow, VolumeTable, VolumeTableError,
};
