// ==========================================
// 产量与产能规划 - 引擎层
// ==========================================
// 职责: 实现业务计算规则 (汇总/折算/风险/汇总视图)
// 红线: 引擎无状态、无 I/O, 所有规则可重复计算
// ==========================================

pub mod aggregator;
pub mod consolidation;
pub mod risk;

// 重导出核心引擎
pub use aggregator::VolumeAggregator;
pub use consolidation::{
    product_categories, ConsolidationEngine, ConsolidationKpis, ConsolidationView,
    PlannedVolumeProvider, ProductRollup, RegionRollup, StaticVolumeProvider,
    VolumeTableProvider,
};
pub use risk::{
    RiskAssessor, SiteRiskAssessment, VOLUME_ALERT_THRESHOLD_T, WATER_RISK_ALERT_CUTOFF,
};
