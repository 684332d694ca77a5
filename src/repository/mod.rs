// ==========================================
// 产量与产能规划 - 数据仓储层 (内存)
// ==========================================
// 职责: 参考数据加载、基地/SKU 查询、调整账本
// 红线: 仓储不做业务计算,只做数据持有与校验
// ==========================================

pub mod adjustment_ledger;
pub mod error;
pub mod reference_data;
pub mod site_repo;

pub use adjustment_ledger::AdjustmentLedger;
pub use error::{RepositoryError, RepositoryResult};
pub use reference_data::{seed_adjustments, seed_monthly_volumes, ReferenceData};
pub use site_repo::{SiteRepository, SkuCatalog};
