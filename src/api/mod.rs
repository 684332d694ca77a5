// ==========================================
// 产量与产能规划 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供展示层调用
// ==========================================

pub mod error;
pub mod dashboard_api;
pub mod puts_takes_api;
pub mod volume_input_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use dashboard_api::{DashboardApi, SiteOverview};
pub use puts_takes_api::{AdjustmentView, PutsTakesApi};
pub use volume_input_api::{SiteVolumeSummary, VolumeInputApi};
