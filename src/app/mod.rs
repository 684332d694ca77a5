// ==========================================
// 产量与产能规划 - 应用层
// ==========================================
// 职责: 组装仓储/API/会话,供入口程序使用
// ==========================================

pub mod session;
pub mod state;

// 重导出
pub use session::{Session, SessionContext};
pub use state::AppState;
