// ==========================================
// 产量与产能规划 - 产量调整账本 (内存)
// ==========================================
// 红线: 只追加,最新记录在前 (按提交顺序,不按日期排序)
// 红线: 数值非法的记录直接拒绝,不补零
// ==========================================

mod core;
mod queries;


pub use self::core::{parse_strict_number, AdjustmentLedger};
