// ==========================================
// 产量与产能规划 - 配置层
// ==========================================
// 职责: 运行配置加载 (文件 -> 环境变量覆写 -> 校验)
// 红线: 折吨系数 / 风险阈值为固定常量,不进入配置
// ==========================================

pub mod planning_config;

pub use planning_config::{config_env, ConfigError, LoginConfig, PlanningConfig};
