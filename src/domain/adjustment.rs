// ==========================================
// 产量与产能规划 - 产量调整 (Puts & Takes) 领域模型
// ==========================================
// 红线: 调整记录只追加,不修改
// 用途: 审计追踪
// ==========================================

use crate::domain::types::{AdjustmentDirection, AdjustmentReason};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// AdjustmentRecord - 产量调整记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentRecord {
    pub id: u64,                 // 记录ID (按账本长度单调递增)
    pub site_id: String,         // 基地ID
    pub sku: String,             // SKU
    pub date: NaiveDate,         // 提交日期
    pub reason: AdjustmentReason,
    pub old_value: f64,
    pub new_value: f64,
    pub requested_by: String,    // 申请人
}

impl AdjustmentRecord {
    /// 差值 = new - old
    pub fn delta(&self) -> f64 {
        self.new_value - self.old_value
    }

    /// 调整方向
    pub fn direction(&self) -> AdjustmentDirection {
        AdjustmentDirection::from_delta(self.delta())
    }
}

// ==========================================
// AdjustmentForm - 调整提交表单 (原始输入)
// ==========================================
// 数值以字符串形式保留,提交时严格校验
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentForm {
    pub site_id: String,
    pub sku: String,
    pub reason: String,
    pub old_value: String,
    pub new_value: String,
    pub requested_by: String,
}

// ==========================================
// AdjustmentDraft - 已通过数值校验的调整
// ==========================================
// 红线: 只能由账本的表单校验构造,外部只读
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentDraft {
    pub(crate) site_id: String,
    pub(crate) sku: String,
    pub(crate) reason: AdjustmentReason,
    pub(crate) old_value: f64,
    pub(crate) new_value: f64,
    pub(crate) requested_by: String,
}

impl AdjustmentDraft {
    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn reason(&self) -> AdjustmentReason {
        self.reason
    }

    pub fn old_value(&self) -> f64 {
        self.old_value
    }

    pub fn new_value(&self) -> f64 {
        self.new_value
    }

    pub fn requested_by(&self) -> &str {
        &self.requested_by
    }
}

// ==========================================
// LedgerSummary - 账本汇总 (读时计算)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub total: usize,
    pub increases: usize,
    pub decreases: usize,
    pub unchanged: usize,
    pub net_delta: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_and_direction() {
        let record = AdjustmentRecord {
            id: 1,
            site_id: "cali".to_string(),
            sku: "Colgate Total".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            reason: AdjustmentReason::ProductTransfer,
            old_value: 42.0,
            new_value: 45.0,
            requested_by: "Maria Santos".to_string(),
        };
        assert_eq!(record.delta(), 3.0);
        assert_eq!(record.direction(), AdjustmentDirection::Increase);
    }
}
