// ==========================================
// 产量与产能规划 - 产能行领域模型
// ==========================================
// 职责: SKU 汇总产量 vs 申报最大产能
// 红线: 利用率不设上限,超过 100% 必须如实呈现
// ==========================================

use crate::domain::types::UnitOfMeasure;
use serde::{Deserialize, Serialize};

// ==========================================
// CapacityRow - 产能行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityRow {
    pub row_id: String,
    pub sku: String,
    pub unit: UnitOfMeasure,
    pub total: f64,                // 行合计 (原单位)
    pub total_t: f64,              // 行合计 (折吨)
    pub max_capacity: Option<f64>, // 申报最大产能 (原单位)
    pub utilization_pct: f64,      // 利用率 (%)
}

// ==========================================
// Trait: CapacityConstraint
// ==========================================
// 用途: 产能越限判断接口
pub trait CapacityConstraint {
    /// 是否超出申报产能
    fn is_over_capacity(&self) -> bool;

    /// 剩余产能 (原单位,未申报时为 None)
    fn remaining_capacity(&self) -> Option<f64>;

    /// 超出比例 (0.0 起,未超出为 0)
    fn overflow_ratio(&self) -> f64;
}

impl CapacityConstraint for CapacityRow {
    fn is_over_capacity(&self) -> bool {
        self.utilization_pct > 100.0
    }

    fn remaining_capacity(&self) -> Option<f64> {
        self.max_capacity
            .filter(|cap| *cap > 0.0)
            .map(|cap| (cap - self.total).max(0.0))
    }

    fn overflow_ratio(&self) -> f64 {
        match self.max_capacity {
            Some(cap) if cap > 0.0 => ((self.total - cap) / cap).max(0.0),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(total: f64, max_capacity: Option<f64>, utilization_pct: f64) -> CapacityRow {
        CapacityRow {
            row_id: "r1".to_string(),
            sku: "Kids".to_string(),
            unit: UnitOfMeasure::Tons,
            total,
            total_t: total,
            max_capacity,
            utilization_pct,
        }
    }

    #[test]
    fn test_over_capacity() {
        let r = row(120.0, Some(100.0), 120.0);
        assert!(r.is_over_capacity());
        assert_eq!(r.remaining_capacity(), Some(0.0));
        assert!((r.overflow_ratio() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_no_capacity_declared() {
        let r = row(50.0, None, 0.0);
        assert!(!r.is_over_capacity());
        assert_eq!(r.remaining_capacity(), None);
        assert_eq!(r.overflow_ratio(), 0.0);
    }
}
