// ==========================================
// 产量与产能规划 - 产量汇总引擎
// ==========================================
// 职责: 行合计 / 期间合计 / 折吨总量 / 产能利用率
// 输入: 录入行 (SKU x 期间 x 单位)
// 输出: 可比较的吨位合计
// ==========================================
// 红线: 纯函数,不缓存,每次按当前录入表重新计算
// ==========================================

use crate::domain::capacity::CapacityRow;
use crate::domain::types::{Frequency, Period, UnitOfMeasure, IDENTITY_FACTOR};
use crate::domain::volume::{parse_quantity, PeriodValue, VolumeEntry, VolumeRow};

// ==========================================
// VolumeAggregator - 产量汇总引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct VolumeAggregator {
    // 无状态引擎
}

impl VolumeAggregator {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 行合计
    // ==========================================

    /// 行合计 (原单位)
    ///
    /// 非有限值按 0 计入
    pub fn row_total(&self, entries: &[PeriodValue]) -> f64 {
        entries
            .iter()
            .map(|e| if e.quantity.is_finite() { e.quantity } else { 0.0 })
            .sum()
    }

    /// 行合计 (原始录入字符串)
    ///
    /// 空值/非数字按 0 计入
    pub fn row_total_raw(&self, entries: &[(Period, &str)]) -> f64 {
        entries.iter().map(|(_, raw)| parse_quantity(raw)).sum()
    }

    // ==========================================
    // 单位折算
    // ==========================================

    /// 折吨
    pub fn to_tons(&self, quantity: f64, unit: UnitOfMeasure) -> f64 {
        quantity * unit.tons_factor()
    }

    /// 按单位标签折吨
    ///
    /// 未知标签不折算,原值返回
    pub fn to_tons_tagged(&self, quantity: f64, unit_tag: &str) -> f64 {
        match UnitOfMeasure::from_tag(unit_tag) {
            Some(unit) => self.to_tons(quantity, unit),
            None => {
                tracing::warn!(unit_tag, "未知计量单位,按原值计入(不折算)");
                quantity * IDENTITY_FACTOR
            }
        }
    }

    // ==========================================
    // 汇总
    // ==========================================

    /// 折吨总量 = Σ to_tons(行合计, 行单位)
    pub fn consolidated_total(&self, rows: &[VolumeRow]) -> f64 {
        rows.iter()
            .map(|row| self.to_tons(self.row_total(&row.values), row.unit))
            .sum()
    }

    /// 逐条记录折吨总量 (记录可各自携带单位)
    pub fn consolidated_total_entries(&self, entries: &[VolumeEntry]) -> f64 {
        entries
            .iter()
            .filter(|e| e.quantity.is_finite())
            .map(|e| self.to_tons(e.quantity, e.unit))
            .sum()
    }

    /// 单期间列合计 (折吨); 行中缺失该期间按 0 计
    pub fn period_total(&self, rows: &[VolumeRow], period: Period) -> f64 {
        rows.iter()
            .map(|row| {
                let quantity = row.value(period).filter(|q| q.is_finite()).unwrap_or(0.0);
                self.to_tons(quantity, row.unit)
            })
            .sum()
    }

    /// 频率下全部期间的列合计 (折吨)
    pub fn period_totals(&self, rows: &[VolumeRow], frequency: Frequency) -> Vec<PeriodValue> {
        frequency
            .periods()
            .iter()
            .map(|p| PeriodValue::new(*p, self.period_total(rows, *p)))
            .collect()
    }

    // ==========================================
    // 产能利用率
    // ==========================================

    /// 利用率 (%) = 100 * 合计 / 最大产能
    ///
    /// 最大产能 <= 0 时返回 0; 不设上限
    pub fn utilization(&self, row_total: f64, max_capacity: f64) -> f64 {
        if max_capacity.is_nan() || max_capacity <= 0.0 {
            return 0.0;
        }
        100.0 * row_total / max_capacity
    }

    /// 产能行 (合计 + 利用率)
    pub fn capacity_row(&self, row: &VolumeRow) -> CapacityRow {
        let total = self.row_total(&row.values);
        let utilization_pct = row
            .max_capacity
            .map(|cap| self.utilization(total, cap))
            .unwrap_or(0.0);

        CapacityRow {
            row_id: row.row_id.clone(),
            sku: row.sku.clone(),
            unit: row.unit,
            total,
            total_t: self.to_tons(total, row.unit),
            max_capacity: row.max_capacity,
            utilization_pct,
        }
    }

    pub fn capacity_rows(&self, rows: &[VolumeRow]) -> Vec<CapacityRow> {
        rows.iter().map(|row| self.capacity_row(row)).collect()
    }

    /// 基地整体利用率 (%)
    ///
    /// 仅统计申报了最大产能的行,合计与产能均先折吨; 无申报时返回 None
    pub fn site_utilization(&self, rows: &[VolumeRow]) -> Option<f64> {
        let (used_t, capacity_t) = rows
            .iter()
            .filter_map(|row| {
                row.max_capacity.filter(|cap| *cap > 0.0).map(|cap| {
                    (
                        self.to_tons(self.row_total(&row.values), row.unit),
                        self.to_tons(cap, row.unit),
                    )
                })
            })
            .fold((0.0, 0.0), |(u, c), (du, dc)| (u + du, c + dc));

        if capacity_t > 0.0 {
            Some(self.utilization(used_t, capacity_t))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(qs: &[(Period, f64)]) -> Vec<PeriodValue> {
        qs.iter().map(|(p, q)| PeriodValue::new(*p, *q)).collect()
    }

    #[test]
    fn test_row_total_ignores_non_finite() {
        let agg = VolumeAggregator::new();
        let entries = values(&[(Period::Jan, 10.0), (Period::Feb, f64::NAN), (Period::Mar, 2.5)]);
        assert_eq!(agg.row_total(&entries), 12.5);
    }

    #[test]
    fn test_row_total_raw_zero_fill() {
        let agg = VolumeAggregator::new();
        let raw = [
            (Period::Jan, "10"),
            (Period::Feb, ""),
            (Period::Mar, "x"),
            (Period::Apr, "1.5"),
        ];
        assert_eq!(agg.row_total_raw(&raw), 11.5);
    }

    #[test]
    fn test_to_tons_tagged_unknown_unit_is_identity() {
        let agg = VolumeAggregator::new();
        assert_eq!(agg.to_tons_tagged(40.0, "pallets"), 40.0);
        assert_eq!(agg.to_tons_tagged(1000.0, "cases"), 20.0);
    }

    #[test]
    fn test_utilization_edges() {
        let agg = VolumeAggregator::new();
        assert_eq!(agg.utilization(0.0, 100.0), 0.0);
        assert_eq!(agg.utilization(50.0, 0.0), 0.0);
        assert_eq!(agg.utilization(50.0, -5.0), 0.0);
        assert_eq!(agg.utilization(50.0, f64::NAN), 0.0);
        assert_eq!(agg.utilization(150.0, 100.0), 150.0);
    }
}
