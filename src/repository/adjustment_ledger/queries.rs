use super::AdjustmentLedger;
use crate::domain::adjustment::{AdjustmentRecord, LedgerSummary};
use crate::domain::types::AdjustmentDirection;

// ==========================================
// 查询操作 (读时计算,不缓存)
// ==========================================
impl AdjustmentLedger {
    /// 全部记录 (最新在前)
    pub fn list(&self) -> &[AdjustmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_id(&self, id: u64) -> Option<&AdjustmentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn list_by_site(&self, site_id: &str) -> Vec<&AdjustmentRecord> {
        self.records.iter().filter(|r| r.site_id == site_id).collect()
    }

    pub fn count_by_direction(&self, direction: AdjustmentDirection) -> usize {
        self.records
            .iter()
            .filter(|r| r.direction() == direction)
            .count()
    }

    pub fn count_increases(&self) -> usize {
        self.count_by_direction(AdjustmentDirection::Increase)
    }

    pub fn count_decreases(&self) -> usize {
        self.count_by_direction(AdjustmentDirection::Decrease)
    }

    /// 账本汇总
    pub fn summary(&self) -> LedgerSummary {
        self.records
            .iter()
            .fold(LedgerSummary::default(), |mut acc, r| {
                acc.total += 1;
                match r.direction() {
                    AdjustmentDirection::Increase => acc.increases += 1,
                    AdjustmentDirection::Decrease => acc.decreases += 1,
                    AdjustmentDirection::Unchanged => acc.unchanged += 1,
                }
                acc.net_delta += r.delta();
                acc
            })
    }
}
