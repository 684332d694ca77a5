// ==========================================
// 产量与产能规划 - 产量录入领域模型
// ==========================================
// 职责: 基地 SKU x 期间 的产量录入表 (实时编辑工作集)
// 红线: 行的期间集合必须与当前频率完全一致
// 红线: 实时录入采用补零策略 (空值/非数字 -> 0)
// ==========================================

use crate::domain::types::{Frequency, Period, UnitOfMeasure};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 录入表错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VolumeTableError {
    #[error("录入行不存在: row_id={0}")]
    RowNotFound(String),

    #[error("录入行已达上限: max_rows={0}")]
    TooManyRows(usize),

    #[error("至少保留一行录入")]
    LastRow,

    #[error("期间与当前频率不匹配: period={period}, frequency={frequency}")]
    PeriodNotInFrequency { period: Period, frequency: Frequency },

    #[error("录入表不能为空: site_id={0}")]
    EmptyTable(String),
}

/// 解析实时录入的数量
///
/// 空字符串、非数字、非有限值、负数一律视为 0
pub fn parse_quantity(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

// ==========================================
// VolumeEntry - 单条产量记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeEntry {
    pub site_id: String,
    pub sku: String,
    pub period: Period,
    pub quantity: f64,
    pub unit: UnitOfMeasure,
}

// ==========================================
// PeriodValue - (期间, 数量) 对
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodValue {
    pub period: Period,
    pub quantity: f64,
}

impl PeriodValue {
    pub fn new(period: Period, quantity: f64) -> Self {
        Self { period, quantity }
    }
}

// ==========================================
// VolumeRow - 单 SKU 录入行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRow {
    pub row_id: String,
    pub sku: String,
    pub unit: UnitOfMeasure,
    pub values: Vec<PeriodValue>,      // 按日历顺序,覆盖当前频率全部期间
    pub max_capacity: Option<f64>,     // 申报最大产能 (与 unit 同单位)
}

impl VolumeRow {
    /// 创建空行 (当前频率全部期间置 0)
    pub fn empty(sku: &str, unit: UnitOfMeasure, frequency: Frequency) -> Self {
        Self {
            row_id: Uuid::new_v4().to_string(),
            sku: sku.to_string(),
            unit,
            values: zeroed(frequency),
            max_capacity: None,
        }
    }

    /// 以给定数量创建行; 未给出的期间补 0, 不属于该频率的期间被丢弃
    pub fn with_values(
        sku: &str,
        unit: UnitOfMeasure,
        frequency: Frequency,
        quantities: &[(Period, f64)],
    ) -> Self {
        let mut row = Self::empty(sku, unit, frequency);
        for (period, quantity) in quantities {
            if let Some(slot) = row.values.iter_mut().find(|v| v.period == *period) {
                slot.quantity = if quantity.is_finite() && *quantity > 0.0 {
                    *quantity
                } else {
                    0.0
                };
            }
        }
        row
    }

    /// 读取某期间数量; 期间不在本行时返回 None
    pub fn value(&self, period: Period) -> Option<f64> {
        self.values
            .iter()
            .find(|v| v.period == period)
            .map(|v| v.quantity)
    }

    /// 行所属频率 (由首个期间判定)
    pub fn frequency(&self) -> Option<Frequency> {
        self.values.first().map(|v| v.period.frequency())
    }

    fn matches_frequency(&self, frequency: Frequency) -> bool {
        let periods: Vec<Period> = self.values.iter().map(|v| v.period).collect();
        periods.as_slice() == frequency.periods()
    }
}

fn zeroed(frequency: Frequency) -> Vec<PeriodValue> {
    frequency
        .periods()
        .iter()
        .map(|p| PeriodValue::new(*p, 0.0))
        .collect()
}

// ==========================================
// VolumeTable - 基地产量录入表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeTable {
    pub site_id: String,
    pub frequency: Frequency,
    rows: Vec<VolumeRow>,
    pub notes: String,
}

impl VolumeTable {
    /// 新建录入表,默认一行空行
    pub fn new(site_id: &str, frequency: Frequency, first_sku: &str) -> Self {
        Self {
            site_id: site_id.to_string(),
            frequency,
            rows: vec![VolumeRow::empty(first_sku, UnitOfMeasure::Tons, frequency)],
            notes: String::new(),
        }
    }

    /// 由已有行构建录入表
    ///
    /// 期间集合与 frequency 不一致的行会被拒绝
    pub fn with_rows(
        site_id: &str,
        frequency: Frequency,
        rows: Vec<VolumeRow>,
    ) -> Result<Self, VolumeTableError> {
        if rows.is_empty() {
            return Err(VolumeTableError::EmptyTable(site_id.to_string()));
        }
        if let Some(bad) = rows.iter().find(|r| !r.matches_frequency(frequency)) {
            let period = bad
                .values
                .iter()
                .map(|v| v.period)
                .find(|p| p.frequency() != frequency)
                .unwrap_or(frequency.periods()[0]);
            return Err(VolumeTableError::PeriodNotInFrequency { period, frequency });
        }

        Ok(Self {
            site_id: site_id.to_string(),
            frequency,
            rows,
            notes: String::new(),
        })
    }

    pub fn rows(&self) -> &[VolumeRow] {
        &self.rows
    }

    pub fn row(&self, row_id: &str) -> Option<&VolumeRow> {
        self.rows.iter().find(|r| r.row_id == row_id)
    }

    fn row_mut(&mut self, row_id: &str) -> Result<&mut VolumeRow, VolumeTableError> {
        self.rows
            .iter_mut()
            .find(|r| r.row_id == row_id)
            .ok_or_else(|| VolumeTableError::RowNotFound(row_id.to_string()))
    }

    /// 新增一行
    pub fn add_row(
        &mut self,
        sku: &str,
        unit: UnitOfMeasure,
        max_rows: usize,
    ) -> Result<&VolumeRow, VolumeTableError> {
        if self.rows.len() >= max_rows {
            return Err(VolumeTableError::TooManyRows(max_rows));
        }
        self.rows.push(VolumeRow::empty(sku, unit, self.frequency));
        let idx = self.rows.len() - 1;
        Ok(&self.rows[idx])
    }

    /// 删除一行 (最后一行不可删除)
    pub fn remove_row(&mut self, row_id: &str) -> Result<VolumeRow, VolumeTableError> {
        let idx = self
            .rows
            .iter()
            .position(|r| r.row_id == row_id)
            .ok_or_else(|| VolumeTableError::RowNotFound(row_id.to_string()))?;
        if self.rows.len() <= 1 {
            return Err(VolumeTableError::LastRow);
        }
        Ok(self.rows.remove(idx))
    }

    pub fn set_sku(&mut self, row_id: &str, sku: &str) -> Result<(), VolumeTableError> {
        self.row_mut(row_id)?.sku = sku.to_string();
        Ok(())
    }

    pub fn set_unit(&mut self, row_id: &str, unit: UnitOfMeasure) -> Result<(), VolumeTableError> {
        self.row_mut(row_id)?.unit = unit;
        Ok(())
    }

    /// 写入单元格 (补零解析), 返回实际写入的数量
    pub fn set_value(
        &mut self,
        row_id: &str,
        period: Period,
        raw: &str,
    ) -> Result<f64, VolumeTableError> {
        let frequency = self.frequency;
        if period.frequency() != frequency {
            return Err(VolumeTableError::PeriodNotInFrequency { period, frequency });
        }

        let quantity = parse_quantity(raw);
        let row = self.row_mut(row_id)?;
        match row.values.iter_mut().find(|v| v.period == period) {
            Some(slot) => slot.quantity = quantity,
            None => return Err(VolumeTableError::PeriodNotInFrequency { period, frequency }),
        }
        Ok(quantity)
    }

    /// 写入申报最大产能; 空值/非数字/非正数视为未申报
    pub fn set_max_capacity(
        &mut self,
        row_id: &str,
        raw: &str,
    ) -> Result<Option<f64>, VolumeTableError> {
        let parsed = parse_quantity(raw);
        let capacity = if parsed > 0.0 { Some(parsed) } else { None };
        self.row_mut(row_id)?.max_capacity = capacity;
        Ok(capacity)
    }

    /// 切换录入频率
    ///
    /// 频率变化时清空全部数量,期间集合整体替换为新频率; 行/SKU/单位保留。
    /// 返回是否发生了切换。
    pub fn switch_frequency(&mut self, frequency: Frequency) -> bool {
        if self.frequency == frequency {
            return false;
        }
        self.frequency = frequency;
        for row in self.rows.iter_mut() {
            row.values = zeroed(frequency);
        }
        true
    }

    /// 重置为单行空表并清空备注
    pub fn clear(&mut self, first_sku: &str) {
        self.rows = vec![VolumeRow::empty(first_sku, UnitOfMeasure::Tons, self.frequency)];
        self.notes.clear();
    }
}
