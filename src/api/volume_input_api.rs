// ==========================================
// 产量与产能规划 - 基地产量录入 API
// ==========================================
// 职责: 维护各基地的录入表 (行增删/单元格写入/频率切换) 并输出合计
// 红线: 合计每次调用时重新计算,不保存派生值
// ==========================================

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::config::PlanningConfig;
use crate::domain::capacity::{CapacityConstraint, CapacityRow};
use crate::domain::types::{Frequency, Period, UnitOfMeasure};
use crate::domain::volume::{PeriodValue, VolumeRow, VolumeTable};
use crate::engine::aggregator::VolumeAggregator;
use crate::engine::risk::{RiskAssessor, SiteRiskAssessment};
use crate::i18n;
use crate::repository::site_repo::{SiteRepository, SkuCatalog};

// ==========================================
// SiteVolumeSummary - 录入表汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteVolumeSummary {
    pub site_id: String,
    pub site_name: String,
    pub frequency: Frequency,
    pub rows: Vec<CapacityRow>,
    pub over_capacity_rows: Vec<String>, // 利用率超过 100% 的行ID
    pub period_totals: Vec<PeriodValue>, // 列合计 (吨)
    pub grand_total_t: f64,              // 折吨总量
    pub risk: SiteRiskAssessment,
    pub alert_message: Option<String>,   // 本地化告警文案
}

// ==========================================
// VolumeInputApi - 基地产量录入 API
// ==========================================
pub struct VolumeInputApi {
    site_repo: Arc<SiteRepository>,
    sku_catalog: Arc<SkuCatalog>,
    tables: HashMap<String, VolumeTable>,
    max_sku_rows: usize,
    default_frequency: Frequency,
    aggregator: VolumeAggregator,
    assessor: RiskAssessor,
}

impl VolumeInputApi {
    pub fn new(
        site_repo: Arc<SiteRepository>,
        sku_catalog: Arc<SkuCatalog>,
        config: &PlanningConfig,
    ) -> Self {
        Self {
            site_repo,
            sku_catalog,
            tables: HashMap::new(),
            max_sku_rows: config.max_sku_rows,
            default_frequency: config.default_frequency,
            aggregator: VolumeAggregator::new(),
            assessor: RiskAssessor::new(),
        }
    }

    /// 导入已有录入行 (如种子数据), 覆盖该基地当前录入表
    pub fn load_rows(&mut self, site_id: &str, rows: Vec<VolumeRow>) -> ApiResult<()> {
        self.ensure_site(site_id)?;
        if let Some(bad) = rows.iter().find(|r| !self.sku_catalog.contains(&r.sku)) {
            return Err(ApiError::InvalidInput(format!("SKU不在目录中: {}", bad.sku)));
        }
        let frequency = rows
            .first()
            .and_then(VolumeRow::frequency)
            .unwrap_or(self.default_frequency);
        let table = VolumeTable::with_rows(site_id, frequency, rows)?;

        tracing::info!(site_id, rows = table.rows().len(), %frequency, "导入录入行");
        self.tables.insert(site_id.to_string(), table);
        Ok(())
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 打开录入表 (不存在时新建一行空表)
    pub fn open_table(&mut self, site_id: &str) -> ApiResult<&VolumeTable> {
        let table = self.table_mut(site_id)?;
        Ok(&*table)
    }

    pub fn table(&self, site_id: &str) -> Option<&VolumeTable> {
        self.tables.get(site_id)
    }

    pub fn tables(&self) -> impl Iterator<Item = &VolumeTable> {
        self.tables.values()
    }

    /// 录入表汇总 (合计/列合计/利用率/告警)
    ///
    /// 只读: 基地尚无录入表时按默认空表计算,不写入
    pub fn summary(&self, site_id: &str) -> ApiResult<SiteVolumeSummary> {
        let site = self
            .site_repo
            .find_by_id(site_id)
            .ok_or_else(|| ApiError::NotFound(format!("基地(id={})不存在", site_id)))?;

        let scratch;
        let table = match self.tables.get(site_id) {
            Some(table) => table,
            None => {
                scratch = VolumeTable::new(site_id, self.default_frequency, &self.default_sku()?);
                &scratch
            }
        };

        let grand_total_t = self.aggregator.consolidated_total(table.rows());
        let risk = self.assessor.assess(site, grand_total_t);
        let alert_message = risk.alert.then(|| {
            let volume = format!("{:.1}", grand_total_t);
            i18n::t_with_args(
                "alert.water_risk",
                &[("site", site.name.as_str()), ("volume", volume.as_str())],
            )
        });

        let rows = self.aggregator.capacity_rows(table.rows());
        let over_capacity_rows = rows
            .iter()
            .filter(|r| r.is_over_capacity())
            .map(|r| r.row_id.clone())
            .collect();

        Ok(SiteVolumeSummary {
            site_id: site.id.clone(),
            site_name: site.name.clone(),
            frequency: table.frequency,
            rows,
            over_capacity_rows,
            period_totals: self.aggregator.period_totals(table.rows(), table.frequency),
            grand_total_t,
            risk,
            alert_message,
        })
    }

    // ==========================================
    // 行操作
    // ==========================================

    /// 新增 SKU 行, 返回新行ID
    pub fn add_sku_row(
        &mut self,
        site_id: &str,
        sku: Option<&str>,
        unit: UnitOfMeasure,
    ) -> ApiResult<String> {
        let sku = self.resolve_sku(sku)?;
        let max_rows = self.max_sku_rows;
        let table = self.table_mut(site_id)?;
        let row_id = table.add_row(&sku, unit, max_rows)?.row_id.clone();

        tracing::debug!(site_id, row_id = %row_id, sku = %sku, "新增录入行");
        Ok(row_id)
    }

    pub fn remove_sku_row(&mut self, site_id: &str, row_id: &str) -> ApiResult<()> {
        let removed = self.table_mut(site_id)?.remove_row(row_id)?;
        tracing::debug!(site_id, row_id, sku = %removed.sku, "删除录入行");
        Ok(())
    }

    pub fn update_sku(&mut self, site_id: &str, row_id: &str, sku: &str) -> ApiResult<()> {
        if !self.sku_catalog.contains(sku) {
            return Err(ApiError::InvalidInput(format!("SKU不在目录中: {}", sku)));
        }
        self.table_mut(site_id)?.set_sku(row_id, sku)?;
        Ok(())
    }

    /// 修改行单位 (仅接受封闭单位集合)
    pub fn update_unit(&mut self, site_id: &str, row_id: &str, unit_tag: &str) -> ApiResult<()> {
        let unit = UnitOfMeasure::from_tag(unit_tag)
            .ok_or_else(|| ApiError::InvalidInput(format!("未知计量单位: {}", unit_tag)))?;
        self.table_mut(site_id)?.set_unit(row_id, unit)?;
        Ok(())
    }

    /// 写入单元格 (补零解析), 返回实际写入值
    pub fn set_volume(
        &mut self,
        site_id: &str,
        row_id: &str,
        period_label: &str,
        raw: &str,
    ) -> ApiResult<f64> {
        let period = Period::from_label(period_label)
            .ok_or_else(|| ApiError::InvalidInput(format!("未知期间: {}", period_label)))?;
        Ok(self.table_mut(site_id)?.set_value(row_id, period, raw)?)
    }

    pub fn set_max_capacity(
        &mut self,
        site_id: &str,
        row_id: &str,
        raw: &str,
    ) -> ApiResult<Option<f64>> {
        Ok(self.table_mut(site_id)?.set_max_capacity(row_id, raw)?)
    }

    pub fn set_notes(&mut self, site_id: &str, notes: &str) -> ApiResult<()> {
        self.table_mut(site_id)?.notes = notes.to_string();
        Ok(())
    }

    // ==========================================
    // 表级操作
    // ==========================================

    /// 切换频率 (清空全部数量), 返回是否发生切换
    pub fn switch_frequency(&mut self, site_id: &str, frequency: Frequency) -> ApiResult<bool> {
        let table = self.table_mut(site_id)?;
        let from = table.frequency;
        let switched = table.switch_frequency(frequency);
        if switched {
            tracing::info!(site_id, %from, to = %frequency, "切换录入频率,已清空录入值");
        }
        Ok(switched)
    }

    /// 重置录入表
    pub fn clear_table(&mut self, site_id: &str) -> ApiResult<()> {
        let first_sku = self.default_sku()?;
        self.table_mut(site_id)?.clear(&first_sku);
        tracing::info!(site_id, "录入表已重置");
        Ok(())
    }

    // ==========================================
    // 内部工具
    // ==========================================

    fn ensure_site(&self, site_id: &str) -> ApiResult<()> {
        if self.site_repo.exists(site_id) {
            Ok(())
        } else {
            Err(ApiError::NotFound(format!("基地(id={})不存在", site_id)))
        }
    }

    fn default_sku(&self) -> ApiResult<String> {
        self.sku_catalog
            .first()
            .map(str::to_string)
            .ok_or_else(|| ApiError::ValidationError("SKU目录为空".to_string()))
    }

    fn resolve_sku(&self, sku: Option<&str>) -> ApiResult<String> {
        match sku {
            Some(s) if self.sku_catalog.contains(s) => Ok(s.to_string()),
            Some(s) => Err(ApiError::InvalidInput(format!("SKU不在目录中: {}", s))),
            None => self.default_sku(),
        }
    }

    fn table_mut(&mut self, site_id: &str) -> ApiResult<&mut VolumeTable> {
        self.ensure_site(site_id)?;
        let first_sku = self.default_sku()?;
        let frequency = self.default_frequency;
        Ok(self
            .tables
            .entry(site_id.to_string())
            .or_insert_with(|| VolumeTable::new(site_id, frequency, &first_sku)))
    }
}
