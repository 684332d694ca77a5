// ==========================================
// 产量与产能规划 - 汇总视图引擎
// ==========================================
// 职责: 区域汇总 / 产品品类汇总 / 全局 KPI
// 输入: 基地列表 + 计划量数据源 (注入)
// 输出: ConsolidationView
// ==========================================
// 红线: 计划量必须来自注入的数据源,不允许随机占位
// ==========================================

use std::collections::HashMap;

use crate::domain::site::Site;
use crate::domain::types::Region;
use crate::domain::volume::VolumeTable;
use crate::engine::aggregator::VolumeAggregator;
use crate::engine::risk::WATER_RISK_ALERT_CUTOFF;
use serde::{Deserialize, Serialize};

// ==========================================
// Trait: PlannedVolumeProvider
// ==========================================
// 用途: 汇总视图的计划量数据源
pub trait PlannedVolumeProvider {
    /// 基地计划总量 (吨); 无数据时为 0
    fn planned_volume_t(&self, site_id: &str) -> f64;

    /// 基地产能利用率 (%); 未申报产能时为 None
    fn utilization_pct(&self, site_id: &str) -> Option<f64>;
}

// ==========================================
// StaticVolumeProvider - 显式映射数据源
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct StaticVolumeProvider {
    volumes_t: HashMap<String, f64>,
    utilization_pct: HashMap<String, f64>,
}

impl StaticVolumeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site(mut self, site_id: &str, volume_t: f64, utilization_pct: Option<f64>) -> Self {
        self.insert(site_id, volume_t, utilization_pct);
        self
    }

    pub fn insert(&mut self, site_id: &str, volume_t: f64, utilization_pct: Option<f64>) {
        self.volumes_t.insert(site_id.to_string(), volume_t);
        match utilization_pct {
            Some(pct) => {
                self.utilization_pct.insert(site_id.to_string(), pct);
            }
            None => {
                self.utilization_pct.remove(site_id);
            }
        }
    }
}

impl PlannedVolumeProvider for StaticVolumeProvider {
    fn planned_volume_t(&self, site_id: &str) -> f64 {
        self.volumes_t.get(site_id).copied().unwrap_or(0.0)
    }

    fn utilization_pct(&self, site_id: &str) -> Option<f64> {
        self.utilization_pct.get(site_id).copied()
    }
}

// ==========================================
// VolumeTableProvider - 由基地录入表派生的数据源
// ==========================================
// 每次构造时从录入表快照计算,不跨编辑缓存
#[derive(Debug, Clone, Default)]
pub struct VolumeTableProvider {
    inner: StaticVolumeProvider,
}

impl VolumeTableProvider {
    pub fn from_tables<'a, I>(tables: I) -> Self
    where
        I: IntoIterator<Item = &'a VolumeTable>,
    {
        let aggregator = VolumeAggregator::new();
        let mut inner = StaticVolumeProvider::new();
        for table in tables {
            inner.insert(
                &table.site_id,
                aggregator.consolidated_total(table.rows()),
                aggregator.site_utilization(table.rows()),
            );
        }
        Self { inner }
    }
}

impl PlannedVolumeProvider for VolumeTableProvider {
    fn planned_volume_t(&self, site_id: &str) -> f64 {
        self.inner.planned_volume_t(site_id)
    }

    fn utilization_pct(&self, site_id: &str) -> Option<f64> {
        self.inner.utilization_pct(site_id)
    }
}

// ==========================================
// 输出结构
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRollup {
    pub region: Region,
    pub site_count: usize,
    pub planned_volume_t: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRollup {
    pub product: String,
    pub volume_t: f64,
    pub capacity_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationKpis {
    pub total_sites: usize,
    pub total_volume_t: f64,
    pub avg_capacity_pct: f64,
    pub high_risk_sites: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationView {
    pub regions: Vec<RegionRollup>,
    pub products: Vec<ProductRollup>,
    pub kpis: ConsolidationKpis,
}

/// 产品品类 (按基地出现顺序去重)
pub fn product_categories(sites: &[Site]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for site in sites {
        for category in site.product_categories() {
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
    }
    categories
}

// ==========================================
// ConsolidationEngine - 汇总视图引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolidationEngine {
    // 无状态引擎
}

impl ConsolidationEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 区域汇总 (区域按基地首次出现顺序)
    pub fn region_rollup(
        &self,
        sites: &[Site],
        provider: &dyn PlannedVolumeProvider,
    ) -> Vec<RegionRollup> {
        let mut rollups: Vec<RegionRollup> = Vec::new();
        for site in sites {
            let volume_t = provider.planned_volume_t(&site.id);
            match rollups.iter_mut().find(|r| r.region == site.region) {
                Some(existing) => {
                    existing.site_count += 1;
                    existing.planned_volume_t += volume_t;
                }
                None => rollups.push(RegionRollup {
                    region: site.region,
                    site_count: 1,
                    planned_volume_t: volume_t,
                }),
            }
        }
        rollups
    }

    /// 产品品类汇总
    ///
    /// 品类量 = 生产该品类的基地计划量之和;
    /// 产能% = 这些基地中申报了利用率者的平均值 (无则 0)
    pub fn product_rollup(
        &self,
        sites: &[Site],
        provider: &dyn PlannedVolumeProvider,
    ) -> Vec<ProductRollup> {
        product_categories(sites)
            .into_iter()
            .map(|product| {
                let producing: Vec<&Site> = sites.iter().filter(|s| s.produces(&product)).collect();
                let volume_t: f64 = producing
                    .iter()
                    .map(|s| provider.planned_volume_t(&s.id))
                    .sum();
                let reported: Vec<f64> = producing
                    .iter()
                    .filter_map(|s| provider.utilization_pct(&s.id))
                    .collect();
                let capacity_pct = mean(&reported);

                ProductRollup {
                    product,
                    volume_t,
                    capacity_pct,
                }
            })
            .collect()
    }

    /// 全局 KPI
    pub fn kpis(
        &self,
        sites: &[Site],
        regions: &[RegionRollup],
        products: &[ProductRollup],
    ) -> ConsolidationKpis {
        let capacities: Vec<f64> = products.iter().map(|p| p.capacity_pct).collect();
        ConsolidationKpis {
            total_sites: sites.len(),
            total_volume_t: regions.iter().map(|r| r.planned_volume_t).sum(),
            avg_capacity_pct: mean(&capacities).round(),
            high_risk_sites: sites
                .iter()
                .filter(|s| s.water_risk >= WATER_RISK_ALERT_CUTOFF)
                .count(),
        }
    }

    /// 完整汇总视图
    pub fn build_view(
        &self,
        sites: &[Site],
        provider: &dyn PlannedVolumeProvider,
    ) -> ConsolidationView {
        let regions = self.region_rollup(sites, provider);
        let products = self.product_rollup(sites, provider);
        let kpis = self.kpis(sites, &regions, &products);
        ConsolidationView {
            regions,
            products,
            kpis,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::SiteStatus;

    fn site(id: &str, region: Region, products: &str, water_risk: u8) -> Site {
        Site {
            id: id.to_string(),
            name: id.to_string(),
            location: "X".to_string(),
            region,
            products: products.to_string(),
            status: SiteStatus::Pending,
            water_risk,
        }
    }

    #[test]
    fn test_product_categories_first_seen_order() {
        let sites = vec![
            site("a", Region::Latam, "Toothpaste, Mouthwash", 1),
            site("b", Region::Na, "Toothbrush, Toothpaste", 1),
        ];
        assert_eq!(
            product_categories(&sites),
            vec!["Toothpaste", "Mouthwash", "Toothbrush"]
        );
    }

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[60.0, 90.0]), 75.0);
    }
}
