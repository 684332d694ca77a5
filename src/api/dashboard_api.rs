// ==========================================
// 产量与产能规划 - 驾驶舱 API
// ==========================================
// 职责: 基地总览 (状态/风险分级) 与汇总视图
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::site::Site;
use crate::domain::types::{Region, RiskTier, SiteStatus};
use crate::engine::consolidation::{ConsolidationEngine, ConsolidationView, PlannedVolumeProvider};
use crate::engine::risk::RiskAssessor;
use crate::repository::site_repo::SiteRepository;

// ==========================================
// SiteOverview - 基地总览行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteOverview {
    pub id: String,
    pub name: String,
    pub location: String,
    pub region: Region,
    pub products: String,
    pub status: SiteStatus,
    pub water_risk: u8,
    pub risk_tier: RiskTier,
    pub risk_label: String,           // 规范标签 ("Low"/"Medium"/"High")
    pub risk_label_localized: String, // 当前语言标签
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================
pub struct DashboardApi {
    site_repo: Arc<SiteRepository>,
    assessor: RiskAssessor,
    consolidation: ConsolidationEngine,
}

impl DashboardApi {
    pub fn new(site_repo: Arc<SiteRepository>) -> Self {
        Self {
            site_repo,
            assessor: RiskAssessor::new(),
            consolidation: ConsolidationEngine::new(),
        }
    }

    fn overview(&self, site: &Site) -> SiteOverview {
        let tier = self.assessor.risk_tier(site.water_risk);
        SiteOverview {
            id: site.id.clone(),
            name: site.name.clone(),
            location: site.location.clone(),
            region: site.region,
            products: site.products.clone(),
            status: site.status,
            water_risk: site.water_risk,
            risk_tier: tier,
            risk_label: tier.as_str().to_string(),
            risk_label_localized: tier.localized_label(),
        }
    }

    /// 全部基地总览
    pub fn list_site_overview(&self) -> Vec<SiteOverview> {
        self.site_repo
            .list()
            .iter()
            .map(|s| self.overview(s))
            .collect()
    }

    pub fn list_by_region(&self, region: Region) -> Vec<SiteOverview> {
        self.site_repo
            .list_by_region(region)
            .into_iter()
            .map(|s| self.overview(s))
            .collect()
    }

    pub fn list_by_status(&self, status: SiteStatus) -> Vec<SiteOverview> {
        self.site_repo
            .list_by_status(status)
            .into_iter()
            .map(|s| self.overview(s))
            .collect()
    }

    /// 单基地详情
    pub fn get_site(&self, site_id: &str) -> ApiResult<SiteOverview> {
        self.site_repo
            .find_by_id(site_id)
            .map(|s| self.overview(s))
            .ok_or_else(|| ApiError::NotFound(format!("基地(id={})不存在", site_id)))
    }

    /// 汇总视图 (计划量来自注入的数据源)
    pub fn consolidation_view(&self, provider: &dyn PlannedVolumeProvider) -> ConsolidationView {
        self.consolidation.build_view(self.site_repo.list(), provider)
    }
}
