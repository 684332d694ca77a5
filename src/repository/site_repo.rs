// ==========================================
// 产量与产能规划 - 基地/SKU 仓储 (内存)
// ==========================================
// 职责: 基地查询、SKU 目录查询
// 红线: 查不到返回 None,由调用方决定如何呈现
// ==========================================

use crate::domain::site::Site;
use crate::domain::types::{Region, SiteStatus};
use crate::repository::reference_data::ReferenceData;

// ==========================================
// SiteRepository - 基地仓储
// ==========================================
#[derive(Debug, Clone)]
pub struct SiteRepository {
    sites: Vec<Site>,
}

impl SiteRepository {
    pub fn new(sites: Vec<Site>) -> Self {
        Self { sites }
    }

    pub fn from_reference(data: &ReferenceData) -> Self {
        Self::new(data.sites.clone())
    }

    pub fn list(&self) -> &[Site] {
        &self.sites
    }

    pub fn find_by_id(&self, site_id: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.id == site_id)
    }

    pub fn exists(&self, site_id: &str) -> bool {
        self.find_by_id(site_id).is_some()
    }

    pub fn list_by_region(&self, region: Region) -> Vec<&Site> {
        self.sites.iter().filter(|s| s.region == region).collect()
    }

    pub fn list_by_status(&self, status: SiteStatus) -> Vec<&Site> {
        self.sites.iter().filter(|s| s.status == status).collect()
    }

    /// 展示名称; 查不到时回退为原始ID
    pub fn site_name_or_id(&self, site_id: &str) -> String {
        self.find_by_id(site_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| site_id.to_string())
    }
}

// ==========================================
// SkuCatalog - SKU 目录
// ==========================================
#[derive(Debug, Clone)]
pub struct SkuCatalog {
    skus: Vec<String>,
}

impl SkuCatalog {
    pub fn new(skus: Vec<String>) -> Self {
        Self { skus }
    }

    pub fn from_reference(data: &ReferenceData) -> Self {
        Self::new(data.skus.clone())
    }

    pub fn list(&self) -> &[String] {
        &self.skus
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.skus.iter().any(|s| s == sku)
    }

    /// 目录首个 SKU (新行默认值)
    pub fn first(&self) -> Option<&str> {
        self.skus.first().map(String::as_str)
    }
}
