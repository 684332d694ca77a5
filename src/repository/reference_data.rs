// ==========================================
// 产量与产能规划 - 参考数据
// ==========================================
// 职责: 基地清单 + SKU 目录 的加载与校验
// 来源: 内置种子数据 / JSON 文件
// ==========================================

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::adjustment::AdjustmentRecord;
use crate::domain::site::Site;
use crate::domain::types::{
    AdjustmentReason, Frequency, Period, Region, SiteStatus, UnitOfMeasure,
};
use crate::domain::volume::VolumeRow;
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// ReferenceData - 参考数据集
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    pub sites: Vec<Site>,
    pub skus: Vec<String>,
}

impl ReferenceData {
    /// 内置种子数据 (10 个基地, 10 个 SKU)
    pub fn seed() -> Self {
        // 种子表按行对齐,保持一基地一行
        #[rustfmt::skip]
        let sites = vec![
            seed_site("cali", "Cali Plant", "Colombia", Region::Latam, "Toothpaste, Mouthwash", SiteStatus::Submitted, 3),
            seed_site("sao-bernardo", "São Bernardo", "Brazil", Region::Latam, "Toothpaste, Toothbrush", SiteStatus::Pending, 4),
            seed_site("morristown", "Morristown", "USA", Region::Na, "Premium Oral Care", SiteStatus::Submitted, 2),
            seed_site("anzio", "Anzio", "Italy", Region::Emea, "Toothpaste EU", SiteStatus::NeedsReview, 2),
            seed_site("guangzhou", "Guangzhou", "China", Region::Apac, "Toothpaste APAC", SiteStatus::Pending, 5),
            seed_site("mexico-city", "Mexico City", "Mexico", Region::Latam, "Toothpaste LATAM", SiteStatus::Submitted, 4),
            seed_site("gebze", "Gebze", "Turkey", Region::Emea, "Toothpaste EMEA", SiteStatus::Pending, 3),
            seed_site("mumbai", "Mumbai", "India", Region::Apac, "Toothpaste, Mouthwash", SiteStatus::Submitted, 5),
            seed_site("warsaw", "Warsaw", "Poland", Region::Emea, "Toothpaste EU", SiteStatus::Pending, 2),
            seed_site("bangkok", "Bangkok", "Thailand", Region::Apac, "Oral Care APAC", SiteStatus::NeedsReview, 3),
        ];

        let skus = [
            "Colgate Total",
            "Max Fresh",
            "Sensitive",
            "elmex",
            "meridol",
            "Optic White",
            "Kids",
            "Natural Extracts",
            "Triple Action",
            "Total Advanced",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self { sites, skus }
    }

    /// 从 JSON 文件加载
    pub fn from_json_file(path: &Path) -> RepositoryResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::ReferenceDataReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;
        let data: ReferenceData = serde_json::from_str(&raw)?;
        data.validate()?;

        tracing::info!(
            path = %path.display(),
            sites = data.sites.len(),
            skus = data.skus.len(),
            "参考数据加载完成"
        );
        Ok(data)
    }

    /// 校验: 基地ID唯一、风险评分合法、SKU 目录非空且唯一
    pub fn validate(&self) -> RepositoryResult<()> {
        let mut seen = HashSet::new();
        for site in &self.sites {
            if site.id.trim().is_empty() {
                return Err(RepositoryError::FieldValueError {
                    field: "id".to_string(),
                    message: format!("基地ID为空 (name={})", site.name),
                });
            }
            if !seen.insert(site.id.as_str()) {
                return Err(RepositoryError::DuplicateId {
                    entity: "Site".to_string(),
                    id: site.id.clone(),
                });
            }
            if !site.has_valid_water_risk() {
                return Err(RepositoryError::FieldValueError {
                    field: "waterRisk".to_string(),
                    message: format!(
                        "基地{}的风险评分{}超出范围[1, 5]",
                        site.id, site.water_risk
                    ),
                });
            }
        }

        if self.skus.is_empty() {
            return Err(RepositoryError::ValidationError("SKU目录为空".to_string()));
        }
        let mut seen_skus = HashSet::new();
        for sku in &self.skus {
            if !seen_skus.insert(sku.as_str()) {
                return Err(RepositoryError::DuplicateId {
                    entity: "Sku".to_string(),
                    id: sku.clone(),
                });
            }
        }
        Ok(())
    }
}

fn seed_site(
    id: &str,
    name: &str,
    location: &str,
    region: Region,
    products: &str,
    status: SiteStatus,
    water_risk: u8,
) -> Site {
    Site {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        region,
        products: products.to_string(),
        status,
        water_risk,
    }
}

/// 种子月度产量 (cali: Colgate Total 42..53 吨, Max Fresh 32..43 吨)
pub fn seed_monthly_volumes() -> Vec<(String, Vec<VolumeRow>)> {
    let ramp = |start: f64| -> Vec<(Period, f64)> {
        Period::MONTHS
            .iter()
            .enumerate()
            .map(|(i, p)| (*p, start + i as f64))
            .collect()
    };

    vec![(
        "cali".to_string(),
        vec![
            VolumeRow::with_values(
                "Colgate Total",
                UnitOfMeasure::Tons,
                Frequency::Monthly,
                &ramp(42.0),
            ),
            VolumeRow::with_values(
                "Max Fresh",
                UnitOfMeasure::Tons,
                Frequency::Monthly,
                &ramp(32.0),
            ),
        ],
    )]
}

/// 种子调整账本 (最新在前)
pub fn seed_adjustments() -> Vec<AdjustmentRecord> {
    vec![
        AdjustmentRecord {
            id: 2,
            site_id: "guangzhou".to_string(),
            sku: "Max Fresh".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap_or_default(),
            reason: AdjustmentReason::CapacityExpansion,
            old_value: 30.0,
            new_value: 35.0,
            requested_by: "Wei Chen".to_string(),
        },
        AdjustmentRecord {
            id: 1,
            site_id: "cali".to_string(),
            sku: "Colgate Total".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            reason: AdjustmentReason::ProductTransfer,
            old_value: 42.0,
            new_value: 45.0,
            requested_by: "Maria Santos".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_seed_is_valid() {
        let data = ReferenceData::seed();
        assert_eq!(data.sites.len(), 10);
        assert_eq!(data.skus.len(), 10);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_duplicate_site_rejected() {
        let mut data = ReferenceData::seed();
        let dup = data.sites[0].clone();
        data.sites.push(dup);
        assert!(matches!(
            data.validate(),
            Err(RepositoryError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_water_risk_out_of_range_rejected() {
        let mut data = ReferenceData::seed();
        data.sites[2].water_risk = 6;
        assert!(matches!(
            data.validate(),
            Err(RepositoryError::FieldValueError { .. })
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&ReferenceData::seed()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let data = ReferenceData::from_json_file(file.path()).unwrap();
        assert_eq!(data, ReferenceData::seed());
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = ReferenceData::from_json_file(Path::new("/nonexistent/reference.json"));
        assert!(matches!(
            err,
            Err(RepositoryError::ReferenceDataReadError { .. })
        ));
    }

    #[test]
    fn test_seed_monthly_volumes() {
        let seeds = seed_monthly_volumes();
        let (site_id, rows) = &seeds[0];
        assert_eq!(site_id, "cali");
        assert_eq!(rows[0].value(Period::Jan), Some(42.0));
        assert_eq!(rows[0].value(Period::Dec), Some(53.0));
        assert_eq!(rows[1].value(Period::Dec), Some(43.0));
    }
}
