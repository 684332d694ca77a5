// ==========================================
// 产量与产能规划 - 生产基地领域模型
// ==========================================
// 职责: 基地参考数据 (加载后不可变)
// ==========================================

use crate::domain::types::{Region, SiteStatus};
use serde::{Deserialize, Serialize};

/// 水资源风险评分下限
pub const WATER_RISK_MIN: u8 = 1;
/// 水资源风险评分上限
pub const WATER_RISK_MAX: u8 = 5;

// ==========================================
// Site - 生产基地
// ==========================================
// 红线: 核心逻辑只读,不修改基地数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,          // 基地ID (如 "cali")
    pub name: String,        // 展示名称
    pub location: String,    // 所在国家/地区
    pub region: Region,      // 区域
    pub products: String,    // 产品品类 (逗号分隔的自由文本)
    pub status: SiteStatus,  // 提报状态
    pub water_risk: u8,      // 水资源风险评分 (1-5)
}

impl Site {
    /// 拆分产品品类标签
    ///
    /// "Toothpaste, Mouthwash" -> ["Toothpaste", "Mouthwash"]
    pub fn product_categories(&self) -> Vec<&str> {
        self.products
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// 是否生产指定品类
    pub fn produces(&self, category: &str) -> bool {
        self.product_categories().iter().any(|c| *c == category)
    }

    /// 水资源风险评分是否在合法区间内
    pub fn has_valid_water_risk(&self) -> bool {
        (WATER_RISK_MIN..=WATER_RISK_MAX).contains(&self.water_risk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(products: &str, water_risk: u8) -> Site {
        Site {
            id: "cali".to_string(),
            name: "Cali Plant".to_string(),
            location: "Colombia".to_string(),
            region: Region::Latam,
            products: products.to_string(),
            status: SiteStatus::Submitted,
            water_risk,
        }
    }

    #[test]
    fn test_product_categories() {
        let s = site("Toothpaste, Mouthwash ,", 3);
        assert_eq!(s.product_categories(), vec!["Toothpaste", "Mouthwash"]);
        assert!(s.produces("Mouthwash"));
        assert!(!s.produces("Toothbrush"));
    }

    #[test]
    fn test_water_risk_range() {
        assert!(site("Toothpaste", 1).has_valid_water_risk());
        assert!(site("Toothpaste", 5).has_valid_water_risk());
        assert!(!site("Toothpaste", 0).has_valid_water_risk());
        assert!(!site("Toothpaste", 6).has_valid_water_risk());
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{"id":"anzio","name":"Anzio","location":"Italy","region":"EMEA",
            "products":"Toothpaste EU","status":"Needs Review","waterRisk":2}"#;
        let s: Site = serde_json::from_str(json).unwrap();
        assert_eq!(s.region, Region::Emea);
        assert_eq!(s.status, SiteStatus::NeedsReview);
        assert_eq!(s.water_risk, 2);
    }
}
