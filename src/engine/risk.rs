// ==========================================
// 产量与产能规划 - 水资源风险评估
// ==========================================
// 职责: 水资源风险评分 + 折吨总量 -> 可持续性告警
// 输入: 基地风险评分 (1-5), 折吨总量
// 输出: 告警标志 / 风险分级
// ==========================================
// 红线: 阈值为固定策略常量,不可配置
// ==========================================

use crate::domain::site::Site;
use crate::domain::types::RiskTier;
use serde::{Deserialize, Serialize};

/// 告警风险评分下限 (含)
pub const WATER_RISK_ALERT_CUTOFF: u8 = 4;

/// 告警折吨总量阈值 (严格大于)
pub const VOLUME_ALERT_THRESHOLD_T: f64 = 5000.0;

/// 中风险评分
const MEDIUM_WATER_RISK: u8 = 3;

// ==========================================
// SiteRiskAssessment - 单基地评估结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRiskAssessment {
    pub site_id: String,
    pub water_risk: u8,
    pub tier: RiskTier,
    pub consolidated_volume_t: f64,
    pub alert: bool,
    pub reason: Option<String>,
}

// ==========================================
// RiskAssessor - 风险评估器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct RiskAssessor {
    // 无状态
}

impl RiskAssessor {
    pub fn new() -> Self {
        Self {}
    }

    /// 是否告警: 评分 >= 4 且 折吨总量 > 5000
    pub fn should_alert(&self, water_risk: u8, consolidated_volume_t: f64) -> bool {
        water_risk >= WATER_RISK_ALERT_CUTOFF && consolidated_volume_t > VOLUME_ALERT_THRESHOLD_T
    }

    /// 风险分级: <3 Low, ==3 Medium, >=4 High
    pub fn risk_tier(&self, water_risk: u8) -> RiskTier {
        if water_risk >= WATER_RISK_ALERT_CUTOFF {
            RiskTier::High
        } else if water_risk == MEDIUM_WATER_RISK {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// 风险分级标签 ("Low" / "Medium" / "High")
    pub fn risk_label(&self, water_risk: u8) -> &'static str {
        self.risk_tier(water_risk).as_str()
    }

    /// 评估单个基地
    pub fn assess(&self, site: &Site, consolidated_volume_t: f64) -> SiteRiskAssessment {
        let alert = self.should_alert(site.water_risk, consolidated_volume_t);
        let reason = alert.then(|| {
            format!(
                "水资源风险评分{}/5且计划总量{:.1}吨超过{:.0}吨",
                site.water_risk, consolidated_volume_t, VOLUME_ALERT_THRESHOLD_T
            )
        });

        SiteRiskAssessment {
            site_id: site.id.clone(),
            water_risk: site.water_risk,
            tier: self.risk_tier(site.water_risk),
            consolidated_volume_t,
            alert,
            reason,
        }
    }
}
