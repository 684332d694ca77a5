// ==========================================
// 产量与产能规划 - 领域类型定义
// ==========================================
// 职责: 封闭枚举集合 (区域/状态/计量单位/期间/调整原因)
// 红线: 所有期间/单位均为固定形状,不使用字符串键映射
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::i18n;

// ==========================================
// 区域 (Region)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "LATAM")]
    Latam,
    #[serde(rename = "NA")]
    Na,
    #[serde(rename = "EMEA")]
    Emea,
    #[serde(rename = "APAC")]
    Apac,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Latam, Region::Na, Region::Emea, Region::Apac];

    /// 转换为展示/存储字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Latam => "LATAM",
            Region::Na => "NA",
            Region::Emea => "EMEA",
            Region::Apac => "APAC",
        }
    }

    /// 从字符串解析区域 (大小写不敏感)
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "LATAM" => Some(Region::Latam),
            "NA" => Some(Region::Na),
            "EMEA" => Some(Region::Emea),
            "APAC" => Some(Region::Apac),
            _ => None,
        }
    }

    /// 本地化名称
    pub fn localized_label(&self) -> String {
        let key = match self {
            Region::Latam => "region.latam",
            Region::Na => "region.na",
            Region::Emea => "region.emea",
            Region::Apac => "region.apac",
        };
        i18n::t(key)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 基地提报状态 (Site Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteStatus {
    Submitted, // 已提交
    Pending,   // 待提交
    #[serde(rename = "Needs Review")]
    NeedsReview, // 待复核
}

impl SiteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Submitted => "Submitted",
            SiteStatus::Pending => "Pending",
            SiteStatus::NeedsReview => "Needs Review",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Submitted" => Some(SiteStatus::Submitted),
            "Pending" => Some(SiteStatus::Pending),
            "Needs Review" => Some(SiteStatus::NeedsReview),
            _ => None,
        }
    }

    pub fn localized_label(&self) -> String {
        let key = match self {
            SiteStatus::Submitted => "status.submitted",
            SiteStatus::Pending => "status.pending",
            SiteStatus::NeedsReview => "status.needs_review",
        };
        i18n::t(key)
    }
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 计量单位 (Unit of Measure)
// ==========================================
// 折吨系数为固定常量,不可配置
pub const TONS_FACTOR: f64 = 1.0;
pub const CASES_FACTOR: f64 = 0.02;
pub const LITERS_FACTOR: f64 = 0.001;
pub const UNITS_FACTOR: f64 = 0.0005;

/// 未知单位回退系数 (不折算,保留原值)
pub const IDENTITY_FACTOR: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfMeasure {
    Tons,
    Cases,
    Liters,
    Units,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 4] = [
        UnitOfMeasure::Tons,
        UnitOfMeasure::Cases,
        UnitOfMeasure::Liters,
        UnitOfMeasure::Units,
    ];

    /// 折吨系数
    pub fn tons_factor(&self) -> f64 {
        match self {
            UnitOfMeasure::Tons => TONS_FACTOR,
            UnitOfMeasure::Cases => CASES_FACTOR,
            UnitOfMeasure::Liters => LITERS_FACTOR,
            UnitOfMeasure::Units => UNITS_FACTOR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitOfMeasure::Tons => "tons",
            UnitOfMeasure::Cases => "cases",
            UnitOfMeasure::Liters => "liters",
            UnitOfMeasure::Units => "units",
        }
    }

    /// 从单位标签解析; 未知标签返回 None
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "tons" => Some(UnitOfMeasure::Tons),
            "cases" => Some(UnitOfMeasure::Cases),
            "liters" => Some(UnitOfMeasure::Liters),
            "units" => Some(UnitOfMeasure::Units),
            _ => None,
        }
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 录入频率 (Frequency)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Quarterly,
}

impl Frequency {
    /// 当前频率下的期间集合 (按日历顺序)
    pub fn periods(&self) -> &'static [Period] {
        match self {
            Frequency::Monthly => &Period::MONTHS,
            Frequency::Quarterly => &Period::QUARTERS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
        }
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Monthly
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 期间 (Period)
// ==========================================
// 月度 12 期与季度 4 期互斥,同一视图只能出现其中一组
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Period {
    pub const MONTHS: [Period; 12] = [
        Period::Jan,
        Period::Feb,
        Period::Mar,
        Period::Apr,
        Period::May,
        Period::Jun,
        Period::Jul,
        Period::Aug,
        Period::Sep,
        Period::Oct,
        Period::Nov,
        Period::Dec,
    ];

    pub const QUARTERS: [Period; 4] = [Period::Q1, Period::Q2, Period::Q3, Period::Q4];

    /// 期间所属频率
    pub fn frequency(&self) -> Frequency {
        match self {
            Period::Q1 | Period::Q2 | Period::Q3 | Period::Q4 => Frequency::Quarterly,
            _ => Frequency::Monthly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Jan => "Jan",
            Period::Feb => "Feb",
            Period::Mar => "Mar",
            Period::Apr => "Apr",
            Period::May => "May",
            Period::Jun => "Jun",
            Period::Jul => "Jul",
            Period::Aug => "Aug",
            Period::Sep => "Sep",
            Period::Oct => "Oct",
            Period::Nov => "Nov",
            Period::Dec => "Dec",
            Period::Q1 => "Q1",
            Period::Q2 => "Q2",
            Period::Q3 => "Q3",
            Period::Q4 => "Q4",
        }
    }

    /// 从期间标签解析 ("Jan"/"jan"/"Q1"/"q1")
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Period::MONTHS
            .iter()
            .chain(Period::QUARTERS.iter())
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .copied()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 调整原因 (Adjustment Reason)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjustmentReason {
    #[serde(rename = "Product transfer")]
    ProductTransfer,
    #[serde(rename = "Capacity expansion")]
    CapacityExpansion,
    #[serde(rename = "Demand change")]
    DemandChange,
    #[serde(rename = "Supply issue")]
    SupplyIssue,
}

impl AdjustmentReason {
    pub const ALL: [AdjustmentReason; 4] = [
        AdjustmentReason::ProductTransfer,
        AdjustmentReason::CapacityExpansion,
        AdjustmentReason::DemandChange,
        AdjustmentReason::SupplyIssue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentReason::ProductTransfer => "Product transfer",
            AdjustmentReason::CapacityExpansion => "Capacity expansion",
            AdjustmentReason::DemandChange => "Demand change",
            AdjustmentReason::SupplyIssue => "Supply issue",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = s.trim();
        AdjustmentReason::ALL
            .iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(wanted))
            .copied()
    }

    pub fn localized_label(&self) -> String {
        let key = match self {
            AdjustmentReason::ProductTransfer => "reason.product_transfer",
            AdjustmentReason::CapacityExpansion => "reason.capacity_expansion",
            AdjustmentReason::DemandChange => "reason.demand_change",
            AdjustmentReason::SupplyIssue => "reason.supply_issue",
        };
        i18n::t(key)
    }
}

impl fmt::Display for AdjustmentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 调整方向 (Adjustment Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentDirection {
    Increase,  // 增量
    Decrease,  // 减量
    Unchanged, // 不变
}

impl AdjustmentDirection {
    /// 由差值符号得出方向
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            AdjustmentDirection::Increase
        } else if delta < 0.0 {
            AdjustmentDirection::Decrease
        } else {
            AdjustmentDirection::Unchanged
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentDirection::Increase => "increase",
            AdjustmentDirection::Decrease => "decrease",
            AdjustmentDirection::Unchanged => "unchanged",
        }
    }

    pub fn localized_label(&self) -> String {
        let key = match self {
            AdjustmentDirection::Increase => "direction.increase",
            AdjustmentDirection::Decrease => "direction.decrease",
            AdjustmentDirection::Unchanged => "direction.unchanged",
        };
        i18n::t(key)
    }
}

impl fmt::Display for AdjustmentDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 水资源风险分级 (Risk Tier)
// ==========================================
// 顺序: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    pub fn localized_label(&self) -> String {
        let key = match self {
            RiskTier::Low => "risk.low",
            RiskTier::Medium => "risk.medium",
            RiskTier::High => "risk.high",
        };
        i18n::t(key)
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
