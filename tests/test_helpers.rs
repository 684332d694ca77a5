// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的仓储/API 构建、配置文件生成等功能
// ==========================================
#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use site_volume_planning::config::{LoginConfig, PlanningConfig};
use site_volume_planning::domain::adjustment::AdjustmentForm;
use site_volume_planning::repository::{
    seed_adjustments, AdjustmentLedger, ReferenceData, SiteRepository, SkuCatalog,
};
use site_volume_planning::{PutsTakesApi, VolumeInputApi};
use tempfile::NamedTempFile;

/// 种子参考数据构建的仓储
pub fn seed_repositories() -> (Arc<SiteRepository>, Arc<SkuCatalog>) {
    let data = ReferenceData::seed();
    (
        Arc::new(SiteRepository::from_reference(&data)),
        Arc::new(SkuCatalog::from_reference(&data)),
    )
}

/// 默认配置下的录入 API (无预置录入表)
pub fn create_volume_input_api() -> VolumeInputApi {
    let (site_repo, sku_catalog) = seed_repositories();
    VolumeInputApi::new(site_repo, sku_catalog, &PlanningConfig::default())
}

/// 带种子账本的调整 API
pub fn create_puts_takes_api() -> PutsTakesApi {
    let (site_repo, sku_catalog) = seed_repositories();
    PutsTakesApi::new(
        site_repo,
        sku_catalog,
        AdjustmentLedger::with_records(seed_adjustments()),
    )
}

/// 构造调整表单
pub fn adjustment_form(
    site_id: &str,
    sku: &str,
    reason: &str,
    old_value: &str,
    new_value: &str,
    requested_by: &str,
) -> AdjustmentForm {
    AdjustmentForm {
        site_id: site_id.to_string(),
        sku: sku.to_string(),
        reason: reason.to_string(),
        old_value: old_value.to_string(),
        new_value: new_value.to_string(),
        requested_by: requested_by.to_string(),
    }
}

/// 带登录凭据的配置
pub fn config_with_login(username: &str, password: &str) -> PlanningConfig {
    PlanningConfig {
        login: Some(LoginConfig {
            username: username.to_string(),
            password: password.to_string(),
        }),
        ..PlanningConfig::default()
    }
}

/// 写入临时 JSON 文件
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
pub fn write_temp_json(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// 浮点比较
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
