// ==========================================
// 产量与产能规划 - 产量调整 (Puts & Takes) API
// ==========================================
// 职责: 调整表单校验、追加账本、账本列表与汇总
// 红线: 非法数值/无效引用一律拒绝,不写入账本
// ==========================================

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::adjustment::{AdjustmentForm, AdjustmentRecord, LedgerSummary};
use crate::domain::types::{AdjustmentDirection, AdjustmentReason};
use crate::repository::adjustment_ledger::AdjustmentLedger;
use crate::repository::site_repo::{SiteRepository, SkuCatalog};

// ==========================================
// AdjustmentView - 账本展示行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentView {
    pub record: AdjustmentRecord,
    pub site_name: String,
    pub delta: f64,
    pub direction: AdjustmentDirection,
}

// ==========================================
// PutsTakesApi - 产量调整 API
// ==========================================
pub struct PutsTakesApi {
    site_repo: Arc<SiteRepository>,
    sku_catalog: Arc<SkuCatalog>,
    ledger: AdjustmentLedger,
}

impl PutsTakesApi {
    pub fn new(
        site_repo: Arc<SiteRepository>,
        sku_catalog: Arc<SkuCatalog>,
        ledger: AdjustmentLedger,
    ) -> Self {
        Self {
            site_repo,
            sku_catalog,
            ledger,
        }
    }

    /// 空表单 (默认首个基地/首个SKU/首个原因)
    pub fn empty_form(&self, requested_by: Option<&str>) -> AdjustmentForm {
        AdjustmentForm {
            site_id: self
                .site_repo
                .list()
                .first()
                .map(|s| s.id.clone())
                .unwrap_or_default(),
            sku: self.sku_catalog.first().unwrap_or_default().to_string(),
            reason: AdjustmentReason::ProductTransfer.as_str().to_string(),
            old_value: String::new(),
            new_value: String::new(),
            requested_by: requested_by.unwrap_or_default().to_string(),
        }
    }

    // ==========================================
    // 写入
    // ==========================================

    /// 提交调整 (日期取当前 UTC 日期)
    pub fn submit(&mut self, form: &AdjustmentForm) -> ApiResult<AdjustmentRecord> {
        self.submit_on(form, Utc::now().date_naive())
    }

    /// 提交调整 (指定日期)
    pub fn submit_on(
        &mut self,
        form: &AdjustmentForm,
        date: NaiveDate,
    ) -> ApiResult<AdjustmentRecord> {
        let draft = self.ledger.validate_form(form).map_err(|e| {
            tracing::warn!(error = %e, "产量调整被拒绝");
            ApiError::from(e)
        })?;

        if !self.site_repo.exists(&draft.site_id) {
            tracing::warn!(site_id = %draft.site_id, "产量调整被拒绝: 基地不存在");
            return Err(ApiError::NotFound(format!("基地(id={})不存在", draft.site_id)));
        }
        if !self.sku_catalog.contains(&draft.sku) {
            tracing::warn!(sku = %draft.sku, "产量调整被拒绝: SKU不在目录中");
            return Err(ApiError::InvalidInput(format!("SKU不在目录中: {}", draft.sku)));
        }

        Ok(self.ledger.record(draft, date).clone())
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 账本列表 (最新在前), 附带基地名称
    pub fn list(&self) -> Vec<AdjustmentView> {
        self.ledger
            .list()
            .iter()
            .map(|record| AdjustmentView {
                site_name: self.site_repo.site_name_or_id(&record.site_id),
                delta: record.delta(),
                direction: record.direction(),
                record: record.clone(),
            })
            .collect()
    }

    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summary()
    }

    pub fn ledger(&self) -> &AdjustmentLedger {
        &self.ledger
    }
}
