// ==========================================
// 产量与产能规划 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{ApiResult, DashboardApi, PutsTakesApi, VolumeInputApi};
use crate::config::PlanningConfig;
use crate::domain::adjustment::{AdjustmentForm, AdjustmentRecord};
use crate::engine::consolidation::{ConsolidationView, VolumeTableProvider};
use crate::i18n;
use crate::repository::{
    seed_adjustments, seed_monthly_volumes, AdjustmentLedger, ReferenceData, SiteRepository,
    SkuCatalog,
};

use super::session::SessionContext;

/// 应用状态
///
/// 包含所有API实例、会话上下文与运行配置
pub struct AppState {
    pub config: PlanningConfig,

    /// 基地仓储 (各 API 共享)
    pub site_repo: Arc<SiteRepository>,

    /// SKU 目录
    pub sku_catalog: Arc<SkuCatalog>,

    /// 驾驶舱API
    pub dashboard_api: DashboardApi,

    /// 基地产量录入API
    pub volume_input_api: VolumeInputApi,

    /// 产量调整API
    pub puts_takes_api: PutsTakesApi,

    /// 会话上下文
    pub session: SessionContext,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// 参考数据优先取配置中的 JSON 文件,否则使用内置种子数据
    pub fn new(config: PlanningConfig) -> ApiResult<Self> {
        tracing::info!(locale = %config.locale, "初始化AppState");
        i18n::set_locale(&config.locale);

        let reference = match &config.reference_data_path {
            Some(path) => ReferenceData::from_json_file(path)?,
            None => ReferenceData::seed(),
        };

        let site_repo = Arc::new(SiteRepository::from_reference(&reference));
        let sku_catalog = Arc::new(SkuCatalog::from_reference(&reference));

        let dashboard_api = DashboardApi::new(site_repo.clone());

        let mut volume_input_api =
            VolumeInputApi::new(site_repo.clone(), sku_catalog.clone(), &config);

        // 种子数据仅在使用内置参考数据时载入
        let ledger = if config.reference_data_path.is_none() {
            for (site_id, rows) in seed_monthly_volumes() {
                volume_input_api.load_rows(&site_id, rows)?;
            }
            AdjustmentLedger::with_records(seed_adjustments())
        } else {
            AdjustmentLedger::new()
        };

        let puts_takes_api = PutsTakesApi::new(site_repo.clone(), sku_catalog.clone(), ledger);
        let session = SessionContext::new(config.login.clone());

        tracing::info!(
            sites = site_repo.list().len(),
            skus = sku_catalog.list().len(),
            "AppState初始化完成"
        );

        Ok(Self {
            config,
            site_repo,
            sku_catalog,
            dashboard_api,
            volume_input_api,
            puts_takes_api,
            session,
        })
    }

    /// 汇总视图 (计划量取自当前录入表)
    pub fn consolidation_view(&self) -> ConsolidationView {
        let provider = VolumeTableProvider::from_tables(self.volume_input_api.tables());
        self.dashboard_api.consolidation_view(&provider)
    }

    /// 提交调整; 申请人为空时取当前会话用户
    pub fn submit_adjustment(&mut self, form: &AdjustmentForm) -> ApiResult<AdjustmentRecord> {
        let mut form = form.clone();
        if form.requested_by.trim().is_empty() {
            if let Some(username) = self.session.username() {
                form.requested_by = username.to_string();
            }
        }
        self.puts_takes_api.submit(&form)
    }

    /// 当前会话用户的空表单
    pub fn new_adjustment_form(&self) -> AdjustmentForm {
        self.puts_takes_api.empty_form(self.session.username())
    }
}
