use chrono::NaiveDate;

use crate::domain::adjustment::{AdjustmentDraft, AdjustmentForm, AdjustmentRecord};
use crate::domain::types::AdjustmentReason;
use crate::repository::error::{RepositoryError, RepositoryResult};

/// 严格解析数值 (审计用)
///
/// 空值、非数字、非有限值均返回错误
pub fn parse_strict_number(field: &str, raw: &str) -> RepositoryResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RepositoryError::FieldValueError {
            field: field.to_string(),
            message: "数值为空".to_string(),
        });
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RepositoryError::FieldValueError {
            field: field.to_string(),
            message: format!("无法解析为数值: {}", trimmed),
        }),
    }
}

// ==========================================
// AdjustmentLedger - 产量调整账本
// ==========================================
// 账本由调用方独占持有,不跨视图共享
#[derive(Debug, Clone, Default)]
pub struct AdjustmentLedger {
    pub(super) records: Vec<AdjustmentRecord>,
}

impl AdjustmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有记录初始化 (records 需为最新在前)
    pub fn with_records(records: Vec<AdjustmentRecord>) -> Self {
        Self { records }
    }

    // ==========================================
    // 校验
    // ==========================================

    /// 表单数值/原因校验
    ///
    /// 基地/SKU 引用校验由 API 层完成
    pub fn validate_form(&self, form: &AdjustmentForm) -> RepositoryResult<AdjustmentDraft> {
        let old_value = parse_strict_number("oldValue", &form.old_value)?;
        let new_value = parse_strict_number("newValue", &form.new_value)?;
        let reason = AdjustmentReason::from_label(&form.reason).ok_or_else(|| {
            RepositoryError::FieldValueError {
                field: "reason".to_string(),
                message: format!("未知调整原因: {}", form.reason),
            }
        })?;

        let requested_by = form.requested_by.trim();
        if requested_by.is_empty() {
            return Err(RepositoryError::FieldValueError {
                field: "requestedBy".to_string(),
                message: "申请人为空".to_string(),
            });
        }

        Ok(AdjustmentDraft {
            site_id: form.site_id.trim().to_string(),
            sku: form.sku.trim().to_string(),
            reason,
            old_value,
            new_value,
            requested_by: requested_by.to_string(),
        })
    }

    // ==========================================
    // 写入操作
    // ==========================================

    /// 下一个记录ID (相对账本长度单调递增)
    pub fn next_id(&self) -> u64 {
        let max_id = self.records.iter().map(|r| r.id).max().unwrap_or(0);
        max_id.max(self.records.len() as u64) + 1
    }

    /// 追加调整记录 (插入到最前)
    ///
    /// draft 只能来自 validate_form; 外部统一走 record_form
    pub(crate) fn record(
        &mut self,
        draft: AdjustmentDraft,
        date: NaiveDate,
    ) -> &AdjustmentRecord {
        let record = AdjustmentRecord {
            id: self.next_id(),
            site_id: draft.site_id,
            sku: draft.sku,
            date,
            reason: draft.reason,
            old_value: draft.old_value,
            new_value: draft.new_value,
            requested_by: draft.requested_by,
        };

        tracing::info!(
            id = record.id,
            site_id = %record.site_id,
            sku = %record.sku,
            delta = record.delta(),
            direction = %record.direction(),
            "记录产量调整"
        );

        self.records.insert(0, record);
        &self.records[0]
    }

    /// 校验并追加
    pub fn record_form(
        &mut self,
        form: &AdjustmentForm,
        date: NaiveDate,
    ) -> RepositoryResult<&AdjustmentRecord> {
        let draft = match self.validate_form(form) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!(error = %e, "产量调整被拒绝");
                return Err(e);
            }
        };
        Ok(self.record(draft, date))
    }
}
