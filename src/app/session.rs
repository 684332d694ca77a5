// ==========================================
// 产量与产能规划 - 会话上下文
// ==========================================
// 职责: 登录/登出生命周期,持有当前会话
// 红线: 仅与配置中的凭据做比对,不是真实鉴权
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::config::LoginConfig;

/// 当前会话
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: Uuid,
    pub username: String,
    pub started_at: DateTime<Utc>,
}

/// 会话上下文 (由调用进程持有)
#[derive(Debug, Default)]
pub struct SessionContext {
    credentials: Option<LoginConfig>,
    current: Option<Session>,
}

impl SessionContext {
    pub fn new(credentials: Option<LoginConfig>) -> Self {
        Self {
            credentials,
            current: None,
        }
    }

    /// 登录; 已有会话时被新会话替换
    pub fn login(&mut self, username: &str, password: &str) -> ApiResult<&Session> {
        let matched = self
            .credentials
            .as_ref()
            .map(|c| c.username == username && c.password == password)
            .unwrap_or(false);

        if !matched || username.trim().is_empty() {
            tracing::warn!(username, "登录失败");
            return Err(ApiError::InvalidCredentials);
        }

        let session = Session {
            session_id: Uuid::new_v4(),
            username: username.to_string(),
            started_at: Utc::now(),
        };
        tracing::info!(username, session_id = %session.session_id, "登录成功");
        let session = self.current.insert(session);
        Ok(&*session)
    }

    pub fn logout(&mut self) -> ApiResult<Session> {
        let session = self.current.take().ok_or(ApiError::NoActiveSession)?;
        tracing::info!(username = %session.username, session_id = %session.session_id, "已登出");
        Ok(session)
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// 当前用户名 (调整单默认申请人)
    pub fn username(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.username.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Option<LoginConfig> {
        Some(LoginConfig {
            username: "planner".to_string(),
            password: "secret".to_string(),
        })
    }

    #[test]
    fn test_login_logout_lifecycle() {
        let mut ctx = SessionContext::new(credentials());
        assert!(!ctx.is_authenticated());

        let session_id = ctx.login("planner", "secret").unwrap().session_id;
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.username(), Some("planner"));

        let ended = ctx.logout().unwrap();
        assert_eq!(ended.session_id, session_id);
        assert!(ctx.current().is_none());
        assert!(matches!(ctx.logout(), Err(ApiError::NoActiveSession)));
    }

    #[test]
    fn test_login_rejected() {
        let mut ctx = SessionContext::new(credentials());
        assert!(matches!(
            ctx.login("planner", "wrong"),
            Err(ApiError::InvalidCredentials)
        ));
        assert!(!ctx.is_authenticated());

        // 未配置凭据时拒绝所有登录
        let mut open = SessionContext::new(None);
        assert!(matches!(open.login("", ""), Err(ApiError::InvalidCredentials)));
    }
}
