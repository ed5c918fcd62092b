//! 会话状态管理
//!
//! 整个应用唯一的跨页共享可变状态。状态只通过本模块定义的
//! 动作函数改写（单一写入路径），路由守卫通过派生信号读取。
//!
//! 状态机：任意异步动作派发时 `Idle -> Loading`；成功 `-> Idle`
//! 并替换对应切片；失败 `-> Failed` 并记录错误消息。`Failed`
//! 不是终态，下一次派发会重新进入 `Loading`。并发派发不做协调，
//! 后完成者覆盖共享的 status/error（已知竞态，按原样保留）。

use crate::api::{self, ApiError};
use crate::storage;
use cardeal_shared::{LoginRequest, RegisterRequest, UpdateUser, UserBasicInfo, UserProfileData};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Failed,
}

/// 会话状态
#[derive(Clone, Default, PartialEq)]
pub struct SessionState {
    /// 登录/注册返回并持久化的身份
    pub basic_user_info: Option<UserBasicInfo>,
    /// 按需拉取的完整资料
    pub user_profile_data: Option<UserProfileData>,
    pub status: SessionStatus,
    pub error: Option<String>,
}

impl SessionState {
    /// 动作派发：进入 Loading 并清除上一次错误
    fn begin(&mut self) {
        self.status = SessionStatus::Loading;
        self.error = None;
    }

    /// 动作成功：回到 Idle（切片由调用方替换）
    fn settle(&mut self) {
        self.status = SessionStatus::Idle;
    }

    /// 动作失败：优先采用服务端消息，否则用各动作的兜底文案
    fn fail(&mut self, err: &ApiError, fallback: &str) {
        self.status = SessionStatus::Failed;
        self.error = Some(err.server_message().unwrap_or(fallback).to_string());
    }
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 认证状态信号（注入路由守卫）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.basic_user_info.is_some()))
    }

    /// 管理员信号（注入路由守卫）
    pub fn is_admin_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| {
                s.basic_user_info
                    .as_ref()
                    .map(|u| u.is_admin)
                    .unwrap_or(false)
            })
        })
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 应用启动时从持久化存储恢复身份
pub fn init_session(ctx: &SessionContext) {
    if let Some(user) = storage::load_user() {
        ctx.set_state.update(|s| s.basic_user_info = Some(user));
    }
}

pub async fn login(ctx: SessionContext, data: LoginRequest) {
    ctx.set_state.update(|s| s.begin());
    match api::users::login(&data).await {
        Ok(info) => {
            storage::save_user(&info);
            ctx.set_state.update(|s| {
                s.settle();
                s.basic_user_info = Some(info);
            });
        }
        Err(e) => ctx.set_state.update(|s| s.fail(&e, "Login failed")),
    }
}

pub async fn register(ctx: SessionContext, data: RegisterRequest) {
    ctx.set_state.update(|s| s.begin());
    match api::users::register(&data).await {
        Ok(info) => {
            storage::save_user(&info);
            ctx.set_state.update(|s| {
                s.settle();
                s.basic_user_info = Some(info);
            });
        }
        Err(e) => ctx.set_state.update(|s| s.fail(&e, "Registration failed")),
    }
}

/// 登出成功后清除持久化身份；路由守卫会随认证信号自动重定向
pub async fn logout(ctx: SessionContext) {
    ctx.set_state.update(|s| s.begin());
    match api::users::logout().await {
        Ok(()) => {
            storage::clear_user();
            ctx.set_state.update(|s| {
                s.settle();
                s.basic_user_info = None;
                s.user_profile_data = None;
            });
        }
        Err(e) => ctx.set_state.update(|s| s.fail(&e, "Logout failed")),
    }
}

pub async fn fetch_profile(ctx: SessionContext, user_id: i64) {
    ctx.set_state.update(|s| s.begin());
    match api::users::fetch_user(user_id).await {
        Ok(profile) => ctx.set_state.update(|s| {
            s.settle();
            s.user_profile_data = Some(profile);
        }),
        Err(e) => ctx
            .set_state
            .update(|s| s.fail(&e, "Get user profile data failed")),
    }
}

pub async fn update_profile(ctx: SessionContext, user_id: i64, data: UpdateUser) {
    ctx.set_state.update(|s| s.begin());
    match api::users::update_user(user_id, &data).await {
        Ok(profile) => ctx.set_state.update(|s| {
            s.settle();
            s.user_profile_data = Some(profile);
        }),
        Err(e) => ctx.set_state.update(|s| s.fail(&e, "Update profile failed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_enters_loading_and_clears_error() {
        let mut state = SessionState {
            status: SessionStatus::Failed,
            error: Some("old".into()),
            ..Default::default()
        };
        state.begin();
        assert_eq!(state.status, SessionStatus::Loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn success_returns_to_idle() {
        let mut state = SessionState::default();
        state.begin();
        state.settle();
        assert_eq!(state.status, SessionStatus::Idle);
    }

    #[test]
    fn failure_prefers_server_message() {
        let mut state = SessionState::default();
        state.begin();
        let err = ApiError::Status {
            status: 401,
            message: Some("Wrong credentials".into()),
        };
        state.fail(&err, "Login failed");
        assert_eq!(state.status, SessionStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("Wrong credentials"));
    }

    #[test]
    fn failure_falls_back_to_action_message() {
        let mut state = SessionState::default();
        state.begin();
        state.fail(&ApiError::Network("unreachable".into()), "Login failed");
        assert_eq!(state.error.as_deref(), Some("Login failed"));
    }

    #[test]
    fn failed_is_not_sticky() {
        let mut state = SessionState::default();
        state.begin();
        state.fail(&ApiError::Network("boom".into()), "Logout failed");
        // 下一次派发重新进入 Loading
        state.begin();
        assert_eq!(state.status, SessionStatus::Loading);
        assert_eq!(state.error, None);
    }
}
