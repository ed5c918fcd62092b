//! 全局通知横幅状态
//!
//! 页面校验错误与会话动作失败都通过这里冒泡到顶部横幅，
//! 3 秒后自动消失。每次展示领取一个递增代号，定时器触发时
//! 核对代号：被新横幅顶替后，旧横幅遗留的定时器直接失效。

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// 通知上下文
#[derive(Clone, Copy)]
pub struct NotifyContext {
    pub current: ReadSignal<Option<Notification>>,
    set_current: WriteSignal<Option<Notification>>,
    /// 最新一次展示的代号
    epoch: ReadSignal<u64>,
    set_epoch: WriteSignal<u64>,
}

impl NotifyContext {
    pub fn new() -> Self {
        let (current, set_current) = signal(Option::<Notification>::None);
        let (epoch, set_epoch) = signal(0u64);
        Self {
            current,
            set_current,
            epoch,
            set_epoch,
        }
    }

    /// 显示横幅并安排自动消失
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let token = self.arm(message.into(), severity);

        let ctx = *self;
        Timeout::new(DISMISS_MS, move || ctx.dismiss_expired(token)).forget();
    }

    /// 顶替当前横幅并领取新的展示代号
    fn arm(&self, message: String, severity: Severity) -> u64 {
        let token = self.epoch.get_untracked() + 1;
        self.set_epoch.set(token);
        self.set_current.set(Some(Notification { message, severity }));
        token
    }

    /// 仅当代号仍是最新时才清除，过期定时器不得误伤新横幅
    fn dismiss_expired(&self, token: u64) {
        if self.epoch.try_get_untracked() == Some(token) {
            self.set_current.set(None);
        }
    }

    pub fn dismiss(&self) {
        self.set_current.set(None);
    }
}

/// 从 Context 获取通知上下文
pub fn use_notify() -> NotifyContext {
    use_context::<NotifyContext>().expect("NotifyContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_banner_replaces_previous() {
        let ctx = NotifyContext::new();
        ctx.arm("first".into(), Severity::Success);
        ctx.arm("second".into(), Severity::Error);
        assert_eq!(
            ctx.current.get_untracked().map(|n| n.message),
            Some("second".into())
        );
    }

    #[test]
    fn stale_timer_does_not_dismiss_newer_banner() {
        let ctx = NotifyContext::new();
        let first = ctx.arm("first".into(), Severity::Error);
        let second = ctx.arm("second".into(), Severity::Success);

        // 第一条的定时器在第二条展示之后才触发
        ctx.dismiss_expired(first);
        assert_eq!(
            ctx.current.get_untracked().map(|n| n.message),
            Some("second".into())
        );

        // 最新的定时器正常清除
        ctx.dismiss_expired(second);
        assert_eq!(ctx.current.get_untracked(), None);
    }

    #[test]
    fn manual_dismiss_clears_immediately() {
        let ctx = NotifyContext::new();
        ctx.arm("gone".into(), Severity::Success);
        ctx.dismiss();
        assert_eq!(ctx.current.get_untracked(), None);
    }
}
