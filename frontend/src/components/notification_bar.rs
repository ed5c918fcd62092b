//! 全局通知横幅
//!
//! 渲染在应用根部；同时把会话动作失败冒泡成错误横幅。

use crate::notify::{Severity, use_notify};
use crate::session::{SessionStatus, use_session};
use leptos::prelude::*;

#[component]
pub fn NotificationBar() -> impl IntoView {
    let notify = use_notify();
    let session = use_session();

    // 会话层失败 -> 错误横幅
    Effect::new(move |_| {
        let state = session.state.get();
        if state.status == SessionStatus::Failed {
            if let Some(message) = state.error {
                notify.show(message, Severity::Error);
            }
        }
    });

    view! {
        <Show when=move || notify.current.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    match notify.current.get().unwrap().severity {
                        Severity::Error => "alert alert-error shadow-lg",
                        Severity::Success => "alert alert-success shadow-lg",
                    }
                }>
                    <span>{move || notify.current.get().map(|n| n.message).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
