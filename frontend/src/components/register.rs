//! 注册页
//!
//! 提交前做本地校验（必填项 / 两次密码一致），校验失败只弹横幅
//! 不发请求；校验通过后派发会话注册动作。

use crate::notify::{Severity, use_notify};
use crate::session::{self, SessionStatus, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use cardeal_shared::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 注册表单本地校验
///
/// 返回 None 表示通过，否则返回横幅文案。
fn validate(name: &str, email: &str, password: &str, confirm: &str) -> Option<&'static str> {
    if name.trim().is_empty()
        || email.trim().is_empty()
        || password.is_empty()
        || confirm.is_empty()
    {
        return Some("Please fill out all the required fields");
    }
    if password != confirm {
        return Some("Passwords not matching");
    }
    None
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session_ctx = use_session();
    let notify = use_notify();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let loading = Memo::new(move |_| {
        session_ctx.state.with(|s| s.status == SessionStatus::Loading)
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        let confirm = confirm.get_untracked();

        if let Some(message) = validate(&name, &email, &password, &confirm) {
            notify.show(message, Severity::Error);
            return;
        }

        let data = RegisterRequest {
            email,
            password,
            name,
        };
        spawn_local(async move { session::register(session_ctx, data).await });
    };

    let go_login = move |_| navigate(AppRoute::Login);

    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-96 bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title justify-center">"Create account"</h2>
                    <form on:submit=on_submit>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Name"</span></label>
                            <input
                                type="text"
                                class="input input-bordered"
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Email"</span></label>
                            <input
                                type="email"
                                class="input input-bordered"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Password"</span></label>
                            <input
                                type="password"
                                class="input input-bordered"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Confirm password"</span></label>
                            <input
                                type="password"
                                class="input input-bordered"
                                prop:value=confirm
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                                {move || if loading.get() { "Registering..." } else { "Register" }}
                            </button>
                        </div>
                    </form>
                    <p class="text-center text-sm mt-2">
                        "Already registered? "
                        <a class="link link-primary" on:click=go_login>"Sign in"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_required() {
        assert_eq!(
            validate("", "a@b.c", "pw", "pw"),
            Some("Please fill out all the required fields")
        );
        assert_eq!(
            validate("Ann", "", "pw", "pw"),
            Some("Please fill out all the required fields")
        );
        assert_eq!(
            validate("Ann", "a@b.c", "", ""),
            Some("Please fill out all the required fields")
        );
        // 只有空白字符的输入同样视为缺失
        assert_eq!(
            validate("   ", "a@b.c", "pw", "pw"),
            Some("Please fill out all the required fields")
        );
    }

    #[test]
    fn passwords_must_match() {
        assert_eq!(
            validate("Ann", "a@b.c", "pw1", "pw2"),
            Some("Passwords not matching")
        );
    }

    #[test]
    fn missing_fields_reported_before_mismatch() {
        assert_eq!(
            validate("", "a@b.c", "pw1", "pw2"),
            Some("Please fill out all the required fields")
        );
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(validate("Ann", "a@b.c", "pw", "pw"), None);
    }
}
