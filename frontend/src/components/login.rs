//! 登录页
//!
//! 提交后派发会话登录动作；登录成功认证信号翻转，
//! 路由服务自动把停留在本页的用户重定向到首页。

use crate::components::icons::LockIcon;
use crate::session::{self, SessionStatus, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use cardeal_shared::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_ctx = use_session();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let loading = Memo::new(move |_| {
        session_ctx.state.with(|s| s.status == SessionStatus::Loading)
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let data = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        spawn_local(async move { session::login(session_ctx, data).await });
    };

    let go_register = move |_| navigate(AppRoute::Register);

    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-96 bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title justify-center">
                        <LockIcon class="h-5 w-5" /> "Sign in"
                    </h2>
                    <form on:submit=on_submit>
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
                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                                {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                            </button>
                        </div>
                    </form>
                    <p class="text-center text-sm mt-2">
                        "No account yet? "
                        <a class="link link-primary" on:click=go_register>"Register"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
