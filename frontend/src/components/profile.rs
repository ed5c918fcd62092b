//! 个人资料页
//!
//! 表单从会话里的完整资料预填；保存即派发资料更新动作，
//! 失败横幅由通知层统一冒泡，这里只补成功提示。

use crate::notify::{Severity, use_notify};
use crate::session::{self, SessionStatus, use_session};
use cardeal_shared::UpdateUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::layout::Layout;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session_ctx = use_session();
    let notify = use_notify();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    // 资料到达（或刷新）时预填表单；密码永远留空
    let profile = Memo::new(move |_| session_ctx.state.with(|s| s.user_profile_data.clone()));
    Effect::new(move |_| {
        if let Some(profile) = profile.get() {
            set_name.set(profile.name);
            set_email.set(profile.email);
        }
    });

    let loading = Memo::new(move |_| {
        session_ctx.state.with(|s| s.status == SessionStatus::Loading)
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = profile.get_untracked().map(|p| p.id) else {
            return;
        };
        let data = UpdateUser {
            email: email.get_untracked(),
            password: password.get_untracked(),
            name: name.get_untracked(),
        };
        spawn_local(async move {
            session::update_profile(session_ctx, user_id, data).await;
            let ok = session_ctx
                .state
                .with_untracked(|s| s.status == SessionStatus::Idle);
            if ok {
                notify.show("Profile updated", Severity::Success);
                set_password.set(String::new());
            }
        });
    };

    view! {
        <Layout>
            <div class="card bg-base-100 shadow-xl max-w-lg mx-auto">
                <div class="card-body">
                    <h1 class="card-title text-2xl">"My profile"</h1>
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
                            <label class="label"><span class="label-text">"New password"</span></label>
                            <input
                                type="password"
                                class="input input-bordered"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                                {move || if loading.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Layout>
    }
}
