//! 后台用户管理页
//!
//! 用户列表 + 增删改。新增可直接授予管理员身份；编辑走资料
//! 更新端点，身份不可改。当前登录的管理员不能删掉自己。

use crate::api;
use crate::components::admin_layout::AdminLayout;
use crate::components::icons::{PencilIcon, PlusIcon, TrashIcon};
use crate::notify::{Severity, use_notify};
use crate::session::use_session;
use cardeal_shared::{NewUser, UpdateUser, User, remove_by_id};
use leptos::html::Dialog;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let notify = use_notify();
    let session_ctx = use_session();

    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);

    // 弹窗状态：None = 新增，Some(id) = 编辑
    let dialog_ref = NodeRef::<Dialog>::new();
    let (editing_id, set_editing_id) = signal(Option::<i64>::None);
    let (form_name, set_form_name) = signal(String::new());
    let (form_email, set_form_email) = signal(String::new());
    let (form_password, set_form_password) = signal(String::new());
    let (form_is_admin, set_form_is_admin) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(fetched) = api::users::fetch_users().await {
                set_users.set(fetched);
            }
            set_loading.set(false);
        });
    });

    let open_add = move |_| {
        set_editing_id.set(None);
        set_form_name.set(String::new());
        set_form_email.set(String::new());
        set_form_password.set(String::new());
        set_form_is_admin.set(false);
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    let close_dialog = move || {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = form_name.get_untracked();
        let email = form_email.get_untracked();
        let password = form_password.get_untracked();
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            notify.show("Please fill out all the required fields", Severity::Error);
            return;
        }

        match editing_id.get_untracked() {
            None => {
                let data = NewUser {
                    email,
                    password,
                    name,
                    is_admin: form_is_admin.get_untracked(),
                };
                spawn_local(async move {
                    match api::users::create_user(&data).await {
                        Ok(created) => {
                            set_users.update(|list| list.push(created));
                            notify.show("User added", Severity::Success);
                        }
                        Err(e) => {
                            let message =
                                e.server_message().unwrap_or("Create failed").to_string();
                            notify.show(message, Severity::Error);
                        }
                    }
                    close_dialog();
                });
            }
            Some(id) => {
                let data = UpdateUser {
                    email,
                    password,
                    name,
                };
                spawn_local(async move {
                    match api::users::update_user(id, &data).await {
                        Ok(updated) => {
                            // 更新端点回传的是资料视图，身份字段保持本地值
                            set_users.update(|list| {
                                if let Some(slot) = list.iter_mut().find(|u| u.id == updated.id) {
                                    slot.name = updated.name.clone();
                                    slot.email = updated.email.clone();
                                }
                            });
                            notify.show("User updated", Severity::Success);
                        }
                        Err(e) => {
                            let message =
                                e.server_message().unwrap_or("Update failed").to_string();
                            notify.show(message, Severity::Error);
                        }
                    }
                    close_dialog();
                });
            }
        }
    };

    // 当前登录的管理员不能删掉自己
    let current_user_id = Memo::new(move |_| {
        session_ctx
            .state
            .with(|s| s.basic_user_info.as_ref().map(|u| u.id))
    });

    let render_row = move |user: User| {
        let id = user.id;
        let is_self = move || current_user_id.get() == Some(id);
        let open_edit = {
            let user = user.clone();
            move |_| {
                set_editing_id.set(Some(user.id));
                set_form_name.set(user.name.clone());
                set_form_email.set(user.email.clone());
                set_form_password.set(String::new());
                set_form_is_admin.set(user.is_admin);
                if let Some(dialog) = dialog_ref.get() {
                    let _ = dialog.show_modal();
                }
            }
        };
        let on_delete = move |_| {
            spawn_local(async move {
                match api::users::delete_user(id).await {
                    Ok(()) => {
                        set_users.update(|list| remove_by_id(list, id, |u| u.id));
                        notify.show("User deleted", Severity::Success);
                    }
                    Err(e) => {
                        let message = e.server_message().unwrap_or("Delete failed").to_string();
                        notify.show(message, Severity::Error);
                    }
                }
            });
        };
        view! {
            <tr class="hover">
                <td class="font-medium">{user.name.clone()}</td>
                <td>{user.email.clone()}</td>
                <td>
                    {if user.is_admin {
                        view! { <span class="badge badge-neutral">"Admin"</span> }.into_any()
                    } else {
                        view! { <span class="badge badge-ghost">"Customer"</span> }.into_any()
                    }}
                </td>
                <td class="text-right">
                    <button class="btn btn-ghost btn-sm btn-square" on:click=open_edit>
                        <PencilIcon class="h-4 w-4" />
                    </button>
                    <button
                        class="btn btn-ghost btn-sm btn-square text-error"
                        disabled=is_self
                        on:click=on_delete
                    >
                        <TrashIcon class="h-4 w-4" />
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <AdminLayout>
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-3xl font-bold">"Users"</h1>
                <button class="btn btn-primary" on:click=open_add>
                    <PlusIcon class="h-4 w-4" /> "Add user"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || users.get() key=|user| user.id children=render_row />
                        </tbody>
                    </table>
                </div>
            </Show>

            <dialog class="modal" node_ref=dialog_ref>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || if editing_id.get().is_some() { "Edit user" } else { "Add user" }}
                    </h3>
                    <form on:submit=on_save>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Name"</span></label>
                            <input
                                type="text"
                                class="input input-bordered"
                                prop:value=form_name
                                on:input=move |ev| set_form_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Email"</span></label>
                            <input
                                type="email"
                                class="input input-bordered"
                                prop:value=form_email
                                on:input=move |ev| set_form_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Password"</span></label>
                            <input
                                type="password"
                                class="input input-bordered"
                                prop:value=form_password
                                on:input=move |ev| set_form_password.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control mt-2">
                            <label class="label cursor-pointer">
                                <span class="label-text">"Administrator"</span>
                                <input
                                    type="checkbox"
                                    class="checkbox"
                                    prop:checked=form_is_admin
                                    disabled=move || editing_id.get().is_some()
                                    on:change=move |ev| set_form_is_admin.set(event_target_checked(&ev))
                                />
                            </label>
                        </div>
                        <div class="modal-action">
                            <button type="button" class="btn btn-ghost" on:click=move |_| close_dialog()>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary">"Save"</button>
                        </div>
                    </form>
                </div>
            </dialog>
        </AdminLayout>
    }
}
