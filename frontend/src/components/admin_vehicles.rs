//! 后台车型管理页
//!
//! 某品牌下车型的增删改；新增与编辑共用一个 `<dialog>` 弹窗。
//! 所有改动先等后端确认，再同步本地列表。

use crate::api;
use crate::components::admin_layout::AdminLayout;
use crate::components::icons::{PencilIcon, PlusIcon, TrashIcon};
use crate::notify::{Severity, use_notify};
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use cardeal_shared::{NewVehicle, Vehicle, remove_by_id};
use leptos::html::Dialog;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminVehiclesPage(make: String) -> impl IntoView {
    let notify = use_notify();
    let navigate = StoredValue::new(use_navigate());

    let (vehicles, set_vehicles) = signal(Vec::<Vehicle>::new());
    let (loading, set_loading) = signal(true);

    // 弹窗状态：None = 新增，Some(id) = 编辑
    let dialog_ref = NodeRef::<Dialog>::new();
    let (editing_id, set_editing_id) = signal(Option::<i64>::None);
    let (form_make, set_form_make) = signal(String::new());
    let (form_model, set_form_model) = signal(String::new());

    {
        let make = make.clone();
        Effect::new(move |_| {
            let make = make.clone();
            spawn_local(async move {
                if let Ok(fetched) = api::vehicles::fetch_vehicles_by_make(&make).await {
                    set_vehicles.set(fetched);
                }
                set_loading.set(false);
            });
        });
    }

    let open_add = {
        let make = make.clone();
        move |_| {
            set_editing_id.set(None);
            set_form_make.set(make.clone());
            set_form_model.set(String::new());
            if let Some(dialog) = dialog_ref.get() {
                let _ = dialog.show_modal();
            }
        }
    };

    let close_dialog = move || {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let make = form_make.get_untracked();
        let model = form_model.get_untracked();
        if make.trim().is_empty() || model.trim().is_empty() {
            notify.show("Please fill out all the required fields", Severity::Error);
            return;
        }

        match editing_id.get_untracked() {
            None => {
                spawn_local(async move {
                    match api::vehicles::create_vehicle(&NewVehicle { make, model }).await {
                        Ok(created) => {
                            set_vehicles.update(|list| list.push(created));
                            notify.show("Vehicle added", Severity::Success);
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
                spawn_local(async move {
                    match api::vehicles::update_vehicle(&Vehicle { id, make, model }).await {
                        Ok(updated) => {
                            set_vehicles.update(|list| {
                                if let Some(slot) = list.iter_mut().find(|v| v.id == updated.id) {
                                    *slot = updated;
                                }
                            });
                            notify.show("Vehicle updated", Severity::Success);
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

    let render_row = {
        let make = make.clone();
        move |vehicle: Vehicle| {
            let make = make.clone();
            let id = vehicle.id;
            let open_edit = {
                let vehicle = vehicle.clone();
                move |_| {
                    set_editing_id.set(Some(vehicle.id));
                    set_form_make.set(vehicle.make.clone());
                    set_form_model.set(vehicle.model.clone());
                    if let Some(dialog) = dialog_ref.get() {
                        let _ = dialog.show_modal();
                    }
                }
            };
            let on_delete = move |_| {
                spawn_local(async move {
                    match api::vehicles::delete_vehicle(id).await {
                        Ok(()) => {
                            set_vehicles.update(|list| remove_by_id(list, id, |v| v.id));
                            notify.show("Vehicle deleted", Severity::Success);
                        }
                        Err(e) => {
                            let message =
                                e.server_message().unwrap_or("Delete failed").to_string();
                            notify.show(message, Severity::Error);
                        }
                    }
                });
            };
            view! {
                <tr class="hover">
                    <td
                        class="cursor-pointer font-medium"
                        on:click=move |_| {
                            navigate
                                .with_value(|go| {
                                    go(AppRoute::AdminVehicleSpecifics {
                                        make: make.clone(),
                                        vehicle_id: id,
                                    })
                                })
                        }
                    >
                        {vehicle.model.clone()}
                    </td>
                    <td class="text-right">
                        <button class="btn btn-ghost btn-sm btn-square" on:click=open_edit>
                            <PencilIcon class="h-4 w-4" />
                        </button>
                        <button class="btn btn-ghost btn-sm btn-square text-error" on:click=on_delete>
                            <TrashIcon class="h-4 w-4" />
                        </button>
                    </td>
                </tr>
            }
        }
    };

    view! {
        <AdminLayout>
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-3xl font-bold">{make.clone()} " models"</h1>
                <button class="btn btn-primary" on:click=open_add>
                    <PlusIcon class="h-4 w-4" /> "Add model"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                <p class=move || {
                    if vehicles.with(|v| v.is_empty()) { "opacity-70" } else { "hidden" }
                }>
                    "No models for this make yet."
                </p>
                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Model"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || vehicles.get()
                                key=|vehicle| vehicle.id
                                children=render_row.clone()
                            />
                        </tbody>
                    </table>
                </div>
            </Show>

            <dialog class="modal" node_ref=dialog_ref>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || if editing_id.get().is_some() { "Edit model" } else { "Add model" }}
                    </h3>
                    <form on:submit=on_save>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Make"</span></label>
                            <input
                                type="text"
                                class="input input-bordered"
                                prop:value=form_make
                                on:input=move |ev| set_form_make.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Model"</span></label>
                            <input
                                type="text"
                                class="input input-bordered"
                                prop:value=form_model
                                on:input=move |ev| set_form_model.set(event_target_value(&ev))
                            />
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
