//! 后台变体管理页
//!
//! 某车型下可售变体的增删改。数值字段在表单里以文本暂存，
//! 保存前统一解析校验。

use crate::api;
use crate::components::admin_layout::AdminLayout;
use crate::components::icons::{PencilIcon, PlusIcon, TrashIcon};
use crate::notify::{Severity, use_notify};
use cardeal_shared::{NewVehicleSpecific, VehicleSpecific, remove_by_id};
use leptos::html::Dialog;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 解析表单里的数值字段
///
/// 返回 `(year, engine_id, price)`；任一字段缺失或不是数字则报错。
fn parse_numeric_fields(year: &str, engine_id: &str, price: &str) -> Result<(i32, i64, f64), &'static str> {
    let year = year.trim().parse().map_err(|_| "Year must be a number")?;
    let engine_id = engine_id.trim().parse().map_err(|_| "Engine id must be a number")?;
    let price = price.trim().parse().map_err(|_| "Price must be a number")?;
    Ok((year, engine_id, price))
}

#[component]
pub fn AdminVehicleSpecificsPage(make: String, vehicle_id: i64) -> impl IntoView {
    let notify = use_notify();

    let (model, set_model) = signal(String::new());
    let (specifics, set_specifics) = signal(Vec::<VehicleSpecific>::new());
    let (loading, set_loading) = signal(true);

    let dialog_ref = NodeRef::<Dialog>::new();
    let (editing_id, set_editing_id) = signal(Option::<i64>::None);
    let (form_year, set_form_year) = signal(String::new());
    let (form_color, set_form_color) = signal(String::new());
    let (form_engine_id, set_form_engine_id) = signal(String::new());
    let (form_trim, set_form_trim) = signal(String::new());
    let (form_price, set_form_price) = signal(String::new());
    let (form_sold, set_form_sold) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(vehicle) = api::vehicles::fetch_vehicle(vehicle_id).await {
                set_model.set(vehicle.model);
            }
            if let Ok(fetched) = api::vehicle_specifics::fetch_by_vehicle(vehicle_id).await {
                set_specifics.set(fetched);
            }
            set_loading.set(false);
        });
    });

    let open_add = move |_| {
        set_editing_id.set(None);
        set_form_year.set(String::new());
        set_form_color.set(String::new());
        set_form_engine_id.set(String::new());
        set_form_trim.set(String::new());
        set_form_price.set(String::new());
        set_form_sold.set(false);
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
        let color = form_color.get_untracked();
        let trim = form_trim.get_untracked();
        if color.trim().is_empty() || trim.trim().is_empty() {
            notify.show("Please fill out all the required fields", Severity::Error);
            return;
        }
        let parsed = parse_numeric_fields(
            &form_year.get_untracked(),
            &form_engine_id.get_untracked(),
            &form_price.get_untracked(),
        );
        let (year, engine_id, price) = match parsed {
            Ok(values) => values,
            Err(message) => {
                notify.show(message, Severity::Error);
                return;
            }
        };
        let data = NewVehicleSpecific {
            vehicle_id,
            year,
            color,
            engine_id,
            trim,
            price,
            sold: form_sold.get_untracked(),
        };

        match editing_id.get_untracked() {
            None => {
                spawn_local(async move {
                    match api::vehicle_specifics::create_specific(&data).await {
                        Ok(created) => {
                            set_specifics.update(|list| list.push(created));
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
                    match api::vehicle_specifics::update_specific(id, &data).await {
                        Ok(updated) => {
                            set_specifics.update(|list| {
                                if let Some(slot) = list.iter_mut().find(|s| s.id == updated.id) {
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

    let render_row = move |specific: VehicleSpecific| {
        let id = specific.id;
        let open_edit = {
            let specific = specific.clone();
            move |_| {
                set_editing_id.set(Some(specific.id));
                set_form_year.set(specific.year.to_string());
                set_form_color.set(specific.color.clone());
                set_form_engine_id.set(specific.engine_id.to_string());
                set_form_trim.set(specific.trim.clone());
                set_form_price.set(specific.price.to_string());
                set_form_sold.set(specific.sold);
                if let Some(dialog) = dialog_ref.get() {
                    let _ = dialog.show_modal();
                }
            }
        };
        let on_delete = move |_| {
            spawn_local(async move {
                match api::vehicle_specifics::delete_specific(id).await {
                    Ok(()) => {
                        set_specifics.update(|list| remove_by_id(list, id, |s| s.id));
                        notify.show("Vehicle deleted", Severity::Success);
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
                <td>{specific.year}</td>
                <td>{specific.color.clone()}</td>
                <td>{specific.trim.clone()}</td>
                <td>{specific.engine_id}</td>
                <td>{format!("{:.2}", specific.price)}</td>
                <td>
                    {if specific.sold {
                        view! { <span class="badge badge-error">"Sold"</span> }.into_any()
                    } else {
                        view! { <span class="badge badge-success">"Available"</span> }.into_any()
                    }}
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
    };

    view! {
        <AdminLayout>
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-3xl font-bold">
                    {make.clone()} " " {move || model.get()}
                </h1>
                <button class="btn btn-primary" on:click=open_add>
                    <PlusIcon class="h-4 w-4" /> "Add vehicle"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                <p class=move || {
                    if specifics.with(|s| s.is_empty()) { "opacity-70" } else { "hidden" }
                }>
                    "No vehicles for this model yet."
                </p>
                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Year"</th>
                                <th>"Color"</th>
                                <th>"Trim"</th>
                                <th>"Engine"</th>
                                <th>"Price"</th>
                                <th></th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || specifics.get()
                                key=|specific| specific.id
                                children=render_row
                            />
                        </tbody>
                    </table>
                </div>
            </Show>

            <dialog class="modal" node_ref=dialog_ref>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || if editing_id.get().is_some() { "Edit vehicle" } else { "Add vehicle" }}
                    </h3>
                    <form on:submit=on_save>
                        <div class="grid grid-cols-2 gap-2">
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Year"</span></label>
                                <input
                                    type="number"
                                    class="input input-bordered"
                                    prop:value=form_year
                                    on:input=move |ev| set_form_year.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Color"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=form_color
                                    on:input=move |ev| set_form_color.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Trim"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=form_trim
                                    on:input=move |ev| set_form_trim.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Engine id"</span></label>
                                <input
                                    type="number"
                                    class="input input-bordered"
                                    prop:value=form_engine_id
                                    on:input=move |ev| set_form_engine_id.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Price"</span></label>
                                <input
                                    type="number"
                                    step="0.01"
                                    class="input input-bordered"
                                    prop:value=form_price
                                    on:input=move |ev| set_form_price.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control justify-end">
                                <label class="label cursor-pointer">
                                    <span class="label-text">"Sold"</span>
                                    <input
                                        type="checkbox"
                                        class="checkbox"
                                        prop:checked=form_sold
                                        on:change=move |ev| set_form_sold.set(event_target_checked(&ev))
                                    />
                                </label>
                            </div>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_parse() {
        assert_eq!(
            parse_numeric_fields("2024", "3", "19999.5"),
            Ok((2024, 3, 19999.5))
        );
        // 允许首尾空白
        assert_eq!(parse_numeric_fields(" 2024 ", "3", "100"), Ok((2024, 3, 100.0)));
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        assert_eq!(
            parse_numeric_fields("twenty", "3", "100"),
            Err("Year must be a number")
        );
        assert_eq!(
            parse_numeric_fields("2024", "", "100"),
            Err("Engine id must be a number")
        );
        assert_eq!(
            parse_numeric_fields("2024", "3", "1,000"),
            Err("Price must be a number")
        );
    }
}
