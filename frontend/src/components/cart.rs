//! 购物车页
//!
//! 展示当前账单与所购车辆，可选 0-5 年质保（本地报价，
//! 下单时才落库）。下单 = 提交账单 + 质保；取消 = 删除账单。

use crate::api;
use crate::components::layout::Layout;
use crate::notify::{Severity, use_notify};
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use cardeal_shared::{Bill, Vehicle, VehicleSpecific, Warranty};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CartPage() -> impl IntoView {
    let session_ctx = use_session();
    let notify = use_notify();
    let navigate = StoredValue::new(use_navigate());

    let (bill, set_bill) = signal(Option::<Bill>::None);
    let (specific, set_specific) = signal(Option::<VehicleSpecific>::None);
    let (vehicle, set_vehicle) = signal(Option::<Vehicle>::None);
    let (loading, set_loading) = signal(true);
    let (submitting, set_submitting) = signal(false);
    let (years, set_years) = signal(0i32);

    // 按 id 取会话，状态机翻转不会重跑整条拉取链
    let user_id = Memo::new(move |_| {
        session_ctx
            .state
            .with(|s| s.basic_user_info.as_ref().map(|u| u.id))
    });
    Effect::new(move |_| {
        let Some(user_id) = user_id.get() else {
            return;
        };
        spawn_local(async move {
            // 购物车为空时后端返回错误，按空车处理
            if let Ok(fetched) = api::bills::fetch_cart(user_id).await {
                let vehicle_specific_id = fetched.vehicle_specific_id;
                set_bill.set(Some(fetched));
                if let Ok(sp) = api::vehicle_specifics::fetch_specific(vehicle_specific_id).await {
                    let vehicle_id = sp.vehicle_id;
                    set_specific.set(Some(sp));
                    if let Ok(v) = api::vehicles::fetch_vehicle(vehicle_id).await {
                        set_vehicle.set(Some(v));
                    }
                }
            }
            set_loading.set(false);
        });
    });

    // 质保报价随年限与账单日期派生
    let warranty = Memo::new(move |_| {
        bill.get().map(|b| Warranty::quote(years.get(), b.date))
    });
    let total = Memo::new(move |_| {
        let base = bill.get().map(|b| b.price).unwrap_or(0.0);
        let extra = warranty.get().map(|w| w.price).unwrap_or(0.0);
        base + extra
    });

    let on_place_order = move |_| {
        let Some(current_bill) = bill.get_untracked() else {
            return;
        };
        let quote = warranty.get_untracked().unwrap_or_else(Warranty::none);
        set_submitting.set(true);
        spawn_local(async move {
            if let Err(e) = api::bills::place_order(&current_bill).await {
                let message = e.server_message().unwrap_or("Order failed").to_string();
                notify.show(message, Severity::Error);
                set_submitting.set(false);
                return;
            }
            // 质保记录总是随订单落库，0 年也写一条零价记录
            if let Err(e) = api::warranties::create_warranty(&quote).await {
                let message = e
                    .server_message()
                    .unwrap_or("Order placed, but warranty could not be added")
                    .to_string();
                notify.show(message, Severity::Error);
                navigate.with_value(|go| go(AppRoute::Home));
                return;
            }
            notify.show("Order placed", Severity::Success);
            navigate.with_value(|go| go(AppRoute::Home));
        });
    };

    let on_cancel = move |_| {
        let Some(current_bill) = bill.get_untracked() else {
            return;
        };
        set_submitting.set(true);
        spawn_local(async move {
            match api::bills::delete_bill(current_bill.id).await {
                Ok(()) => {
                    set_bill.set(None);
                    set_specific.set(None);
                    set_vehicle.set(None);
                    set_years.set(0);
                    notify.show("Order cancelled", Severity::Success);
                }
                Err(e) => {
                    let message = e.server_message().unwrap_or("Cancel failed").to_string();
                    notify.show(message, Severity::Error);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Layout>
            <h1 class="text-3xl font-bold mb-6">"Cart"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                {move || match bill.get() {
                    None => view! { <p class="opacity-70">"Your cart is empty."</p> }.into_any(),
                    Some(b) => {
                        view! {
                            <div class="card bg-base-100 shadow-xl max-w-2xl">
                                <div class="card-body">
                                    <h2 class="card-title">
                                        {move || {
                                            vehicle
                                                .get()
                                                .map(|v| format!("{} {}", v.make, v.model))
                                                .unwrap_or_else(|| "Vehicle".to_string())
                                        }}
                                        {move || {
                                            specific
                                                .get()
                                                .map(|sp| format!(" ({})", sp.year))
                                                .unwrap_or_default()
                                        }}
                                    </h2>
                                    <div class="grid grid-cols-2 gap-2 mt-2">
                                        <span class="font-semibold">"Date"</span>
                                        <span>{b.date.format_ymd()}</span>
                                        <span class="font-semibold">"Vehicle price"</span>
                                        <span>{format!("{:.2}", b.price)}</span>
                                    </div>

                                    <div class="form-control mt-4">
                                        <label class="label">
                                            <span class="label-text">"Warranty (years)"</span>
                                        </label>
                                        <select
                                            class="select select-bordered"
                                            on:change=move |ev| {
                                                set_years
                                                    .set(event_target_value(&ev).parse().unwrap_or(0))
                                            }
                                        >
                                            <option value="0" selected=move || years.get() == 0>"No warranty"</option>
                                            <option value="1" selected=move || years.get() == 1>"1 year"</option>
                                            <option value="2" selected=move || years.get() == 2>"2 years"</option>
                                            <option value="3" selected=move || years.get() == 3>"3 years"</option>
                                            <option value="4" selected=move || years.get() == 4>"4 years"</option>
                                            <option value="5" selected=move || years.get() == 5>"5 years"</option>
                                        </select>
                                    </div>

                                    {move || {
                                        warranty
                                            .get()
                                            .filter(|w| w.years > 0)
                                            .map(|w| {
                                                view! {
                                                    <div class="grid grid-cols-2 gap-2 mt-2">
                                                        <span class="font-semibold">"Warranty price"</span>
                                                        <span>{format!("{:.2}", w.price)}</span>
                                                        <span class="font-semibold">"Covered until"</span>
                                                        <span>
                                                            {w.end_date.map(|d| d.format_ymd()).unwrap_or_default()}
                                                        </span>
                                                    </div>
                                                }
                                            })
                                    }}

                                    <div class="divider"></div>
                                    <div class="flex justify-between items-center">
                                        <span class="text-xl font-semibold">"Total"</span>
                                        <span class="text-2xl font-bold">
                                            {move || format!("{:.2}", total.get())}
                                        </span>
                                    </div>

                                    <div class="card-actions justify-end mt-4">
                                        <button
                                            class="btn btn-ghost"
                                            disabled=move || submitting.get()
                                            on:click=on_cancel
                                        >
                                            "Cancel order"
                                        </button>
                                        <button
                                            class="btn btn-primary"
                                            disabled=move || submitting.get()
                                            on:click=on_place_order
                                        >
                                            "Place order"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use crate::session::{SessionState, SessionStatus};
    use cardeal_shared::UserBasicInfo;
    use leptos::prelude::*;

    fn basic_user(id: i64) -> UserBasicInfo {
        UserBasicInfo {
            id,
            email: "a@b.c".into(),
            password: "pw".into(),
            name: "Ann".into(),
            is_admin: false,
        }
    }

    #[test]
    fn reload_key_tracks_user_id_not_status_churn() {
        let (state, set_state) = signal(SessionState::default());
        let user_id = Memo::new(move |_| {
            state.with(|s| s.basic_user_info.as_ref().map(|u| u.id))
        });
        assert_eq!(user_id.get_untracked(), None);

        set_state.update(|s| s.basic_user_info = Some(basic_user(3)));
        assert_eq!(user_id.get_untracked(), Some(3));

        // 布局的资料拉取等动作翻转状态机，键不变
        set_state.update(|s| s.status = SessionStatus::Loading);
        assert_eq!(user_id.get_untracked(), Some(3));
        set_state.update(|s| s.status = SessionStatus::Idle);
        assert_eq!(user_id.get_untracked(), Some(3));
    }
}
