//! 车辆详情页
//!
//! 依赖式三连拉取：变体 -> 车型 + 发动机。每次拉取链带请求代号，
//! 过期链路的响应直接丢弃，不会覆盖新链路已写入的状态。

use crate::api;
use crate::components::layout::Layout;
use crate::notify::{Severity, use_notify};
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use cardeal_shared::{Date, Engine, NewBill, Vehicle, VehicleSpecific};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn VehicleDetailsPage(vehicle_specific_id: i64) -> impl IntoView {
    let session_ctx = use_session();
    let notify = use_notify();
    // 包成 StoredValue 让事件处理器可 Copy，方便塞进嵌套闭包
    let navigate = StoredValue::new(use_navigate());

    let (specific, set_specific) = signal(Option::<VehicleSpecific>::None);
    let (vehicle, set_vehicle) = signal(Option::<Vehicle>::None);
    let (engine, set_engine) = signal(Option::<Engine>::None);
    let (loading, set_loading) = signal(true);
    let (buying, set_buying) = signal(false);

    // 请求代号：新链路启动即递增，旧链路每步写入前核对
    let (generation, set_generation) = signal(0u64);

    Effect::new(move |_| {
        let token = generation.get_untracked() + 1;
        set_generation.set(token);
        set_loading.set(true);

        spawn_local(async move {
            let fresh = move || generation.try_get_untracked() == Some(token);

            let Ok(fetched) = api::vehicle_specifics::fetch_specific(vehicle_specific_id).await
            else {
                if fresh() {
                    set_loading.set(false);
                }
                return;
            };
            if !fresh() {
                return;
            }
            let vehicle_id = fetched.vehicle_id;
            let engine_id = fetched.engine_id;
            set_specific.set(Some(fetched));

            if let Ok(fetched) = api::vehicles::fetch_vehicle(vehicle_id).await {
                if fresh() {
                    set_vehicle.set(Some(fetched));
                }
            }
            if let Ok(fetched) = api::engines::fetch_engine(engine_id).await {
                if fresh() {
                    set_engine.set(Some(fetched));
                }
            }
            if fresh() {
                set_loading.set(false);
            }
        });
    });

    let on_buy = move |_| {
        let Some(user_id) = session_ctx
            .state
            .with_untracked(|s| s.basic_user_info.as_ref().map(|u| u.id))
        else {
            return;
        };
        set_buying.set(true);
        spawn_local(async move {
            let bill = NewBill {
                date: Date::now_timestamp(),
                user_id,
                vehicle_specific_id,
            };
            match api::bills::create_bill(&bill).await {
                Ok(()) => {
                    notify.show("Vehicle added to cart", Severity::Success);
                    navigate.with_value(|go| go(AppRoute::Cart));
                }
                Err(e) => {
                    let message = e
                        .server_message()
                        .unwrap_or("Could not add vehicle to cart")
                        .to_string();
                    notify.show(message, Severity::Error);
                    set_buying.set(false);
                }
            }
        });
    };

    view! {
        <Layout>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                {move || {
                    specific
                        .get()
                        .map(|sp| {
                            view! {
                                <div class="card bg-base-100 shadow-xl max-w-2xl">
                                    <div class="card-body">
                                        <h1 class="card-title text-3xl">
                                            {move || {
                                                vehicle
                                                    .get()
                                                    .map(|v| format!("{} {}", v.make, v.model))
                                                    .unwrap_or_else(|| "Vehicle".to_string())
                                            }}
                                            " (" {sp.year} ")"
                                        </h1>
                                        <div class="grid grid-cols-2 gap-2 mt-4">
                                            <span class="font-semibold">"Color"</span>
                                            <span>{sp.color.clone()}</span>
                                            <span class="font-semibold">"Trim"</span>
                                            <span>{sp.trim.clone()}</span>
                                        </div>

                                        <h2 class="text-xl font-semibold mt-4">"Engine"</h2>
                                        {move || {
                                            engine
                                                .get()
                                                .map(|en| {
                                                    view! {
                                                        <div class="grid grid-cols-2 gap-2">
                                                            <span class="font-semibold">"Combustion"</span>
                                                            <span>{en.combustion.clone()}</span>
                                                            <span class="font-semibold">"Capacity"</span>
                                                            <span>{en.capacity} " cc"</span>
                                                            <span class="font-semibold">"Horse power"</span>
                                                            <span>{en.horse_power}</span>
                                                        </div>
                                                    }
                                                })
                                        }}

                                        <div class="card-actions justify-between items-center mt-6">
                                            <span class="text-2xl font-bold">
                                                {format!("{:.2}", sp.price)}
                                            </span>
                                            <button
                                                class="btn btn-primary"
                                                disabled=move || buying.get()
                                                on:click=on_buy
                                            >
                                                "Buy"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </Layout>
    }
}
