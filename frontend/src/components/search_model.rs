//! 车型变体列表页
//!
//! 列出某车型的全部可售变体（年款 / 颜色 / 配置 / 价格），
//! 已售出的变体带标记且不可进入详情。

use crate::api;
use crate::components::layout::Layout;
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use cardeal_shared::VehicleSpecific;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SearchModelPage(make: String, vehicle_id: i64) -> impl IntoView {
    let navigate = use_navigate();

    let (model, set_model) = signal(String::new());
    let (specifics, set_specifics) = signal(Vec::<VehicleSpecific>::new());
    let (loading, set_loading) = signal(true);

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

    let render_specific = move |specific: VehicleSpecific| {
        let navigate = navigate.clone();
        let sold = specific.sold;
        let id = specific.id;
        view! {
            <tr
                class=move || if sold { "opacity-50" } else { "hover cursor-pointer" }
                on:click=move |_| {
                    if !sold {
                        navigate(AppRoute::VehicleDetails {
                            vehicle_specific_id: id,
                        });
                    }
                }
            >
                <td>{specific.year}</td>
                <td>{specific.color.clone()}</td>
                <td>{specific.trim.clone()}</td>
                <td>{format!("{:.2}", specific.price)}</td>
                <td>
                    {if sold {
                        view! { <span class="badge badge-error">"Sold"</span> }.into_any()
                    } else {
                        view! { <span class="badge badge-success">"Available"</span> }.into_any()
                    }}
                </td>
            </tr>
        }
    };

    view! {
        <Layout>
            <h1 class="text-3xl font-bold mb-6">
                {make.clone()} " " {move || model.get()}
            </h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                <p class=move || {
                    if specifics.with(|s| s.is_empty()) { "opacity-70" } else { "hidden" }
                }>
                    "No vehicles in stock for this model."
                </p>
                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Year"</th>
                                <th>"Color"</th>
                                <th>"Trim"</th>
                                <th>"Price"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || specifics.get()
                                key=|specific| specific.id
                                children=render_specific.clone()
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </Layout>
    }
}
