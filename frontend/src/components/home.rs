//! 客户首页
//!
//! 全量车型卡片墙，点击进入该车型的在售变体列表。
//! 按品牌筛选走布局侧边栏。

use crate::api;
use crate::components::icons::CarIcon;
use crate::components::layout::Layout;
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use cardeal_shared::Vehicle;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = StoredValue::new(use_navigate());

    let (vehicles, set_vehicles) = signal(Vec::<Vehicle>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(fetched) = api::vehicles::fetch_vehicles().await {
                set_vehicles.set(fetched);
            }
            set_loading.set(false);
        });
    });

    let render_vehicle = move |vehicle: Vehicle| {
        let make = vehicle.make.clone();
        let id = vehicle.id;
        view! {
            <div
                class="card bg-base-100 shadow hover:shadow-lg cursor-pointer transition-shadow"
                on:click=move |_| {
                    navigate
                        .with_value(|go| {
                            go(AppRoute::SearchModel {
                                make: make.clone(),
                                vehicle_id: id,
                            })
                        })
                }
            >
                <div class="card-body items-center">
                    <CarIcon class="h-10 w-10 text-primary" />
                    <h2 class="card-title">{vehicle.make.clone()} " " {vehicle.model.clone()}</h2>
                </div>
            </div>
        }
    };

    view! {
        <Layout>
            <h1 class="text-3xl font-bold mb-6">"Our vehicles"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                <p class=move || {
                    if vehicles.with(|v| v.is_empty()) { "opacity-70" } else { "hidden" }
                }>
                    "No vehicles available right now."
                </p>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    <For
                        each=move || vehicles.get()
                        key=|vehicle| vehicle.id
                        children=render_vehicle
                    />
                </div>
            </Show>
        </Layout>
    }
}
