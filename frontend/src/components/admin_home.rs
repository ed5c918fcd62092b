//! 后台首页
//!
//! 全量车型总览，点击直达该车型的变体管理；另带用户管理入口。
//! 按品牌筛选走后台侧边栏。

use crate::api;
use crate::components::admin_layout::AdminLayout;
use crate::components::icons::{CarIcon, UsersIcon};
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use cardeal_shared::Vehicle;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminHomePage() -> impl IntoView {
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
                            go(AppRoute::AdminVehicleSpecifics {
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
        <AdminLayout>
            <h1 class="text-3xl font-bold mb-6">"Inventory"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    <For
                        each=move || vehicles.get()
                        key=|vehicle| vehicle.id
                        children=render_vehicle
                    />
                    <div
                        class="card bg-base-100 shadow hover:shadow-lg cursor-pointer transition-shadow"
                        on:click=move |_| navigate.with_value(|go| go(AppRoute::AdminUsers))
                    >
                        <div class="card-body items-center">
                            <UsersIcon class="h-10 w-10 text-secondary" />
                            <h2 class="card-title">"Users"</h2>
                        </div>
                    </div>
                </div>
            </Show>
        </AdminLayout>
    }
}
