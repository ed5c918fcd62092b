//! 品牌车型列表页
//!
//! 列出某品牌下的全部车型，点击进入该车型的在售变体列表。

use crate::api;
use crate::components::layout::Layout;
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use cardeal_shared::Vehicle;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SearchPage(make: String) -> impl IntoView {
    let navigate = use_navigate();

    let (vehicles, set_vehicles) = signal(Vec::<Vehicle>::new());
    let (loading, set_loading) = signal(true);

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

    let render_vehicle = {
        let make = make.clone();
        move |vehicle: Vehicle| {
            let navigate = navigate.clone();
            let make = make.clone();
            view! {
                <div
                    class="card bg-base-100 shadow hover:shadow-lg cursor-pointer transition-shadow"
                    on:click=move |_| {
                        navigate(AppRoute::SearchModel {
                            make: make.clone(),
                            vehicle_id: vehicle.id,
                        })
                    }
                >
                    <div class="card-body">
                        <h2 class="card-title">{vehicle.model.clone()}</h2>
                        <p class="text-sm opacity-70">{vehicle.make.clone()}</p>
                    </div>
                </div>
            }
        }
    };

    view! {
        <Layout>
            <h1 class="text-3xl font-bold mb-6">{make.clone()} " models"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                <p class=move || {
                    if vehicles.with(|v| v.is_empty()) { "opacity-70" } else { "hidden" }
                }>
                    "No models found for this make."
                </p>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    <For
                        each=move || vehicles.get()
                        key=|vehicle| vehicle.id
                        children=render_vehicle.clone()
                    />
                </div>
            </Show>
        </Layout>
    }
}
