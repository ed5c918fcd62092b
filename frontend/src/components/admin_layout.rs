//! 后台布局
//!
//! 与客户布局同构，但导航面向管理页：后台首页、用户管理、
//! 各品牌的库存管理。无购物车入口。

use crate::api;
use crate::components::icons::*;
use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use cardeal_shared::unique_makes;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let session_ctx = use_session();
    let navigate = use_navigate();

    let user_id = Memo::new(move |_| {
        session_ctx
            .state
            .with(|s| s.basic_user_info.as_ref().map(|u| u.id))
    });
    Effect::new(move |_| {
        if let Some(id) = user_id.get() {
            spawn_local(async move { session::fetch_profile(session_ctx, id).await });
        }
    });

    let (makes, set_makes) = signal(Vec::<String>::new());
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(fetched) = api::vehicles::fetch_makes().await {
                set_makes.set(unique_makes(&fetched));
            }
        });
    });

    let (drawer_open, set_drawer_open) = signal(false);

    let go_profile = {
        let navigate = navigate.clone();
        move |_| navigate(AppRoute::Profile)
    };
    let go_admin_home = {
        let navigate = navigate.clone();
        move |_| {
            set_drawer_open.set(false);
            navigate(AppRoute::AdminHome)
        }
    };
    let go_users = {
        let navigate = navigate.clone();
        move |_| {
            set_drawer_open.set(false);
            navigate(AppRoute::AdminUsers)
        }
    };
    let on_logout = move |_| {
        spawn_local(async move { session::logout(session_ctx).await });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-neutral text-neutral-content shadow-lg">
                <div class="flex-1">
                    <button class="btn btn-ghost btn-square" on:click=move |_| set_drawer_open.update(|open| *open = !*open)>
                        <MenuIcon class="h-6 w-6" />
                    </button>
                    <span class="text-lg font-semibold px-2">"Back office"</span>
                </div>
                <div class="flex-none gap-2">
                    <button class="btn btn-ghost btn-square" on:click=go_profile>
                        <UserIcon class="h-6 w-6" />
                    </button>
                    <button class="btn btn-ghost btn-square" on:click=on_logout>
                        <LogoutIcon class="h-6 w-6" />
                    </button>
                </div>
            </div>

            <div class=move || if drawer_open.get() { "fixed inset-0 z-40" } else { "hidden" }>
                <div class="absolute inset-0 bg-black/40" on:click=move |_| set_drawer_open.set(false)></div>
                <aside class="absolute left-0 top-0 h-full w-52 bg-base-100 shadow-xl">
                    <ul class="menu p-2">
                        <li>
                            <a on:click=go_admin_home>
                                <HomeIcon class="h-4 w-4" /> "Home"
                            </a>
                        </li>
                        <li>
                            <a on:click=go_users>
                                <UsersIcon class="h-4 w-4" /> "Users"
                            </a>
                        </li>
                        <For
                            each=move || makes.get()
                            key=|make| make.clone()
                            children=move |make: String| {
                                let navigate = navigate.clone();
                                let target = make.clone();
                                view! {
                                    <li>
                                        <a on:click=move |_| {
                                            set_drawer_open.set(false);
                                            navigate(AppRoute::AdminSearch { make: target.clone() });
                                        }>
                                            <CarIcon class="h-4 w-4" /> {make.clone()}
                                        </a>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </aside>
            </div>

            <main class="p-4 md:p-8">{children()}</main>
        </div>
    }
}
