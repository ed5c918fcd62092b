//! 认证区布局
//!
//! 顶栏（资料 / 购物车 / 登出）+ 可折叠的品牌侧边栏。
//! 挂载时若存在基础会话则拉取完整资料；独立拉取品牌列表并去重。

use crate::api;
use crate::components::icons::*;
use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use cardeal_shared::unique_makes;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session_ctx = use_session();
    let navigate = use_navigate();

    // 基础会话 -> 完整资料（按 id 去重，资料写回不会重复触发）
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

    // 侧边栏品牌导航（客户端保序去重）
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
    let go_cart = {
        let navigate = navigate.clone();
        move |_| navigate(AppRoute::Cart)
    };
    let go_home = {
        let navigate = navigate.clone();
        move |_| {
            set_drawer_open.set(false);
            navigate(AppRoute::Home)
        }
    };
    let on_logout = move |_| {
        // 登出完成后路由服务会随认证信号自动重定向
        spawn_local(async move { session::logout(session_ctx).await });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-primary text-primary-content shadow-lg">
                <div class="flex-1">
                    <button class="btn btn-ghost btn-square" on:click=move |_| set_drawer_open.update(|open| *open = !*open)>
                        <MenuIcon class="h-6 w-6" />
                    </button>
                </div>
                <div class="flex-none gap-2">
                    <button class="btn btn-ghost btn-square" on:click=go_profile>
                        <UserIcon class="h-6 w-6" />
                    </button>
                    <button class="btn btn-ghost btn-square" on:click=go_cart>
                        <CartIcon class="h-6 w-6" />
                    </button>
                    <button class="btn btn-ghost btn-square" on:click=on_logout>
                        <LogoutIcon class="h-6 w-6" />
                    </button>
                </div>
            </div>

            // 侧边抽屉（折叠时整体隐藏）
            <div class=move || if drawer_open.get() { "fixed inset-0 z-40" } else { "hidden" }>
                <div class="absolute inset-0 bg-black/40" on:click=move |_| set_drawer_open.set(false)></div>
                <aside class="absolute left-0 top-0 h-full w-52 bg-base-100 shadow-xl">
                    <ul class="menu p-2">
                        <li>
                            <a on:click=go_home>
                                <HomeIcon class="h-4 w-4" /> "Home"
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
                                            navigate(AppRoute::Search { make: target.clone() });
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
