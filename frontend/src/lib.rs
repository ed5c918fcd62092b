//! 车行商城前端应用
//!
//! 纯展示与状态同步层：业务逻辑与持久化全部在后端，
//! 本层通过 REST 调用同步。架构：
//! - `web::route` / `web::router`: 路由定义与路由服务（守卫引擎）
//! - `session`: 会话状态管理（唯一的跨页共享状态）
//! - `notify`: 全局通知横幅
//! - `api`: HTTP 适配层与各实体的领域访问函数
//! - `components`: UI 组件层（布局 + 页面）

mod api;
mod notify;
mod session;
mod storage;

mod components {
    pub mod admin_home;
    pub mod admin_layout;
    pub mod admin_users;
    pub mod admin_vehicle_specifics;
    pub mod admin_vehicles;
    pub mod cart;
    pub mod home;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod notification_bar;
    pub mod profile;
    pub mod register;
    pub mod search;
    pub mod search_model;
    pub mod vehicle_details;
}

// 原生 Web API 封装模块（History 路由）
pub(crate) mod web {
    pub mod route;
    pub mod router;
}

use leptos::prelude::*;

use crate::components::admin_home::AdminHomePage;
use crate::components::admin_users::AdminUsersPage;
use crate::components::admin_vehicle_specifics::AdminVehicleSpecificsPage;
use crate::components::admin_vehicles::AdminVehiclesPage;
use crate::components::cart::CartPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::notification_bar::NotificationBar;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::components::search::SearchPage;
use crate::components::search_model::SearchModelPage;
use crate::components::vehicle_details::VehicleDetailsPage;
use crate::notify::NotifyContext;
use crate::session::SessionContext;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的页面组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Search { make } => view! { <SearchPage make=make /> }.into_any(),
        AppRoute::SearchModel { make, vehicle_id } => {
            view! { <SearchModelPage make=make vehicle_id=vehicle_id /> }.into_any()
        }
        AppRoute::VehicleDetails {
            vehicle_specific_id,
        } => view! { <VehicleDetailsPage vehicle_specific_id=vehicle_specific_id /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::Cart => view! { <CartPage /> }.into_any(),
        AppRoute::AdminHome => view! { <AdminHomePage /> }.into_any(),
        AppRoute::AdminSearch { make } => view! { <AdminVehiclesPage make=make /> }.into_any(),
        AppRoute::AdminVehicleSpecifics { make, vehicle_id } => {
            view! { <AdminVehicleSpecificsPage make=make vehicle_id=vehicle_id /> }.into_any()
        }
        AppRoute::AdminUsers => view! { <AdminUsersPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话上下文 + 从持久化存储恢复身份
    let session = SessionContext::new();
    provide_context(session);
    session::init_session(&session);

    // 2. 通知上下文
    provide_context(NotifyContext::new());

    // 3. 认证信号注入路由服务实现守卫（解耦）
    let is_authenticated = session.is_authenticated_signal();
    let is_admin = session.is_admin_signal();

    view! {
        <Router is_authenticated=is_authenticated is_admin=is_admin>
            <NotificationBar />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
