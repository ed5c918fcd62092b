//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都
//! 集中在此模块。导航流程：请求 -> 守卫验证 -> 处理 -> 加载。
//! 守卫所需的认证/管理员状态以信号注入，与会话系统解耦。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 当前路由放在信号里驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 认证状态（注入的信号）
    is_authenticated: Signal<bool>,
    /// 管理员状态（注入的信号）
    is_admin: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>, is_admin: Signal<bool>) -> Self {
        // 初始路由从 URL 解析；守卫在初始化流程里统一执行
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
            is_admin,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, target: AppRoute) {
        self.navigate_to_route(target, true);
    }

    /// 导航到指定路由
    ///
    /// `use_push` 为 true 使用 pushState，否则 replaceState。
    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();
        let is_admin = self.is_admin.get_untracked();

        let resolved = AppRoute::resolve(target.clone(), is_auth, is_admin);
        if resolved != target {
            web_sys::console::log_1(
                &format!("[Router] Access denied for {target}. Redirecting to {resolved}.").into(),
            );
        }

        let path = resolved.to_path();
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        self.set_route.set(resolved);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let is_admin = self.is_admin;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            // popstate 时同样执行守卫
            let resolved = AppRoute::resolve(
                target.clone(),
                is_authenticated.get_untracked(),
                is_admin.get_untracked(),
            );
            if resolved != target {
                replace_history_state(&resolved.to_path());
            }
            set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时自动重定向
    ///
    /// 登出时停留在受保护页面 -> 登录页；登录后停留在登录/注册页 -> 首页。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let is_admin = self.is_admin;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let admin = is_admin.get();
            let route = current_route.get_untracked();

            let resolved = AppRoute::resolve(route.clone(), is_auth, admin);
            if resolved != route {
                web_sys::console::log_1(
                    &format!("[Router] Auth state changed, redirecting to {resolved}.").into(),
                );
                push_history_state(&resolved.to_path());
                set_route.set(resolved);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>, is_admin: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated, is_admin);

    // 对初始 URL 也执行一次守卫（深链接到受保护页面）
    router.navigate_to_route(router.current_route.get_untracked(), false);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(AppRoute) + Clone {
    let router = use_router();
    move |to: AppRoute| {
        router.navigate(to);
    }
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 管理员状态信号
    is_admin: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, is_admin);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
