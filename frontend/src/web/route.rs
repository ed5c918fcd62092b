//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由、路径解析和访问层级（公开 / 认证 / 管理员）。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// 登录页（公开）
    Login,
    /// 注册页（公开）
    Register,
    /// 首页：全部车型
    Home,
    /// 按品牌浏览车型
    Search { make: String },
    /// 某车型下的可售变体
    SearchModel { make: String, vehicle_id: i64 },
    /// 变体详情（三段依赖拉取）
    VehicleDetails { vehicle_specific_id: i64 },
    Profile,
    Cart,
    /// 后台首页（管理员）
    AdminHome,
    /// 后台按品牌管理车型（管理员）
    AdminSearch { make: String },
    /// 后台管理车型变体（管理员）
    AdminVehicleSpecifics { make: String, vehicle_id: i64 },
    /// 后台用户管理（管理员）
    AdminUsers,
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 数字参数解析失败视为未知路径。
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["search", make] => Self::Search {
                make: (*make).to_string(),
            },
            ["search", make, id] => match id.parse() {
                Ok(vehicle_id) => Self::SearchModel {
                    make: (*make).to_string(),
                    vehicle_id,
                },
                Err(_) => Self::NotFound,
            },
            ["vehicle", id] => match id.parse() {
                Ok(vehicle_specific_id) => Self::VehicleDetails {
                    vehicle_specific_id,
                },
                Err(_) => Self::NotFound,
            },
            ["profile"] => Self::Profile,
            ["cart"] => Self::Cart,
            ["adminHome"] => Self::AdminHome,
            ["adminSearch", make] => Self::AdminSearch {
                make: (*make).to_string(),
            },
            ["adminSearch", make, id] => match id.parse() {
                Ok(vehicle_id) => Self::AdminVehicleSpecifics {
                    make: (*make).to_string(),
                    vehicle_id,
                },
                Err(_) => Self::NotFound,
            },
            ["adminUsers"] => Self::AdminUsers,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Home => "/".to_string(),
            Self::Search { make } => format!("/search/{make}"),
            Self::SearchModel { make, vehicle_id } => format!("/search/{make}/{vehicle_id}"),
            Self::VehicleDetails {
                vehicle_specific_id,
            } => format!("/vehicle/{vehicle_specific_id}"),
            Self::Profile => "/profile".to_string(),
            Self::Cart => "/cart".to_string(),
            Self::AdminHome => "/adminHome".to_string(),
            Self::AdminSearch { make } => format!("/adminSearch/{make}"),
            Self::AdminVehicleSpecifics { make, vehicle_id } => {
                format!("/adminSearch/{make}/{vehicle_id}")
            }
            Self::AdminUsers => "/adminUsers".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// 该路由是否需要认证
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::NotFound)
    }

    /// 该路由是否仅限管理员
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Self::AdminHome
                | Self::AdminSearch { .. }
                | Self::AdminVehicleSpecifics { .. }
                | Self::AdminUsers
        )
    }

    /// 已认证用户是否应该离开此路由（登录/注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// **核心守卫逻辑**：给定认证状态，返回需要重定向的目标
    ///
    /// 规则与检查顺序：
    /// 1. 管理员路由上身份缺失或非管理员 -> 首页
    /// 2. 认证路由上未认证 -> 登录页
    /// 3. 已认证访问登录/注册 -> 首页
    ///
    /// 返回 `None` 表示放行。注意重定向目标本身可能再被守卫
    /// （如未认证者从管理员路由被送往首页，再被送往登录页），
    /// 由 [`AppRoute::resolve`] 迭代到不动点。
    pub fn guard_redirect(&self, is_authenticated: bool, is_admin: bool) -> Option<Self> {
        if self.requires_admin() && !is_admin {
            return Some(Self::Home);
        }
        if self.requires_auth() && !is_authenticated {
            return Some(Self::Login);
        }
        if self.should_redirect_when_authenticated() && is_authenticated {
            return Some(Self::Home);
        }
        None
    }

    /// 迭代应用守卫，得到最终可落地的路由
    pub fn resolve(target: Self, is_authenticated: bool, is_admin: bool) -> Self {
        let mut resolved = target;
        while let Some(redirect) = resolved.guard_redirect(is_authenticated, is_admin) {
            resolved = redirect;
        }
        resolved
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
        assert_eq!(AppRoute::from_path("/profile"), AppRoute::Profile);
        assert_eq!(AppRoute::from_path("/cart"), AppRoute::Cart);
        assert_eq!(AppRoute::from_path("/adminHome"), AppRoute::AdminHome);
        assert_eq!(AppRoute::from_path("/adminUsers"), AppRoute::AdminUsers);
    }

    #[test]
    fn parses_parameterized_paths() {
        assert_eq!(
            AppRoute::from_path("/search/Ford"),
            AppRoute::Search {
                make: "Ford".into()
            }
        );
        assert_eq!(
            AppRoute::from_path("/search/Ford/3"),
            AppRoute::SearchModel {
                make: "Ford".into(),
                vehicle_id: 3
            }
        );
        assert_eq!(
            AppRoute::from_path("/vehicle/42"),
            AppRoute::VehicleDetails {
                vehicle_specific_id: 42
            }
        );
        assert_eq!(
            AppRoute::from_path("/adminSearch/BMW/7"),
            AppRoute::AdminVehicleSpecifics {
                make: "BMW".into(),
                vehicle_id: 7
            }
        );
    }

    #[test]
    fn bad_numeric_params_are_not_found() {
        assert_eq!(AppRoute::from_path("/vehicle/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/search/Ford/x"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/no/such/page/here"), AppRoute::NotFound);
    }

    #[test]
    fn path_roundtrip() {
        for route in [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Cart,
            AppRoute::Search {
                make: "Audi".into(),
            },
            AppRoute::SearchModel {
                make: "Audi".into(),
                vehicle_id: 9,
            },
            AppRoute::VehicleDetails {
                vehicle_specific_id: 5,
            },
            AppRoute::AdminVehicleSpecifics {
                make: "Ford".into(),
                vehicle_id: 2,
            },
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(AppRoute::from_path("/cart?from=details"), AppRoute::Cart);
        assert_eq!(AppRoute::from_path("/profile#top"), AppRoute::Profile);
    }

    #[test]
    fn access_tiers() {
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::Register.requires_auth());
        assert!(AppRoute::Home.requires_auth());
        assert!(AppRoute::Cart.requires_auth());
        assert!(AppRoute::AdminUsers.requires_auth());

        assert!(AppRoute::AdminHome.requires_admin());
        assert!(AppRoute::AdminUsers.requires_admin());
        assert!(
            AppRoute::AdminSearch {
                make: "Ford".into()
            }
            .requires_admin()
        );
        assert!(!AppRoute::Home.requires_admin());
        assert!(!AppRoute::Cart.requires_admin());
    }

    #[test]
    fn admin_routes_redirect_home_when_not_admin() {
        // 有会话但非管理员
        assert_eq!(
            AppRoute::AdminHome.guard_redirect(true, false),
            Some(AppRoute::Home)
        );
        // 无会话同样先回首页（再由首页守卫送往登录）
        assert_eq!(
            AppRoute::AdminUsers.guard_redirect(false, false),
            Some(AppRoute::Home)
        );
        // 管理员放行
        assert_eq!(AppRoute::AdminHome.guard_redirect(true, true), None);
    }

    #[test]
    fn protected_routes_redirect_to_login_when_unauthenticated() {
        assert_eq!(
            AppRoute::Cart.guard_redirect(false, false),
            Some(AppRoute::Login)
        );
        assert_eq!(AppRoute::Cart.guard_redirect(true, false), None);
    }

    #[test]
    fn authenticated_users_leave_public_pages() {
        assert_eq!(
            AppRoute::Login.guard_redirect(true, false),
            Some(AppRoute::Home)
        );
        assert_eq!(AppRoute::Login.guard_redirect(false, false), None);
    }

    #[test]
    fn resolve_reaches_fixed_point() {
        // 未认证访问管理员路由：adminHome -> / -> /login
        assert_eq!(
            AppRoute::resolve(AppRoute::AdminHome, false, false),
            AppRoute::Login
        );
        // 已认证非管理员：adminHome -> /
        assert_eq!(
            AppRoute::resolve(AppRoute::AdminHome, true, false),
            AppRoute::Home
        );
        // 已认证访问登录页 -> /
        assert_eq!(
            AppRoute::resolve(AppRoute::Login, true, false),
            AppRoute::Home
        );
        // 放行
        assert_eq!(
            AppRoute::resolve(AppRoute::Cart, true, false),
            AppRoute::Cart
        );
    }
}
