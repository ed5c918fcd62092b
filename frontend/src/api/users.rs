//! 用户端点
//!
//! 认证（登录/注册/登出）、个人资料和后台用户管理。

use super::{ApiError, log_error};
use cardeal_shared::{LoginRequest, NewUser, RegisterRequest, UpdateUser, User, UserBasicInfo, UserProfileData};
use serde::Serialize;

/// 登出请求没有负载，后端只认会话
#[derive(Serialize)]
struct Empty {}

pub async fn login(data: &LoginRequest) -> Result<UserBasicInfo, ApiError> {
    super::post_json("/users/login", data)
        .await
        .inspect_err(|e| log_error("Error logging in", e))
}

pub async fn register(data: &RegisterRequest) -> Result<UserBasicInfo, ApiError> {
    super::post_json("/users/register", data)
        .await
        .inspect_err(|e| log_error("Error registering", e))
}

pub async fn logout() -> Result<(), ApiError> {
    super::post_unit("/users/logout", &Empty {})
        .await
        .inspect_err(|e| log_error("Error logging out", e))
}

pub async fn fetch_user(id: i64) -> Result<UserProfileData, ApiError> {
    super::get_json(&format!("/users/getById/{id}"))
        .await
        .inspect_err(|e| log_error("Error fetching user", e))
}

pub async fn update_user(id: i64, data: &UpdateUser) -> Result<UserProfileData, ApiError> {
    super::put_json(&format!("/users/update/{id}"), data)
        .await
        .inspect_err(|e| log_error("Error updating user", e))
}

pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    super::get_json("/users/getAllDto")
        .await
        .inspect_err(|e| log_error("Error fetching users", e))
}

pub async fn create_user(data: &NewUser) -> Result<User, ApiError> {
    super::post_json("/users/add", data)
        .await
        .inspect_err(|e| log_error("Error creating user", e))
}

pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    super::delete_unit(&format!("/users/deleteById/{id}"))
        .await
        .inspect_err(|e| log_error("Error deleting user", e))
}
