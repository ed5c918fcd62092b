//! 持久化会话身份
//!
//! 身份只存在单一键下，应用启动时加载，登出时删除。

use cardeal_shared::UserBasicInfo;
use gloo_storage::{LocalStorage, Storage};

const USER_INFO_KEY: &str = "userInfo";

/// 读取持久化身份，键不存在或反序列化失败均视为未登录
pub fn load_user() -> Option<UserBasicInfo> {
    LocalStorage::get(USER_INFO_KEY).ok()
}

pub fn save_user(user: &UserBasicInfo) {
    let _ = LocalStorage::set(USER_INFO_KEY, user);
}

pub fn clear_user() {
    LocalStorage::delete(USER_INFO_KEY);
}
