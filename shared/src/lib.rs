//! 车行商城共享数据模型
//!
//! 与后端 REST API 逐字交换的领域类型。本层不做任何运行时校验，
//! 引用完整性由后端负责；这里只固定线格式（camelCase JSON）。

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

mod date;
pub use date::{Date, Timestamp};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 质保费率：每年 500
pub const WARRANTY_PRICE_PER_YEAR: f64 = 500.0;

// =========================================================
// 用户 (Users)
// =========================================================

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    // 实际上只写不读，后端不会有意义地回显
    pub password: String,
    pub name: String,
    pub is_admin: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub is_admin: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// 登录/注册返回的会话身份，持久化到浏览器存储
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserBasicInfo {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub name: String,
    pub is_admin: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileData {
    pub id: i64,
    pub name: String,
    pub email: String,
}

// =========================================================
// 车辆 (Vehicles)
// =========================================================

/// 品牌 + 车型，与年款/配置无关
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
}

/// 某一车型的可售变体（年款、颜色、配置、发动机、价格）
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSpecific {
    pub id: i64,
    pub vehicle_id: i64,
    pub year: i32,
    pub color: String,
    pub engine_id: i64,
    pub trim: String,
    pub price: f64,
    pub sold: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicleSpecific {
    pub vehicle_id: i64,
    pub year: i32,
    pub color: String,
    pub engine_id: i64,
    pub trim: String,
    pub price: f64,
    pub sold: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Engine {
    pub id: i64,
    pub capacity: i32,
    pub combustion: String,
    pub horse_power: i32,
    pub price: f64,
}

// =========================================================
// 订单 (Bills & Warranties)
// =========================================================

/// 单个用户的购物车/订单快照
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: i64,
    pub price: f64,
    pub date: Timestamp,
    pub user_id: i64,
    pub vehicle_specific_id: i64,
    pub warranty_id: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBill {
    pub date: Timestamp,
    pub user_id: i64,
    pub vehicle_specific_id: i64,
}

/// 按年计价的可选质保
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Warranty {
    pub price: f64,
    pub years: i32,
    pub end_date: Option<Timestamp>,
}

impl Warranty {
    /// 未选购质保
    pub fn none() -> Self {
        Self {
            price: 0.0,
            years: 0,
            end_date: None,
        }
    }

    /// 根据年限与账单日期报价
    ///
    /// `price = years * 500`；到期日为账单日期按公历推进 `years` 年。
    /// 0 年表示不选购，无到期日。
    pub fn quote(years: i32, bill_date: Timestamp) -> Self {
        if years <= 0 {
            return Self::none();
        }
        Self {
            price: years as f64 * WARRANTY_PRICE_PER_YEAR,
            years,
            end_date: Some(bill_date.add_years(years)),
        }
    }
}

// =========================================================
// 辅助函数
// =========================================================

/// 保序去重品牌列表
///
/// 后端可能返回重复品牌，侧边栏导航只显示首次出现的那一个。
pub fn unique_makes(makes: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    makes
        .iter()
        .filter(|make| seen.insert((*make).clone()))
        .cloned()
        .collect()
}

/// 按 id 从列表里移除元素
///
/// 删除请求经后端确认后，用它同步本地列表。
pub fn remove_by_id<T>(items: &mut Vec<T>, id: i64, item_id: impl Fn(&T) -> i64) {
    items.retain(|item| item_id(item) != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BILL_DATE: Timestamp = Timestamp::new(1_715_774_400_000); // 2024-05-15

    #[test]
    fn warranty_price_is_flat_rate_per_year() {
        for years in 0..=5 {
            let warranty = Warranty::quote(years, BILL_DATE);
            assert_eq!(warranty.price, years as f64 * 500.0);
            assert_eq!(warranty.years, years);
        }
    }

    #[test]
    fn warranty_end_date_advances_bill_date_by_years() {
        let warranty = Warranty::quote(3, BILL_DATE);
        assert_eq!(
            warranty.end_date.map(|d| d.format_ymd()).as_deref(),
            Some("2027-05-15")
        );
    }

    #[test]
    fn zero_years_means_no_warranty() {
        let warranty = Warranty::quote(0, BILL_DATE);
        assert_eq!(warranty, Warranty::none());
        assert!(warranty.end_date.is_none());
        assert_eq!(warranty.price, 0.0);
    }

    #[test]
    fn total_price_is_bill_plus_warranty_in_any_order() {
        let bill_price = 25_000.0;
        let a = Warranty::quote(2, BILL_DATE);
        let b = Warranty::quote(5, BILL_DATE);
        assert_eq!(bill_price + a.price, 26_000.0);
        assert_eq!(bill_price + b.price, 27_500.0);
        // 重新选回 2 年得到相同报价
        assert_eq!(Warranty::quote(2, BILL_DATE), a);
    }

    #[test]
    fn unique_makes_preserves_first_occurrence_order() {
        let makes = ["Ford", "Ford", "BMW"].map(String::from);
        assert_eq!(unique_makes(&makes), vec!["Ford", "BMW"]);

        let makes = ["BMW", "Audi", "BMW", "Ford", "Audi"].map(String::from);
        assert_eq!(unique_makes(&makes), vec!["BMW", "Audi", "Ford"]);
    }

    #[test]
    fn unique_makes_of_empty_is_empty() {
        assert!(unique_makes(&[]).is_empty());
    }

    #[test]
    fn remove_by_id_drops_only_the_matching_row() {
        let mut ids = vec![5i64, 7, 9];
        remove_by_id(&mut ids, 7, |id| *id);
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn remove_by_id_of_absent_id_is_noop() {
        let mut vehicles = vec![
            Vehicle {
                id: 1,
                make: "Ford".into(),
                model: "Focus".into(),
            },
            Vehicle {
                id: 2,
                make: "BMW".into(),
                model: "M3".into(),
            },
        ];
        remove_by_id(&mut vehicles, 3, |v| v.id);
        assert_eq!(vehicles.len(), 2);
        remove_by_id(&mut vehicles, 2, |v| v.id);
        assert_eq!(
            vehicles.iter().map(|v| v.id).collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[test]
    fn zero_year_warranty_serializes_with_null_end_date() {
        // 下单时质保总是落库，0 年也写零价记录
        let json = serde_json::to_string(&Warranty::none()).unwrap();
        assert_eq!(json, r#"{"price":0.0,"years":0,"endDate":null}"#);
    }

    #[test]
    fn bill_wire_format_is_camel_case() {
        let bill = Bill {
            id: 7,
            price: 19_999.0,
            date: Timestamp::new(0),
            user_id: 3,
            vehicle_specific_id: 11,
            warranty_id: 0,
        };
        let json = serde_json::to_string(&bill).unwrap();
        assert!(json.contains("\"userId\":3"));
        assert!(json.contains("\"vehicleSpecificId\":11"));
        assert!(json.contains("\"warrantyId\":0"));
    }

    #[test]
    fn user_wire_format_is_camel_case() {
        let json = r#"{"id":1,"email":"a@b.c","password":"x","name":"A","isAdmin":true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_admin);
    }
}
