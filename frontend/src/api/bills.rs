//! 账单端点

use super::{ApiError, log_error};
use cardeal_shared::{Bill, NewBill};

/// 用户当前的购物车账单
pub async fn fetch_cart(user_id: i64) -> Result<Bill, ApiError> {
    super::get_json(&format!("/bills/getCart/{user_id}"))
        .await
        .inspect_err(|e| log_error("Error fetching bill", e))
}

pub async fn create_bill(data: &NewBill) -> Result<(), ApiError> {
    super::post_unit("/bills/add", data)
        .await
        .inspect_err(|e| log_error("Error creating bill", e))
}

pub async fn place_order(bill: &Bill) -> Result<(), ApiError> {
    super::post_unit("/bills/placeOrder", bill)
        .await
        .inspect_err(|e| log_error("Error placing order", e))
}

pub async fn delete_bill(id: i64) -> Result<(), ApiError> {
    super::delete_unit(&format!("/bills/deleteById/{id}"))
        .await
        .inspect_err(|e| log_error("Error deleting bill", e))
}
