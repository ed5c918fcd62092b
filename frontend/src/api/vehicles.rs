//! 车辆端点

use super::{ApiError, log_error};
use cardeal_shared::{NewVehicle, Vehicle};

pub async fn fetch_vehicle(id: i64) -> Result<Vehicle, ApiError> {
    super::get_json(&format!("/vehicles/getById/{id}"))
        .await
        .inspect_err(|e| log_error("Error fetching vehicle", e))
}

pub async fn fetch_vehicles() -> Result<Vec<Vehicle>, ApiError> {
    super::get_json("/vehicles/getAllDto")
        .await
        .inspect_err(|e| log_error("Error fetching vehicles", e))
}

/// 品牌列表，可能含重复，由调用方去重
pub async fn fetch_makes() -> Result<Vec<String>, ApiError> {
    super::get_json("/vehicles/getAllMakes")
        .await
        .inspect_err(|e| log_error("Error fetching makes", e))
}

pub async fn fetch_vehicles_by_make(make: &str) -> Result<Vec<Vehicle>, ApiError> {
    super::get_json(&format!("/vehicles/getByMake/{make}"))
        .await
        .inspect_err(|e| log_error("Error fetching vehicles by make", e))
}

pub async fn create_vehicle(data: &NewVehicle) -> Result<Vehicle, ApiError> {
    super::post_json("/vehicles/add", data)
        .await
        .inspect_err(|e| log_error("Error creating vehicle", e))
}

/// 更新端点不带 id 路径参数，id 在请求体里
pub async fn update_vehicle(data: &Vehicle) -> Result<Vehicle, ApiError> {
    super::put_json("/vehicles/update", data)
        .await
        .inspect_err(|e| log_error("Error updating vehicle", e))
}

pub async fn delete_vehicle(id: i64) -> Result<(), ApiError> {
    super::delete_unit(&format!("/vehicles/deleteById/{id}"))
        .await
        .inspect_err(|e| log_error("Error deleting vehicle", e))
}
