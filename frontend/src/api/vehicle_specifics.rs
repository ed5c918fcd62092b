//! 车辆变体端点

use super::{ApiError, log_error};
use cardeal_shared::{NewVehicleSpecific, VehicleSpecific};

pub async fn fetch_by_vehicle(vehicle_id: i64) -> Result<Vec<VehicleSpecific>, ApiError> {
    super::get_json(&format!("/vehicleSpecific/getByVehicleId/{vehicle_id}"))
        .await
        .inspect_err(|e| log_error("Error fetching vehicle specifics", e))
}

pub async fn fetch_specific(id: i64) -> Result<VehicleSpecific, ApiError> {
    super::get_json(&format!("/vehicleSpecific/getById/{id}"))
        .await
        .inspect_err(|e| log_error("Error fetching vehicle specific", e))
}

pub async fn create_specific(data: &NewVehicleSpecific) -> Result<VehicleSpecific, ApiError> {
    super::post_json("/vehicleSpecific/add", data)
        .await
        .inspect_err(|e| log_error("Error creating vehicle specific", e))
}

pub async fn update_specific(id: i64, data: &NewVehicleSpecific) -> Result<VehicleSpecific, ApiError> {
    super::put_json(&format!("/vehicleSpecific/update/{id}"), data)
        .await
        .inspect_err(|e| log_error("Error updating vehicle specific", e))
}

pub async fn delete_specific(id: i64) -> Result<(), ApiError> {
    super::delete_unit(&format!("/vehicleSpecific/deleteById/{id}"))
        .await
        .inspect_err(|e| log_error("Error deleting vehicle specific", e))
}
