//! 发动机端点

use super::{ApiError, log_error};
use cardeal_shared::Engine;

pub async fn fetch_engine(id: i64) -> Result<Engine, ApiError> {
    super::get_json(&format!("/engines/getById/{id}"))
        .await
        .inspect_err(|e| log_error("Error fetching engine", e))
}
