//! 质保端点

use super::{ApiError, log_error};
use cardeal_shared::Warranty;

pub async fn create_warranty(data: &Warranty) -> Result<(), ApiError> {
    super::post_unit("/warranties/add", data)
        .await
        .inspect_err(|e| log_error("Error creating warranty", e))
}
