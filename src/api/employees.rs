//! Employee Endpoints

use mmis_core::models::{ChangePasswordRequest, Employee};

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn get_employee(&self, employee_id: u32) -> Result<Employee, ApiError> {
        self.get(&format!("/employees/{}", employee_id), &[]).await
    }

    pub async fn change_password(&self, employee_id: u32, current: &str, new: &str) -> Result<serde_json::Value, ApiError> {
        let body = ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };
        self.put(&format!("/employees/{}/change-password", employee_id), &body)
            .await
    }
}
