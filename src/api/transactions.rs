//! Transaction Endpoints

use mmis_core::models::{ReturnPayload, Transaction, TransactionFilter};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Every transaction, narrowed by the non-empty filters
    pub async fn all_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, ApiError> {
        self.get("/transactions/all", &filter.query_pairs()).await
    }

    /// Requests by this employee that still have something to return
    pub async fn user_transactions(&self, employee_id: u32) -> Result<Vec<Transaction>, ApiError> {
        self.get(&format!("/transactions/user/{}", employee_id), &[])
            .await
    }

    pub async fn get_transaction(&self, transaction_id: u32) -> Result<Transaction, ApiError> {
        self.get(&format!("/transactions/{}", transaction_id), &[])
            .await
    }

    pub async fn return_item(&self, payload: &ReturnPayload) -> Result<serde_json::Value, ApiError> {
        self.post("/transactions/return", payload).await
    }
}
