use models_lending::loan::{BorrowType, Loan};
use serde::{Deserialize, Serialize};

use super::LendingServiceClient;
use crate::error::{ClientError, ResponseExt};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateLoanRequest {
    pub resource_id: i64,
    pub borrow_type: BorrowType,
}

impl LendingServiceClient {
    /// Borrow a resource on behalf of the member the token belongs to.
    #[tracing::instrument(skip(self, jwt_token))]
    pub async fn create_loan(
        &self,
        jwt_token: &str,
        resource_id: i64,
        borrow_type: BorrowType,
    ) -> Result<Loan, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/loans", self.url))
            .header("Authorization", format!("Bearer {}", jwt_token))
            .json(&CreateLoanRequest {
                resource_id,
                borrow_type,
            })
            .send()
            .await
            .map_client_error()
            .await?;

        let result = response.json::<Loan>().await.map_err(|e| {
            ClientError::Generic(anyhow::anyhow!(
                "unable to parse response from create_loan: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// List the loans of the member the token belongs to.
    #[tracing::instrument(skip(self, jwt_token))]
    pub async fn list_loans(&self, jwt_token: &str) -> Result<Vec<Loan>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/loans", self.url))
            .header("Authorization", format!("Bearer {}", jwt_token))
            .send()
            .await
            .map_client_error()
            .await?;

        let result = response.json::<Vec<Loan>>().await.map_err(|e| {
            ClientError::Generic(anyhow::anyhow!(
                "unable to parse response from list_loans: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Return a borrowed resource.
    #[tracing::instrument(skip(self, jwt_token))]
    pub async fn return_loan(&self, jwt_token: &str, loan_id: i64) -> Result<Loan, ClientError> {
        let response = self
            .client
            .put(format!("{}/api/loans/{}/return", self.url, loan_id))
            .header("Authorization", format!("Bearer {}", jwt_token))
            .send()
            .await
            .map_client_error()
            .await?;

        let result = response.json::<Loan>().await.map_err(|e| {
            ClientError::Generic(anyhow::anyhow!(
                "unable to parse response from return_loan: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }
}
