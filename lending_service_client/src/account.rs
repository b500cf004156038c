use models_lending::user::UserProfile;
use serde::{Deserialize, Serialize};

use super::LendingServiceClient;
use crate::error::{ClientError, ResponseExt};

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: UserProfile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserProfile,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
}

impl LendingServiceClient {
    /// Create a new member account.
    #[tracing::instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/register", self.url))
            .json(&RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_client_error()
            .await?;

        let result = response.json::<RegisterResponse>().await.map_err(|e| {
            ClientError::Generic(anyhow::anyhow!(
                "unable to parse response from register: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Log a member in and receive an access token.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/login", self.url))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_client_error()
            .await?;

        let result = response.json::<LoginResponse>().await.map_err(|e| {
            ClientError::Generic(anyhow::anyhow!(
                "unable to parse response from login: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Fetch the profile of the member the token belongs to.
    #[tracing::instrument(skip(self, jwt_token))]
    pub async fn get_profile(&self, jwt_token: &str) -> Result<UserProfile, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/profile", self.url))
            .header("Authorization", format!("Bearer {}", jwt_token))
            .send()
            .await
            .map_client_error()
            .await?;

        let result = response.json::<UserProfile>().await.map_err(|e| {
            ClientError::Generic(anyhow::anyhow!(
                "unable to parse response from get_profile: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Update the name and email of the member the token belongs to.
    #[tracing::instrument(skip(self, jwt_token))]
    pub async fn update_profile(
        &self,
        jwt_token: &str,
        name: &str,
        email: &str,
    ) -> Result<UserProfile, ClientError> {
        let response = self
            .client
            .put(format!("{}/api/profile", self.url))
            .header("Authorization", format!("Bearer {}", jwt_token))
            .json(&UpdateProfileRequest {
                name: name.to_string(),
                email: email.to_string(),
            })
            .send()
            .await
            .map_client_error()
            .await?;

        let result = response.json::<UserProfile>().await.map_err(|e| {
            ClientError::Generic(anyhow::anyhow!(
                "unable to parse response from update_profile: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }
}
