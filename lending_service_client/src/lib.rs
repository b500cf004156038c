use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

pub mod account;
pub mod error;
pub mod loans;
pub mod resources;

/// The environment variable the client reads its base URL from.
pub static BASE_URL_VAR: &str = "LENDING_API_BASE_URL";

#[derive(Clone)]
pub struct LendingServiceClient {
    url: String,
    client: reqwest::Client,
}

impl LendingServiceClient {
    /// Build a client for the service at `url`. Every request carries a
    /// JSON content type by default.
    pub fn new(url: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        Self { url, client }
    }

    /// Build a client pointed at the base URL in `LENDING_API_BASE_URL`.
    pub fn new_from_env() -> Result<Self, std::env::VarError> {
        Ok(Self::new(std::env::var(BASE_URL_VAR)?))
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.url
    }
}
