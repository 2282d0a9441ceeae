//! Employee REST calls: one method per endpoint.

use super::config::ClientConfig;
use super::error::{ClientError, ClientResult};
use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Employee>>;

    async fn create(&self, employee: &NewEmployee) -> ClientResult<Employee>;

    async fn update(&self, id: &str, fields: &EmployeeUpdate) -> ClientResult<Employee>;

    /// Returns every employee left after the deletion.
    async fn delete(&self, id: &str) -> ClientResult<Vec<Employee>>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// [`EmployeeApi`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpEmployeeApi {
    client: Client,
    base_url: String,
}

impl HttpEmployeeApi {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(HttpEmployeeApi {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| ClientError::InvalidResponse(err.to_string()))
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list(&self) -> ClientResult<Vec<Employee>> {
        let response = self.client.get(self.url("/employees")).send().await?;
        Self::handle_response(response).await
    }

    async fn create(&self, employee: &NewEmployee) -> ClientResult<Employee> {
        let response = self
            .client
            .post(self.url("/employees"))
            .json(employee)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn update(&self, id: &str, fields: &EmployeeUpdate) -> ClientResult<Employee> {
        let response = self
            .client
            .patch(self.url(&format!("/employees/{}", id)))
            .json(fields)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn delete(&self, id: &str) -> ClientResult<Vec<Employee>> {
        let response = self
            .client
            .delete(self.url(&format!("/employees/{}", id)))
            .send()
            .await?;
        Self::handle_response(response).await
    }
}
