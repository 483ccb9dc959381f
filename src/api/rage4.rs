use super::{client::DnsApiClient, error::*, models::*};
use crate::config::Config;
use async_trait::async_trait;
use log::{debug, error};
use serde::de::DeserializeOwned;

pub const API_BASE_URL: &str = "https://rage4.com/rapi/";

type Params = Vec<(&'static str, String)>;

pub struct Rage4Client {
    client: reqwest::Client,
    base_url: String,
    email: String,
    api_token: String,
}

#[async_trait]
impl DnsApiClient for Rage4Client {
    async fn get_domains(&self) -> ApiResult<Vec<Domain>> {
        self.request("getdomains/", Vec::new()).await
    }

    async fn get_records(&self, domain: &Domain) -> ApiResult<Vec<Record>> {
        let params = vec![("id", domain.id.to_string()), ("name", domain.name.clone())];
        self.request("getrecords/", params).await
    }

    async fn create_record(&self, domain: &Domain, record: &NewRecord) -> ApiResult<CommandStatus> {
        let params = vec![
            ("id", domain.id.to_string()),
            ("name", record.name.clone()),
            ("content", record.content.clone()),
            ("type", record.r#type.clone()),
            ("priority", record.priority.to_string()),
        ];
        accepted(self.request("createrecord/", params).await?)
    }

    async fn update_record(&self, record: &Record, content: &str) -> ApiResult<CommandStatus> {
        let params = vec![
            ("id", record.id.to_string()),
            ("name", record.name.clone()),
            ("content", content.to_string()),
            ("priority", record.priority.to_string()),
        ];
        accepted(self.request("updaterecord/", params).await?)
    }

    async fn delete_record(&self, id: i64) -> ApiResult<CommandStatus> {
        accepted(self.request("deleterecord/", vec![("id", id.to_string())]).await?)
    }
}

impl Rage4Client {
    pub fn new(config: &Config) -> Self {
        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            client: reqwest::Client::new(),
            base_url,
            email: config.username.clone(),
            api_token: config.api_token.clone(),
        }
    }

    async fn request<T: DeserializeOwned>(&self, endpoint: &str, params: Params) -> ApiResult<T> {
        debug!("Sending payload: {:?}", params);
        let response = self
            .client
            .get(format!("{}{}", self.base_url, endpoint))
            .basic_auth(&self.email, Some(&self.api_token))
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                error!("Received connection error: {}", e);
                ApiError::Transport(e)
            })?;

        let status = response.status();
        let text = response.text().await?;
        debug!("{}", text);
        debug!("Status code: {}", status.as_u16());

        if !status.is_success() {
            error!("Received HTTP error: {} for {}", status, endpoint);
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|source| ApiError::Decode { source, body: text })
    }
}

fn accepted(status: CommandStatus) -> ApiResult<CommandStatus> {
    match status.status {
        Some(false) => Err(ApiError::Rejected(
            status.error.unwrap_or_else(|| "unknown error".to_string()),
        )),
        _ => Ok(status),
    }
}
