use super::error::ApiResult;
use super::models::*;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait DnsApiClient: Send + Sync {
    async fn get_domains(&self) -> ApiResult<Vec<Domain>>;
    async fn get_records(&self, domain: &Domain) -> ApiResult<Vec<Record>>;
    async fn create_record(&self, domain: &Domain, record: &NewRecord) -> ApiResult<CommandStatus>;
    async fn update_record(&self, record: &Record, content: &str) -> ApiResult<CommandStatus>;
    async fn delete_record(&self, id: i64) -> ApiResult<CommandStatus>;
}
