use crate::api::{models::*, ApiError, DnsApiClient};
use log::{debug, info};
use thiserror::Error;

/// Record types `show` treats as a type filter rather than a name.
pub const RECORD_TYPES: [&str; 4] = ["A", "AAAA", "CNAME", "TXT"];

const SHOW_ALL: &str = "all";

#[derive(Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Record {0} already exists")]
    AlreadyExists(String),

    #[error("Unable to find entry {0}")]
    NotFound(String),

    #[error("No domain available to create the record in")]
    NoDomain,
}

impl RecordError {
    /// Failures caused by the request itself rather than the remote end.
    pub fn is_logical(&self) -> bool {
        !matches!(self, RecordError::Api(_))
    }
}

pub type RecordResult<T> = std::result::Result<T, RecordError>;

/// Domains and records of the account, loaded once and kept in step with
/// the changes made through this manager.
pub struct RecordManager<C> {
    client: C,
    domains: Vec<Domain>,
    records: Vec<Record>,
}

impl<C: DnsApiClient> RecordManager<C> {
    pub async fn load(client: C) -> RecordResult<Self> {
        let domains = client.get_domains().await?;
        debug!("Loaded {} domain(s)", domains.len());

        let mut records = Vec::new();
        for domain in &domains {
            let mut found = client.get_records(domain).await?;
            debug!("Loaded {} record(s) for {}", found.len(), domain.name);
            records.append(&mut found);
        }

        Ok(Self {
            client,
            domains,
            records,
        })
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn show(&self, query: &str) -> RecordResult<Vec<&Record>> {
        let matches: Vec<&Record> = if query == SHOW_ALL {
            self.records.iter().collect()
        } else if RECORD_TYPES.contains(&query) {
            self.records.iter().filter(|r| r.r#type == query).collect()
        } else {
            self.records.iter().filter(|r| r.name == query).collect()
        };

        if matches.is_empty() {
            return Err(RecordError::NotFound(query.to_string()));
        }
        Ok(matches)
    }

    pub async fn add(&mut self, record: NewRecord) -> RecordResult<()> {
        if self.records.iter().any(|r| r.name == record.name) {
            return Err(RecordError::AlreadyExists(record.name));
        }
        let domain = self.domains.first().ok_or(RecordError::NoDomain)?;

        let status = self.client.create_record(domain, &record).await?;
        info!(
            "Created record: {} {} {}",
            record.name, record.r#type, record.content
        );

        // Only records with a known id join the snapshot.
        if let Some(id) = status.id {
            self.records.push(record.into_record(id));
        }
        Ok(())
    }

    /// Deletes every record called `name`, returning the deleted ids.
    pub async fn delete(&mut self, name: &str) -> RecordResult<Vec<i64>> {
        let ids = self.ids_named(name)?;

        for id in &ids {
            self.client.delete_record(*id).await?;
            self.records.retain(|r| r.id != *id);
            info!("Deleted record: {}", id);
        }
        Ok(ids)
    }

    /// Points every record called `name` at `content`, returning the updated ids.
    pub async fn update(&mut self, name: &str, content: &str) -> RecordResult<Vec<i64>> {
        let ids = self.ids_named(name)?;

        for record in self.records.iter_mut().filter(|r| ids.contains(&r.id)) {
            self.client.update_record(record, content).await?;
            record.content = content.to_string();
            info!("Updated record: {}", record.id);
        }
        Ok(ids)
    }

    fn ids_named(&self, name: &str) -> RecordResult<Vec<i64>> {
        let ids: Vec<i64> = self
            .records
            .iter()
            .filter(|r| r.name == name)
            .map(|r| r.id)
            .collect();

        if ids.is_empty() {
            return Err(RecordError::NotFound(name.to_string()));
        }
        Ok(ids)
    }
}
