use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Domain {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub r#type: String,
    pub content: String,
    #[serde(default)]
    pub priority: i64,
}

/// A record that does not exist remotely yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub r#type: String,
    pub priority: i64,
    pub name: String,
    pub content: String,
}

impl NewRecord {
    pub const DEFAULT_PRIORITY: i64 = 1;

    pub fn into_record(self, id: i64) -> Record {
        Record {
            id,
            name: self.name,
            r#type: self.r#type,
            content: self.content,
            priority: self.priority,
        }
    }
}

// Body returned by createrecord/, updaterecord/ and deleterecord/
#[derive(Debug, Default, Deserialize)]
pub struct CommandStatus {
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}
