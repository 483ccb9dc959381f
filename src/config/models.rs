use serde::{Deserialize, Serialize};
use validator::Validate;

/// Layout of the YAML config file. Every key is optional so the
/// environment can fill in whatever the file leaves out.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub rage4: Rage4Section,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Rage4Section {
    pub username: Option<String>,
    pub api_token: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "API token cannot be empty"))]
    pub api_token: String,

    #[validate(url(message = "Base URL must be a valid URL"))]
    pub base_url: String,
}
