use crate::api::models::NewRecord;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Play with the Rage4 DNS API.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "rage4")]
pub struct Cli {
    /// Enable debug messages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the YAML configuration file
    #[arg(short, long, env = "RAGE4_CONFIG", default_value = "config.yaml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new record: <TYPE> [PRIORITY] <NAME> <CONTENT>
    Create {
        #[arg(num_args = 3..=4, required = true)]
        args: Vec<String>,
    },

    /// Show records by type (A, AAAA, CNAME, TXT), by name, or `all`
    Show { search: String },

    /// Delete every record with the given name
    Delete { name: String },

    /// Change the content of every record with the given name
    Update { name: String, content: String },
}

/// Splits `create`'s positionals. Three values carry no priority, four
/// carry it in second place.
pub fn parse_new_record(args: &[String]) -> Result<NewRecord> {
    let (r#type, priority, name, content) = match args {
        [t, n, c] => (t, NewRecord::DEFAULT_PRIORITY, n, c),
        [t, p, n, c] => {
            let priority = p
                .parse::<i64>()
                .with_context(|| format!("Invalid priority: {}", p))?;
            (t, priority, n, c)
        }
        _ => bail!("Expected <TYPE> [PRIORITY] <NAME> <CONTENT>"),
    };

    Ok(NewRecord {
        r#type: r#type.clone(),
        priority,
        name: name.clone(),
        content: content.clone(),
    })
}
