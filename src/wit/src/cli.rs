use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use wit_sdk::client::Client;
use wit_sdk::entities::{EntityDefinition, EntityValue};

/// Command-line client for the wit.ai HTTP API.
#[derive(Parser, Debug)]
#[command(name = "wit")]
pub struct WitCli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the corpus of utterances the service has processed so far.
    Corpus,
    /// Create (or overwrite) a named entity definition on the service.
    CreateEntity {
        /// Read the entity definition from a JSON file instead of sending the
        /// built-in favorite_city definition.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl WitCli {
    /// The operation to run; a bare invocation lists the corpus.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Corpus)
    }
}

/// Runs the given command against the service and returns the raw response
/// body. The body comes back for every status, the caller prints it as-is.
pub async fn run(client: &Client, command: Command) -> Result<String, anyhow::Error> {
    let response = match command {
        Command::Corpus => client.corpus().await?,
        Command::CreateEntity { file } => {
            let entity = match file {
                Some(path) => read_entity_definition(&path)?,
                None => favorite_city(),
            };
            client.create_entity(&entity).await?
        }
    };

    Ok(response.body)
}

fn read_entity_definition(path: &Path) -> Result<EntityDefinition, anyhow::Error> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read entity definition '{}'", path.display()))?;
    let entity = serde_json::from_str(&content)
        .with_context(|| format!("invalid entity definition in '{}'", path.display()))?;
    Ok(entity)
}

/// The entity definition sent when `create-entity` is not given a file.
fn favorite_city() -> EntityDefinition {
    EntityDefinition {
        doc: "A city that I hate".to_string(),
        id: "favorite_city".to_string(),
        values: vec![EntityValue::new(
            "Paris".to_string(),
            vec![
                "Paris".to_string(),
                "City of Light".to_string(),
                "Capital of France".to_string(),
            ],
        )],
    }
}
