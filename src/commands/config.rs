//! Config command handler

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use avro_decorator::application::{ClusterEntry, ConfigurationStore};
use avro_decorator::infrastructure::shell::open_in_editor;
use avro_decorator::infrastructure::{lock_path_for, PropertiesFileRepository, TerminalShell};
use avro_decorator::{ClusterId, DecoratorSettings, EndpointInput};

use crate::cli::ConfigAction;

/// Option names whose values are masked when listed.
const SECRET_MARKERS: &[&str] = &["auth", "password", "secret", "token"];

pub fn cmd_config(settings: &DecoratorSettings, action: ConfigAction, json: bool) -> Result<ExitCode> {
    let path = &settings.properties_path;

    match action {
        ConfigAction::Path => {
            let lock = lock_path_for(path);
            if json {
                super::emit_json(&serde_json::json!({
                    "event": "data",
                    "command": "config path",
                    "path": path.display().to_string(),
                    "lock_path": lock.display().to_string(),
                }))?;
            } else {
                println!("{}", path.display());
                println!("lock file: {}", lock.display());
            }
        }
        ConfigAction::List => list(&open_store(path)?, json)?,
        ConfigAction::Set { cluster, input } => {
            let cluster = ClusterId::new(cluster);
            let Some(input) = EndpointInput::parse(&input)
                .with_context(|| format!("Cannot process URL for {}", cluster))?
            else {
                bail!("endpoint input for {} is empty", cluster);
            };
            let store = open_store(path)?;
            store.apply(&cluster, &input);
            store.save()?;
            tracing::info!(cluster = %cluster, endpoint = %input.endpoint, "endpoint stored");
            report(json, "set", &cluster, &format!("Stored {} for {}", input.endpoint, cluster))?;
        }
        ConfigAction::Unset { cluster } => {
            let cluster = ClusterId::new(cluster);
            let store = open_store(path)?;
            if !store.remove_cluster(&cluster) {
                report(json, "unset", &cluster, &format!("Nothing stored for {}", cluster))?;
                return Ok(ExitCode::FAILURE);
            }
            store.save()?;
            report(json, "unset", &cluster, &format!("Removed {}", cluster))?;
        }
        ConfigAction::Edit => {
            let store = open_store(path)?;
            open_in_editor(store.path())
                .with_context(|| format!("Cannot open {}", store.path().display()))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the store, refusing a file we cannot read: a save would drop its content.
fn open_store(path: &Path) -> Result<ConfigurationStore> {
    ConfigurationStore::try_load(
        Arc::new(PropertiesFileRepository::with_path(path.to_path_buf())),
        Arc::new(TerminalShell::new()),
    )
    .with_context(|| format!("Cannot load {}", path.display()))
}

fn list(store: &ConfigurationStore, json: bool) -> Result<()> {
    let clusters: Vec<ClusterEntry> = store.clusters().into_iter().map(mask_secrets).collect();

    if json {
        super::emit_json(&serde_json::json!({
            "event": "data",
            "command": "config list",
            "path": store.path().display().to_string(),
            "clusters": clusters,
        }))?;
        return Ok(());
    }

    if clusters.is_empty() {
        println!("No schema registry endpoints in {}", store.path().display());
        return Ok(());
    }
    for entry in &clusters {
        println!("{} = {}", entry.cluster, entry.endpoint);
        for (option, value) in &entry.config {
            println!("    {} = {}", option, value);
        }
    }
    Ok(())
}

fn report(json: bool, command: &str, cluster: &ClusterId, message: &str) -> Result<()> {
    if json {
        super::emit_json(&serde_json::json!({
            "event": "config",
            "command": command,
            "cluster": cluster,
            "message": message,
        }))?;
    } else {
        println!("{}", message);
    }
    Ok(())
}

fn mask_secrets(mut entry: ClusterEntry) -> ClusterEntry {
    for (option, value) in entry.config.iter_mut() {
        let lower = option.to_ascii_lowercase();
        if SECRET_MARKERS.iter().any(|marker| lower.contains(marker))
            && !lower.ends_with("credentials.source")
        {
            *value = "****".to_string();
        }
    }
    entry
}
