//! Config command handler

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use printwatch::config::Config;
use printwatch::domain::value_objects::normalize_extension;

use crate::cli::ConfigAction;

use super::Context;

pub fn cmd_config(ctx: &Context, action: Option<ConfigAction>) -> Result<()> {
    let action = action.unwrap_or(ConfigAction::Show);
    if action == ConfigAction::Show {
        return show(ctx);
    }

    // Edits start from the file itself so environment overrides are not persisted
    let mut config = load_for_edit(&ctx.config_path)?;

    let (changed, message) = match action {
        ConfigAction::Show => return show(ctx),
        ConfigAction::AddFolder { dir } => {
            let dir = absolute(&dir)?;
            if !dir.is_dir() {
                tracing::warn!(path = %dir.display(), "folder does not exist yet");
            }
            let added = config.add_watch_folder(&dir);
            (added, format!("watch folder {}", dir.display()))
        }
        ConfigAction::RemoveFolder { dir } => {
            let removed = config.remove_watch_folder(&dir)
                || config.remove_watch_folder(&absolute(&dir)?);
            (removed, format!("watch folder {}", dir.display()))
        }
        ConfigAction::AddExtension { ext } => {
            let normalized = normalize_extension(&ext)
                .with_context(|| format!("invalid extension: {ext:?}"))?;
            let added = config.supported_extensions.insert(&normalized);
            (added, format!("extension {normalized}"))
        }
        ConfigAction::RemoveExtension { ext } => {
            let normalized = normalize_extension(&ext)
                .with_context(|| format!("invalid extension: {ext:?}"))?;
            let removed = config.supported_extensions.remove(&normalized);
            (removed, format!("extension {normalized}"))
        }
    };

    if changed {
        config
            .save(&ctx.config_path)
            .with_context(|| format!("failed to save {}", ctx.config_path.display()))?;
    }

    if ctx.json {
        super::emit_json(&serde_json::json!({
            "event": "config_updated",
            "changed": changed,
            "target": message,
        }));
    } else if changed {
        println!("Updated {message}");
    } else {
        println!("No change: {message}");
    }
    Ok(())
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.json {
        let mut value = serde_json::to_value(&ctx.config)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("event".to_string(), serde_json::json!("config"));
            obj.insert(
                "path".to_string(),
                serde_json::json!(ctx.config_path.display().to_string()),
            );
        }
        super::emit_json(&value);
    } else {
        println!("# {}", ctx.config_path.display());
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    }
    Ok(())
}

/// A corrupt file is an error here rather than being replaced by defaults
fn load_for_edit(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    Config::load(path).with_context(|| format!("failed to load {}", path.display()))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}
