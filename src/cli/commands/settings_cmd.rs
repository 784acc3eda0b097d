//! settings command - Print saved argument values

use anyhow::{Context as _, Result};
use serde_json::{Map, Value};

use crate::cli::Context;
use crate::core::settings::{SettingsSnapshot, SettingsStore};
use crate::inputs::catalog;
use crate::ui::output::OutputMode;

const REDACTED: &str = "********";

/// Print the settings snapshot, with masked values redacted.
pub fn show(ctx: &Context) -> Result<()> {
    let store = ctx.settings_store();
    if !store.exists() {
        ctx.logger
            .info(format!("No settings saved at {}.", store.location()));
        if ctx.logger.mode() == OutputMode::Json {
            ctx.logger.json(&Value::Object(Map::new()));
        }
        return Ok(());
    }

    let snapshot = store
        .load()
        .with_context(|| format!("Failed to load settings from {}", store.location()))?;
    let redacted = redact(&snapshot);

    match ctx.logger.mode() {
        OutputMode::Json => {
            let map: Map<String, Value> = redacted
                .iter()
                .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                .collect();
            ctx.logger.json(&Value::Object(map));
        }
        OutputMode::Friendly => {
            ctx.logger.info(format!("Settings ({}):", store.location()));
            let lines: Vec<String> = redacted
                .iter()
                .map(|(k, v)| format!("  {} = {}", k, v))
                .collect();
            ctx.logger.success(lines);
        }
    }
    Ok(())
}

fn redact(snapshot: &SettingsSnapshot) -> SettingsSnapshot {
    snapshot
        .iter()
        .map(|(k, v)| {
            if catalog::is_masked(k) {
                (k, REDACTED)
            } else {
                (k, v)
            }
        })
        .collect()
}
