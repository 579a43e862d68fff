// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Configuration parsing and catalog export.
//!
//! This module reads the campus configuration from YAML and exports the
//! classroom catalog in YAML and JSON formats. Exports never include the
//! accepted passwords.

use crate::config::AppConfig;
use crate::models::catalog::Catalog;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a configuration document without validating it.
pub fn parse_config_yaml(yaml: &str) -> Result<AppConfig> {
    let config: AppConfig =
        serde_yaml::from_str(yaml).context("Failed to parse campus configuration")?;
    Ok(config)
}

/// Export the catalog to YAML format.
pub fn export_yaml(catalog: &Catalog, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(catalog)?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export the catalog to JSON format.
pub fn export_json(catalog: &Catalog, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export the catalog, choosing the format from the file extension.
pub fn export_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => export_yaml(catalog, path),
        Some("json") => export_json(catalog, path),
        other => anyhow::bail!("Unsupported file extension: {:?}", other),
    }
}
