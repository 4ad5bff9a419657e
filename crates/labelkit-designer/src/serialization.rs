//! Serialization and deserialization for label projects.
//!
//! Implements save/load for .lblk project files using pretty-printed JSON
//! with complete design state preservation. The override map is written as
//! an explicit `{slot, override}` list, never as a native map, so the
//! encoding stays portable and order-independent.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::master::MasterLabel;
use crate::overrides::{LabelOverride, OverrideStore};
use crate::template::LabelTemplate;

/// Project file format version.
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete project file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    pub version: String,
    pub metadata: ProjectMetadata,
    pub template: LabelTemplate,
    pub master: MasterLabel,
    #[serde(default)]
    pub overrides: Vec<SlotOverrideEntry>,
}

/// Project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// One serialized slot override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotOverrideEntry {
    pub slot: usize,
    #[serde(rename = "override")]
    pub record: LabelOverride,
}

impl ProjectFile {
    /// Creates a new project file around a template and master.
    pub fn new(name: impl Into<String>, template: LabelTemplate, master: MasterLabel) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: ProjectMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            template,
            master,
            overrides: Vec::new(),
        }
    }

    /// Captures the override store as the explicit list form.
    pub fn set_overrides(&mut self, store: &OverrideStore) {
        self.overrides = store
            .iter()
            .map(|(slot, record)| SlotOverrideEntry {
                slot,
                record: record.clone(),
            })
            .collect();
    }

    /// Rebuilds the override store from the list form.
    ///
    /// Duplicate slot entries should not occur; when they do, the last entry
    /// wins, matching plain map insertion.
    pub fn override_store(&self) -> OverrideStore {
        let mut store = OverrideStore::new();
        for entry in &self.overrides {
            *store.ensure(entry.slot) = entry.record.clone();
        }
        store
    }

    /// Saves the project to a file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize project")?;
        std::fs::write(path.as_ref(), json).context("Failed to write project file")?;
        Ok(())
    }

    /// Loads a project from a file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read project file")?;

        let mut project: ProjectFile =
            serde_json::from_str(&content).context("Failed to parse project file")?;

        if project.version != FILE_FORMAT_VERSION {
            tracing::warn!(
                version = %project.version,
                "project file version differs from {}, loading anyway",
                FILE_FORMAT_VERSION
            );
        }

        project.metadata.modified = Utc::now();
        Ok(project)
    }
}
