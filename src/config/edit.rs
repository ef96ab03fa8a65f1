//! Value-returning edits on a validated project
//!
//! Nothing here mutates the receiver. Each edit builds a new document and runs
//! it through full validation again, so a failed edit leaves the caller with
//! the config it started from.

use uuid::Uuid;

use super::schema::{LayoutConfig, PlotType, ProjectConfig, Snapshot};
use super::validate::{parse_project_config, ROOT};
use crate::error::{Error, Result, ValidationError, ValidationErrors};

impl ProjectConfig {
    /// Replace the snapshot with the same id in place, or append it.
    pub fn upsert_snapshot(&self, snapshot: Snapshot) -> std::result::Result<ProjectConfig, ValidationErrors> {
        let mut next = self.clone();
        match next.snapshots.iter_mut().find(|s| s.id == snapshot.id) {
            Some(existing) => {
                tracing::debug!("Replacing snapshot {}", snapshot.id);
                *existing = snapshot;
            }
            None => {
                tracing::debug!("Appending snapshot {}", snapshot.id);
                next.snapshots.push(snapshot);
            }
        }
        next.revalidate()
    }

    /// Mark a snapshot deleted without removing it
    pub fn soft_delete_snapshot(&self, id: &str) -> Result<ProjectConfig> {
        let mut next = self.clone();
        let snapshot = next
            .snapshots
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::SnapshotNotFound(id.to_string()))?;
        snapshot.is_deleted = true;
        Ok(next.revalidate()?)
    }

    /// Point `lastViewedSnap` at `id`; an empty id clears it
    pub fn with_last_viewed(&self, id: &str) -> std::result::Result<ProjectConfig, ValidationErrors> {
        let mut next = self.clone();
        next.global_settings.last_viewed_snapshot_id = id.to_string();
        next.revalidate()
    }

    /// Snapshots that are not soft-deleted, in display order
    pub fn active_snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter().filter(|s| !s.is_deleted)
    }

    pub fn snapshot(&self, id: &str) -> Option<&Snapshot> {
        self.snapshots.iter().find(|s| s.id == id)
    }

    /// Resolve `lastViewedSnap`
    pub fn last_viewed(&self) -> Option<&Snapshot> {
        let id = &self.global_settings.last_viewed_snapshot_id;
        if id.is_empty() {
            return None;
        }
        self.snapshot(id)
    }

    fn revalidate(self) -> std::result::Result<ProjectConfig, ValidationErrors> {
        let raw = serde_json::to_value(&self).map_err(|e| {
            ValidationErrors::single(ValidationError::MalformedInput {
                path: ROOT.to_string(),
                message: e.to_string(),
            })
        })?;
        parse_project_config(&raw)
    }
}

impl Snapshot {
    /// A new, enabled snapshot with a generated id and the plot type's preset
    pub fn new(display_name: impl Into<String>, plot_type: PlotType) -> Self {
        Self {
            id: generate_snapshot_id(),
            description: String::new(),
            display_name: display_name.into(),
            subtitle: String::new(),
            summary_image: String::new(),
            is_enabled: true,
            is_deleted: false,
            layout: LayoutConfig::new(plot_type),
            camera: None,
        }
    }

    /// Replace the title, subtitle and HTML description shown in the player
    pub fn with_display_data(
        mut self,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.display_name = title.into();
        self.subtitle = subtitle.into();
        self.description = description.into();
        self
    }

    pub fn with_axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.layout.x_axis_attribute = x.into();
        self.layout.y_axis_attribute = y.into();
        self
    }
}

/// `snap-` followed by six characters of a v4 uuid
pub fn generate_snapshot_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("snap-{}", &uuid[..6])
}
