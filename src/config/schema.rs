//! Project document schema definitions
//!
//! Field names on the wire follow the player's settings document
//! (`projName`, `snapName`, `layout.settings`, ...). Values of these types are
//! only produced by [`parse_project_config`](super::parse_project_config), so
//! every instance has passed validation and carries fully defaulted render
//! settings.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use super::render::RenderSettings;

/// A project document: name, global settings and the ordered snapshot list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectConfig {
    #[serde(rename = "projName")]
    pub project_name: String,

    #[serde(rename = "settings")]
    pub global_settings: GlobalSettings,

    /// Display order is significant
    pub snapshots: Vec<Snapshot>,

    /// Player-level settings, kept verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<Map<String, Value>>,
}

impl<'de> Deserialize<'de> for ProjectConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        super::parse_project_config(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalSettings {
    /// Id of the snapshot shown on load; empty means none
    #[serde(rename = "lastViewedSnap")]
    pub last_viewed_snapshot_id: String,
}

/// A saved, named view within a project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: String,

    /// HTML description
    #[serde(rename = "descr")]
    pub description: String,

    #[serde(rename = "snapName")]
    pub display_name: String,

    pub subtitle: String,

    /// Image URL or base64 payload
    #[serde(rename = "summaryImg")]
    pub summary_image: String,

    pub is_enabled: bool,

    /// Soft delete marker; deleted snapshots stay in the document
    pub is_deleted: bool,

    pub layout: LayoutConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<Camera>,
}

/// Initial camera placement stored alongside a snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub normalize_coords: bool,
    pub r: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            normalize_coords: true,
            r: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutConfig {
    #[serde(rename = "plotType")]
    pub plot_type: PlotType,

    /// Node attribute used for horizontal placement (scatterplot/grid)
    #[serde(rename = "xaxis")]
    pub x_axis_attribute: String,

    /// Node attribute used for vertical placement (scatterplot/grid)
    #[serde(rename = "yaxis")]
    pub y_axis_attribute: String,

    #[serde(rename = "settings")]
    pub render_settings: RenderSettings,
}

impl LayoutConfig {
    /// Layout with the render preset for `plot_type` and no axis attributes
    pub fn new(plot_type: PlotType) -> Self {
        Self {
            plot_type,
            x_axis_attribute: String::new(),
            y_axis_attribute: String::new(),
            render_settings: RenderSettings::for_plot_type(plot_type),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotType {
    Original,
    Scatterplot,
    Grid,
    Geo,
}

impl PlotType {
    pub const VARIANTS: &'static [&'static str] = &["original", "scatterplot", "grid", "geo"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlotType::Original => "original",
            PlotType::Scatterplot => "scatterplot",
            PlotType::Grid => "grid",
            PlotType::Geo => "geo",
        }
    }
}

impl FromStr for PlotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(PlotType::Original),
            "scatterplot" => Ok(PlotType::Scatterplot),
            "grid" => Ok(PlotType::Grid),
            "geo" => Ok(PlotType::Geo),
            other => Err(format!("unknown plot type '{}'", other)),
        }
    }
}

impl fmt::Display for PlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
