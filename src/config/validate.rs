//! Validation and normalization of raw project documents
//!
//! The walker never stops at the first problem: every issue found is
//! collected with the path of the field it concerns, and a typed value is only
//! returned when the whole document is clean.

use serde_json::{Map, Value};
use std::collections::HashMap;

use super::render::{self, PartialRenderSettings, RenderSettings, ValueRule};
use super::schema::{Camera, GlobalSettings, LayoutConfig, PlotType, ProjectConfig, Snapshot};
use crate::error::{ValidationError, ValidationErrors};

/// Path used for errors about the document root
pub const ROOT: &str = "$";

/// Validate `raw` and resolve every default.
///
/// Unknown keys are rejected everywhere except inside a layout's render
/// settings, where they are preserved.
pub fn parse_project_config(raw: &Value) -> Result<ProjectConfig, ValidationErrors> {
    let mut errors = Vec::new();
    let project = read_project(raw, &mut errors);

    match (project, ValidationErrors::from_vec(errors)) {
        (Some(project), None) => {
            tracing::debug!(
                "Validated project '{}' with {} snapshot(s)",
                project.project_name,
                project.snapshots.len()
            );
            Ok(project)
        }
        (_, Some(errors)) => {
            tracing::debug!("Project document rejected with {} error(s)", errors.errors().len());
            Err(errors)
        }
        (None, None) => Err(ValidationErrors::single(malformed(ROOT, "document could not be read"))),
    }
}

fn join(path: &str, key: &str) -> String {
    if path == ROOT {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn index(path: &str, i: usize) -> String {
    format!("{}[{}]", path, i)
}

fn malformed(path: &str, message: &str) -> ValidationError {
    ValidationError::MalformedInput {
        path: path.to_string(),
        message: message.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

fn expected(path: &str, what: &str, found: &Value) -> ValidationError {
    malformed(path, &format!("expected {}, found {}", what, type_name(found)))
}

fn as_object<'a>(value: &'a Value, path: &str, errors: &mut Vec<ValidationError>) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        other => {
            errors.push(expected(path, "a mapping", other));
            None
        }
    }
}

/// Strict reader over one mapping: tracks which keys were consumed so the
/// rest can be reported as unknown.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: &'a str,
    seen: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    fn new(map: &'a Map<String, Value>, path: &'a str) -> Self {
        Self {
            map,
            path,
            seen: Vec::new(),
        }
    }

    fn path_of(&self, name: &str) -> String {
        join(self.path, name)
    }

    /// Look up `name` or its alias. `null` counts as absent.
    fn get(&mut self, name: &'a str, alias: Option<&'a str>, errors: &mut Vec<ValidationError>) -> Option<&'a Value> {
        let map = self.map;
        self.seen.push(name);
        let primary = map.get(name).filter(|v| !v.is_null());
        let secondary = match alias {
            Some(alias) => {
                self.seen.push(alias);
                map.get(alias).filter(|v| !v.is_null())
            }
            None => None,
        };

        match (primary, secondary) {
            (Some(_), Some(_)) => {
                errors.push(malformed(
                    &self.path_of(alias.unwrap_or(name)),
                    &format!("duplicates '{}'", name),
                ));
                primary
            }
            (Some(v), None) | (None, Some(v)) => Some(v),
            (None, None) => None,
        }
    }

    fn required_str(&mut self, name: &'a str, alias: Option<&'a str>, errors: &mut Vec<ValidationError>) -> Option<String> {
        let path = self.path_of(name);
        match self.get(name, alias, errors) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::String(_)) | None => {
                errors.push(ValidationError::MissingRequiredField { path });
                None
            }
            Some(other) => {
                errors.push(expected(&path, "a string", other));
                None
            }
        }
    }

    fn optional_str(&mut self, name: &'a str, alias: Option<&'a str>, errors: &mut Vec<ValidationError>) -> String {
        let path = self.path_of(name);
        match self.get(name, alias, errors) {
            Some(Value::String(s)) => s.clone(),
            None => String::new(),
            Some(other) => {
                errors.push(expected(&path, "a string", other));
                String::new()
            }
        }
    }

    fn optional_bool(&mut self, name: &'a str, default: bool, errors: &mut Vec<ValidationError>) -> bool {
        let path = self.path_of(name);
        match self.get(name, None, errors) {
            Some(Value::Bool(b)) => *b,
            None => default,
            Some(other) => {
                errors.push(expected(&path, "a boolean", other));
                default
            }
        }
    }

    fn optional_f64(&mut self, name: &'a str, default: f64, errors: &mut Vec<ValidationError>) -> f64 {
        let path = self.path_of(name);
        match self.get(name, None, errors) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
            None => default,
            Some(other) => {
                errors.push(expected(&path, "a number", other));
                default
            }
        }
    }

    /// Report every key that no getter asked for
    fn finish(self, errors: &mut Vec<ValidationError>) {
        for key in self.map.keys() {
            if !self.seen.contains(&key.as_str()) {
                errors.push(ValidationError::UnknownField {
                    path: join(self.path, key),
                });
            }
        }
    }
}

fn read_project(raw: &Value, errors: &mut Vec<ValidationError>) -> Option<ProjectConfig> {
    let map = as_object(raw, ROOT, errors)?;
    let mut fields = Fields::new(map, ROOT);

    let project_name = fields.required_str("projName", Some("projectName"), errors);

    let global_settings = match fields.get("settings", Some("globalSettings"), errors) {
        Some(value) => read_global_settings(value, "settings", errors),
        None => Some(GlobalSettings::default()),
    };

    let mut snapshot_ids = Vec::new();
    let snapshots = match fields.get("snapshots", None, errors) {
        Some(Value::Array(items)) => {
            let mut snapshots = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let path = index("snapshots", i);
                if let Some(id) = item.get("id").and_then(Value::as_str).filter(|id| !id.is_empty()) {
                    snapshot_ids.push((i, id));
                }
                if let Some(snapshot) = read_snapshot(item, &path, errors) {
                    snapshots.push(snapshot);
                }
            }
            Some(snapshots)
        }
        Some(other) => {
            errors.push(expected("snapshots", "a sequence", other));
            None
        }
        None => Some(Vec::new()),
    };

    let player = match fields.get("player", None, errors) {
        Some(value) => as_object(value, "player", errors).cloned(),
        None => None,
    };

    fields.finish(errors);

    check_unique_ids(&snapshot_ids, errors);

    if let Some(settings) = &global_settings {
        let last = settings.last_viewed_snapshot_id.as_str();
        if !last.is_empty() && !snapshot_ids.iter().any(|(_, id)| *id == last) {
            errors.push(ValidationError::DanglingReference {
                path: "settings.lastViewedSnap".to_string(),
                id: last.to_string(),
            });
        }
    }

    Some(ProjectConfig {
        project_name: project_name?,
        global_settings: global_settings?,
        snapshots: snapshots?,
        player,
    })
}

fn read_global_settings(value: &Value, path: &str, errors: &mut Vec<ValidationError>) -> Option<GlobalSettings> {
    let map = as_object(value, path, errors)?;
    let mut fields = Fields::new(map, path);
    let last_viewed_snapshot_id = fields.optional_str("lastViewedSnap", Some("lastViewedSnapshotId"), errors);
    fields.finish(errors);

    Some(GlobalSettings {
        last_viewed_snapshot_id,
    })
}

/// Every repeat of an id is reported against its first occurrence
fn check_unique_ids(ids: &[(usize, &str)], errors: &mut Vec<ValidationError>) {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (i, id) in ids {
        match first_seen.get(id) {
            Some(first) => errors.push(ValidationError::DuplicateSnapshotId {
                path: join(&index("snapshots", *i), "id"),
                id: id.to_string(),
                first: *first,
                second: *i,
            }),
            None => {
                first_seen.insert(*id, *i);
            }
        }
    }
}

fn read_snapshot(value: &Value, path: &str, errors: &mut Vec<ValidationError>) -> Option<Snapshot> {
    let map = as_object(value, path, errors)?;
    let mut fields = Fields::new(map, path);

    let id = fields.required_str("id", None, errors);
    let description = fields.optional_str("descr", Some("description"), errors);
    let display_name = fields.required_str("snapName", Some("displayName"), errors);
    let subtitle = fields.optional_str("subtitle", None, errors);
    let summary_image = fields.optional_str("summaryImg", Some("summaryImage"), errors);
    let is_enabled = fields.optional_bool("isEnabled", true, errors);
    let is_deleted = fields.optional_bool("isDeleted", false, errors);

    let layout_path = join(path, "layout");
    let layout = match fields.get("layout", None, errors) {
        Some(value) => read_layout(value, &layout_path, errors),
        None => {
            errors.push(ValidationError::MissingRequiredField { path: layout_path });
            None
        }
    };

    let camera_path = join(path, "camera");
    let camera = match fields.get("camera", None, errors) {
        Some(value) => read_camera(value, &camera_path, errors).map(Some),
        None => Some(None),
    };

    fields.finish(errors);

    Some(Snapshot {
        id: id?,
        description,
        display_name: display_name?,
        subtitle,
        summary_image,
        is_enabled,
        is_deleted,
        layout: layout?,
        camera: camera?,
    })
}

fn read_camera(value: &Value, path: &str, errors: &mut Vec<ValidationError>) -> Option<Camera> {
    let map = as_object(value, path, errors)?;
    let defaults = Camera::default();
    let mut fields = Fields::new(map, path);

    let camera = Camera {
        normalize_coords: fields.optional_bool("normalizeCoords", defaults.normalize_coords, errors),
        r: fields.optional_f64("r", defaults.r, errors),
        x: fields.optional_f64("x", defaults.x, errors),
        y: fields.optional_f64("y", defaults.y, errors),
    };
    fields.finish(errors);

    Some(camera)
}

fn read_layout(value: &Value, path: &str, errors: &mut Vec<ValidationError>) -> Option<LayoutConfig> {
    let map = as_object(value, path, errors)?;
    let mut fields = Fields::new(map, path);

    let plot_path = join(path, "plotType");
    let plot_type = match fields.get("plotType", None, errors) {
        Some(Value::String(s)) => match s.parse::<PlotType>() {
            Ok(plot_type) => Some(plot_type),
            Err(_) => {
                errors.push(ValidationError::InvalidEnumValue {
                    path: plot_path,
                    value: s.clone(),
                    allowed: PlotType::VARIANTS,
                });
                None
            }
        },
        Some(other) => {
            errors.push(expected(&plot_path, "a string", other));
            None
        }
        None => {
            errors.push(ValidationError::MissingRequiredField { path: plot_path });
            None
        }
    };

    let x_axis_attribute = fields.optional_str("xaxis", Some("xAxisAttribute"), errors);
    let y_axis_attribute = fields.optional_str("yaxis", Some("yAxisAttribute"), errors);

    let settings_path = join(path, "settings");
    let render_settings = match fields.get("settings", Some("renderSettings"), errors) {
        Some(value) => as_object(value, &settings_path, errors)
            .and_then(|map| read_render_settings(map, &settings_path, errors)),
        None => Some(RenderSettings::default()),
    };

    fields.finish(errors);

    Some(LayoutConfig {
        plot_type: plot_type?,
        x_axis_attribute,
        y_axis_attribute,
        render_settings: render_settings?,
    })
}

/// Check every present key against its rule, then merge defaults and build
/// the typed settings. Unknown keys pass through.
pub(crate) fn read_render_settings(
    partial: &PartialRenderSettings,
    path: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<RenderSettings> {
    let before = errors.len();

    for (key, value) in partial {
        match render::rule_for(key) {
            Some(rule) => check_rule(rule, value, &join(path, key), errors),
            None => tracing::debug!("Preserving unrecognized render setting: {}", join(path, key)),
        }
    }

    if errors.len() > before {
        return None;
    }

    let mut merged = render::merge_defaults(partial);
    for (key, value) in merged.iter_mut() {
        if let (Some(ValueRule::Count), Some(n)) = (render::rule_for(key), count_value(value)) {
            *value = Value::from(n);
        }
    }
    match serde_json::from_value(Value::Object(merged)) {
        Ok(settings) => Some(settings),
        Err(e) => {
            errors.push(malformed(path, &e.to_string()));
            None
        }
    }
}

fn check_rule(rule: ValueRule, value: &Value, path: &str, errors: &mut Vec<ValidationError>) {
    match rule {
        ValueRule::Opaque => {}
        ValueRule::Bool => {
            if !value.is_boolean() {
                errors.push(expected(path, "a boolean", value));
            }
        }
        ValueRule::Number => {
            if !value.is_number() {
                errors.push(expected(path, "a number", value));
            }
        }
        ValueRule::Ratio => match value.as_f64() {
            Some(n) if (0.0..=1.0).contains(&n) => {}
            Some(n) => errors.push(ValidationError::InvalidRange {
                path: path.to_string(),
                value: n,
                min: 0.0,
                max: 1.0,
            }),
            None => errors.push(expected(path, "a number", value)),
        },
        ValueRule::Count => {
            if count_value(value).is_none() {
                errors.push(expected(path, "a non-negative integer", value));
            }
        }
        ValueRule::Text => {
            if !value.is_string() {
                errors.push(expected(path, "a string", value));
            }
        }
        ValueRule::Color => check_color(value, path, errors),
        ValueRule::OneOf(allowed) => match value.as_str() {
            Some(s) if allowed.contains(&s) => {}
            Some(s) => errors.push(ValidationError::InvalidEnumValue {
                path: path.to_string(),
                value: s.to_string(),
                allowed,
            }),
            None => errors.push(expected(path, "a string", value)),
        },
        ValueRule::Palette => match value {
            Value::Array(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    let entry_path = index(path, i);
                    let Some(map) = as_object(entry, &entry_path, errors) else {
                        continue;
                    };
                    match map.get("col") {
                        Some(col) => check_color(col, &join(&entry_path, "col"), errors),
                        None => errors.push(ValidationError::MissingRequiredField {
                            path: join(&entry_path, "col"),
                        }),
                    }
                }
            }
            other => errors.push(expected(path, "a sequence", other)),
        },
    }
}

/// A count fits in `u32`. Whole floats such as `1500.0` are accepted.
fn count_value(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    let n = value.as_f64()?;
    if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) {
        Some(n as u32)
    } else {
        None
    }
}

fn check_color(value: &Value, path: &str, errors: &mut Vec<ValidationError>) {
    match value.as_str() {
        Some(s) if render::is_color(s) => {}
        Some(s) => errors.push(ValidationError::InvalidColor {
            path: path.to_string(),
            value: s.to_string(),
        }),
        None => errors.push(expected(path, "a color string", value)),
    }
}
