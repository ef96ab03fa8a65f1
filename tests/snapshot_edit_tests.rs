//! Snapshot editing tests
//!
//! Run with: cargo test --test snapshot_edit_tests
//! Edits return new configs and never touch the one they start from.

use mappr_config::config::{parse_project_config, EdgeDirection, PlotType, ProjectConfig, Snapshot};
use mappr_config::{Error, ValidationError};
use serde_json::json;

fn project_ab() -> ProjectConfig {
    parse_project_config(&json!({
        "projName": "Edits",
        "settings": { "lastViewedSnap": "a" },
        "snapshots": [
            { "id": "a", "snapName": "A", "layout": { "plotType": "original" } },
            { "id": "b", "snapName": "B", "layout": { "plotType": "scatterplot" } }
        ]
    }))
    .unwrap()
}

fn ids(project: &ProjectConfig) -> Vec<&str> {
    project.snapshots.iter().map(|s| s.id.as_str()).collect()
}

// ============================================================================
// Upsert
// ============================================================================

#[test]
fn test_upsert_replaces_in_place() {
    let project = project_ab();
    let mut replacement = project.snapshots[0].clone();
    replacement.display_name = "A prime".to_string();
    replacement.layout.plot_type = PlotType::Geo;

    let updated = project.upsert_snapshot(replacement).unwrap();

    assert_eq!(ids(&updated), vec!["a", "b"]);
    assert_eq!(updated.snapshots[0].display_name, "A prime");
    assert_eq!(updated.snapshots[0].layout.plot_type, PlotType::Geo);
    assert_eq!(project.snapshots[0].display_name, "A");
    println!("✓ Upsert kept position of replaced snapshot");
}

#[test]
fn test_upsert_appends_new_id() {
    let project = project_ab();
    let mut c = Snapshot::new("C", PlotType::Grid);
    c.id = "c".to_string();

    let updated = project.upsert_snapshot(c).unwrap();

    assert_eq!(ids(&updated), vec!["a", "b", "c"]);
    assert_eq!(ids(&project), vec!["a", "b"]);
}

#[test]
fn test_upsert_validation_failure_leaves_original() {
    let project = project_ab();
    let before = project.clone();

    let mut bad = project.snapshots[1].clone();
    bad.layout.render_settings.node_unselected_opacity = 1.5;

    let errors = project.upsert_snapshot(bad).unwrap_err();
    assert!(matches!(
        errors.at("snapshots[1].layout.settings.nodeUnselectedOpacity"),
        Some(ValidationError::InvalidRange { .. })
    ));
    assert_eq!(project, before);
}

#[test]
fn test_upsert_rejects_empty_display_name() {
    let project = project_ab();
    let mut bad = Snapshot::new("", PlotType::Original);
    bad.id = "c".to_string();

    let errors = project.upsert_snapshot(bad).unwrap_err();
    assert!(matches!(
        errors.at("snapshots[2].snapName"),
        Some(ValidationError::MissingRequiredField { .. })
    ));
}

#[test]
fn test_upsert_rejects_non_finite_numbers() {
    let project = project_ab();
    let mut bad = project.snapshots[0].clone();
    bad.layout.render_settings.node_size_max = f64::NAN;

    let errors = project.upsert_snapshot(bad).unwrap_err();
    assert!(errors
        .at("snapshots[0].layout.settings.nodeSizeMax")
        .is_some());
}

#[test]
fn test_upsert_generated_snapshot() {
    let project = project_ab();
    let snap = Snapshot::new("Geo view", PlotType::Geo)
        .with_axes("Latitude", "Longitude")
        .with_display_data("Where things are", "subtitle", "<p>Where</p>");
    let id = snap.id.clone();

    let updated = project.upsert_snapshot(snap).unwrap();
    let stored = updated.snapshot(&id).unwrap();
    assert!(stored.layout.render_settings.is_geo);
    assert_eq!(stored.layout.y_axis_attribute, "Longitude");
    assert_eq!(stored.description, "<p>Where</p>");
    assert_eq!(stored.display_name, "Where things are");
}

#[test]
fn test_upsert_snapshot_built_with_layout_edits() {
    let project = project_ab();
    let mut snap = Snapshot::new("Clusters", PlotType::Original);
    snap.layout.render_settings = snap
        .layout
        .render_settings
        .with_nodes("Community", "", "Degree", None)
        .with_clusters(None)
        .with_links(0.3, 0.5, 2, EdgeDirection::Incoming);
    let id = snap.id.clone();

    let updated = project.upsert_snapshot(snap).unwrap();
    let settings = &updated.snapshot(&id).unwrap().layout.render_settings;
    assert!(settings.draw_clusters_circle);
    assert_eq!(settings.node_cluster_attr, "Community");
    assert_eq!(settings.edge_directional_render, EdgeDirection::Incoming);
    assert_eq!(settings.node_selection_degree, 2);
}

// ============================================================================
// Soft Delete and Last Viewed
// ============================================================================

#[test]
fn test_soft_delete_hides_from_active_view() {
    let project = project_ab();
    let updated = project.soft_delete_snapshot("b").unwrap();

    assert_eq!(updated.snapshots.len(), 2);
    assert!(updated.snapshot("b").unwrap().is_deleted);
    let active: Vec<&str> = updated.active_snapshots().map(|s| s.id.as_str()).collect();
    assert_eq!(active, vec!["a"]);
    assert_eq!(project.active_snapshots().count(), 2);
}

#[test]
fn test_soft_delete_unknown_snapshot() {
    let err = project_ab().soft_delete_snapshot("zzz").unwrap_err();
    assert!(matches!(err, Error::SnapshotNotFound(ref id) if id == "zzz"));
}

#[test]
fn test_last_viewed_may_point_at_deleted_snapshot() {
    let project = project_ab().soft_delete_snapshot("a").unwrap();
    assert_eq!(project.last_viewed().map(|s| s.id.as_str()), Some("a"));
}

#[test]
fn test_with_last_viewed() {
    let project = project_ab();

    let updated = project.with_last_viewed("b").unwrap();
    assert_eq!(updated.last_viewed().map(|s| s.id.as_str()), Some("b"));

    let cleared = project.with_last_viewed("").unwrap();
    assert!(cleared.last_viewed().is_none());

    let errors = project.with_last_viewed("nope").unwrap_err();
    assert!(matches!(
        errors.errors()[0],
        ValidationError::DanglingReference { ref id, .. } if id == "nope"
    ));
}
