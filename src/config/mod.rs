//! Project document schema, validation and defaults

mod edit;
pub mod loader;
pub mod render;
mod schema;
mod validate;

pub use edit::generate_snapshot_id;
pub use loader::{load_project, save_project, FileFormat};
pub use render::{
    default_render_settings, merge_defaults, EdgeColorStrategy, EdgeDirection, NodeColorStrategy,
    NodeSizeScaling, PaletteColor, PartialRenderSettings, RenderSettings, ScaleStrategy, SizeStrategy,
};
pub use schema::*;
pub use validate::{parse_project_config, ROOT};
