//! Render settings: the flat table of styling keys attached to a layout
//!
//! Every key is independently defaulted. Unknown keys are carried through
//! untouched in [`RenderSettings::extra`] so documents written by newer
//! players survive a load/save cycle.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::schema::PlotType;
use crate::error::ValidationErrors;

/// Render settings as a raw JSON object, possibly missing keys
pub type PartialRenderSettings = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    // Node appearance
    pub draw_nodes: bool,
    /// Fraction of the node radius drawn as border
    pub border_ratio: f64,
    pub big_on_top: bool,
    pub node_image_show: bool,
    pub node_image_attr: String,
    pub node_unselected_opacity: f64,
    pub node_highlight_ratio: f64,
    pub node_highlight_border_offset: f64,
    pub node_highlight_border_width: f64,
    pub node_selection_ratio: f64,
    pub node_selection_border_offset: f64,
    pub node_selection_border_width: f64,
    pub node_selection_degree: u32,

    // Selected node panel
    pub is_show_selected_node_tab: bool,
    pub selected_node_common_title: String,
    pub selected_node_incoming_title: String,
    pub selected_node_outgoing_title: String,
    pub neighbour_list_hover_degree: u32,

    // Node popover
    pub node_pop_size: f64,
    pub node_pop_image_show: bool,
    pub node_pop_image_attr: String,
    pub node_pop_show: bool,
    /// Milliseconds
    pub node_pop_delay: u32,
    pub node_pop_reposition_neighbors: bool,

    // Edges
    pub draw_edges: bool,
    pub edge_directional: bool,
    pub edge_taper: bool,
    pub edge_taper_scale: f64,
    pub edge_saturation: f64,
    pub edge_unselected_opacity: f64,
    pub edge_directional_render: EdgeDirection,
    pub edge_curvature: f64,

    // Labels
    pub draw_labels: bool,
    /// Group labels hide node labels until zoomed in
    pub draw_group_labels: bool,
    pub label_color: String,
    pub label_outline_color: String,
    pub label_size: String,
    pub label_scale: f64,
    pub label_size_ratio: f64,
    pub default_label_size: f64,
    pub min_label_size: f64,
    pub max_label_size: f64,
    /// Passed to the player as-is
    pub label_threshold: Value,
    pub label_max_count: u32,
    /// Passed to the player as-is
    pub label_default_show: Value,
    pub label_attr: String,
    pub label_hover_attr: String,
    /// Passed to the player as-is
    pub label_degree: Value,
    pub label_opacity: f64,
    pub label_unselected_opacity: f64,

    // Zoom and pan
    pub zoom_lock: bool,
    pub pan_lock: bool,
    pub max_zoom_level: f64,
    pub min_zoom_level: f64,
    /// Only honoured by the geo layout
    pub saved_zoom_level: f64,
    /// Step used by the on-screen +/- buttons
    pub zooming_ratio: f64,
    pub mouse_zoom_duration: u32,

    // Axes, scatterplot only
    pub x_ax_show: bool,
    pub y_ax_show: bool,
    pub x_ax_tick_show: bool,
    pub y_ax_tick_show: bool,
    pub x_ax_label: String,
    pub y_ax_label: String,
    pub x_ax_tooltip: String,
    pub y_ax_tooltip: String,
    pub invert_x: bool,
    pub invert_y: bool,
    /// Higher is wider than tall, 0.5 is square
    pub scatter_aspect: f64,

    // Geo only
    #[serde(rename = "mapboxMapID")]
    pub mapbox_map_id: String,
    pub is_geo: bool,

    // Node size
    pub node_size_strat: SizeStrategy,
    pub node_size_attr: String,
    pub node_size_scale_strategy: ScaleStrategy,
    pub node_size_scale_invert: bool,
    pub node_size_default_value: f64,
    pub node_size_min: f64,
    pub node_size_max: f64,
    pub node_size_multiplier: f64,

    // Node color
    pub node_color_strat: NodeColorStrategy,
    pub node_color_attr: String,
    pub node_color_scale_strategy: ScaleStrategy,
    pub node_color_scale_invert: bool,
    pub node_color_scale_exponent: f64,
    pub node_color_scale_base: f64,
    pub node_color_default_value: String,
    pub node_color_numeric_scaler_type: String,
    pub node_color_cycle_category_colors: bool,
    /// Used for numeric attributes
    pub node_color_palette_numeric: Vec<PaletteColor>,
    /// Used for categorical attributes
    pub node_color_palette_ordinal: Vec<PaletteColor>,

    // Edge size
    pub edge_size_strat: SizeStrategy,
    pub edge_size_attr: String,
    pub edge_size_scale_strategy: ScaleStrategy,
    pub edge_size_scale_invert: bool,
    pub edge_size_default_value: f64,
    pub edge_size_min: f64,
    pub edge_size_max: f64,
    pub edge_size_multiplier: f64,

    // Edge color
    pub edge_color_strat: EdgeColorStrategy,
    pub edge_color_attr: String,
    pub edge_color_scale_strategy: ScaleStrategy,
    pub edge_color_scale_invert: bool,
    pub edge_color_scale_exponent: f64,
    pub edge_color_scale_base: f64,
    pub edge_color_default_value: String,
    pub edge_color_cycle_category_colors: bool,
    pub edge_color_palette_numeric: Vec<PaletteColor>,
    pub edge_color_palette_ordinal: Vec<PaletteColor>,

    // Clusters
    pub node_cluster_attr: String,
    pub draw_clusters_circle: bool,

    /// Keys this schema does not know about
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            draw_nodes: true,
            border_ratio: 0.15,
            big_on_top: false,
            node_image_show: false,
            node_image_attr: String::new(),
            node_unselected_opacity: 0.25,
            node_highlight_ratio: 1.2,
            node_highlight_border_offset: 6.0,
            node_highlight_border_width: 1.0,
            node_selection_ratio: 1.2,
            node_selection_border_offset: 0.0,
            node_selection_border_width: 3.0,
            node_selection_degree: 1,

            is_show_selected_node_tab: true,
            selected_node_common_title: "Neighbors".to_string(),
            selected_node_incoming_title: "Incoming".to_string(),
            selected_node_outgoing_title: "Outgoing".to_string(),
            neighbour_list_hover_degree: 1,

            node_pop_size: 10.0,
            node_pop_image_show: true,
            node_pop_image_attr: String::new(),
            node_pop_show: false,
            node_pop_delay: 1500,
            node_pop_reposition_neighbors: true,

            draw_edges: false,
            edge_directional: true,
            edge_taper: false,
            edge_taper_scale: 0.5,
            edge_saturation: 1.0,
            edge_unselected_opacity: 0.2,
            edge_directional_render: EdgeDirection::Outgoing,
            edge_curvature: 0.0,

            draw_labels: true,
            draw_group_labels: true,
            label_color: "#000000".to_string(),
            label_outline_color: "#ffffff".to_string(),
            label_size: "proportional".to_string(),
            label_scale: 1.0,
            label_size_ratio: 0.5,
            default_label_size: 12.0,
            min_label_size: 12.0,
            max_label_size: 16.0,
            label_threshold: json!(1),
            label_max_count: 300,
            label_default_show: json!(true),
            label_attr: "OriginalLabel".to_string(),
            label_hover_attr: "OriginalLabel".to_string(),
            label_degree: json!(0),
            label_opacity: 1.0,
            label_unselected_opacity: 0.0,

            zoom_lock: false,
            pan_lock: false,
            max_zoom_level: 10.0,
            min_zoom_level: -10.0,
            saved_zoom_level: -2.0,
            zooming_ratio: 1.7,
            mouse_zoom_duration: 500,

            x_ax_show: false,
            y_ax_show: false,
            x_ax_tick_show: false,
            y_ax_tick_show: false,
            x_ax_label: String::new(),
            y_ax_label: String::new(),
            x_ax_tooltip: String::new(),
            y_ax_tooltip: String::new(),
            invert_x: false,
            invert_y: true,
            scatter_aspect: 0.5,

            mapbox_map_id: String::new(),
            is_geo: false,

            node_size_strat: SizeStrategy::Attr,
            node_size_attr: String::new(),
            node_size_scale_strategy: ScaleStrategy::Log,
            node_size_scale_invert: false,
            node_size_default_value: 10.0,
            node_size_min: 2.0,
            node_size_max: 20.0,
            node_size_multiplier: 0.5,

            node_color_strat: NodeColorStrategy::Attr,
            node_color_attr: String::new(),
            node_color_scale_strategy: ScaleStrategy::Linear,
            node_color_scale_invert: false,
            node_color_scale_exponent: 2.5,
            node_color_scale_base: 10.0,
            node_color_default_value: "rgb(200,200,200)".to_string(),
            node_color_numeric_scaler_type: "RGB".to_string(),
            node_color_cycle_category_colors: true,
            node_color_palette_numeric: default_numeric_palette(),
            node_color_palette_ordinal: default_ordinal_palette(),

            edge_size_strat: SizeStrategy::Fixed,
            edge_size_attr: String::new(),
            edge_size_scale_strategy: ScaleStrategy::Linear,
            edge_size_scale_invert: false,
            edge_size_default_value: 0.2,
            edge_size_min: 0.1,
            edge_size_max: 10.0,
            edge_size_multiplier: 0.1,

            edge_color_strat: EdgeColorStrategy::Gradient,
            edge_color_attr: String::new(),
            edge_color_scale_strategy: ScaleStrategy::Linear,
            edge_color_scale_invert: false,
            edge_color_scale_exponent: 2.5,
            edge_color_scale_base: 10.0,
            edge_color_default_value: "rgb(200,200,200)".to_string(),
            edge_color_cycle_category_colors: true,
            edge_color_palette_numeric: default_numeric_palette(),
            edge_color_palette_ordinal: default_ordinal_palette(),

            node_cluster_attr: String::new(),
            draw_clusters_circle: false,

            extra: BTreeMap::new(),
        }
    }
}

const DEFAULT_NUMERIC_PALETTE: &[&str] = &["#ee4444", "#3399ff"];

const DEFAULT_ORDINAL_PALETTE: &[&str] = &[
    "#bd0f0f", "#5b41a3", "#0099ff", "#ffcc00", "#66cccc", "#99cc00", "#993399", "#b23333",
    "#077861", "#0073bf", "#bf9900", "#4c9999", "#739900", "#732673",
];

fn default_numeric_palette() -> Vec<PaletteColor> {
    DEFAULT_NUMERIC_PALETTE.iter().map(|c| PaletteColor::new(*c)).collect()
}

fn default_ordinal_palette() -> Vec<PaletteColor> {
    DEFAULT_ORDINAL_PALETTE.iter().map(|c| PaletteColor::new(*c)).collect()
}

impl RenderSettings {
    /// Defaults tuned for a plot type
    pub fn for_plot_type(plot_type: PlotType) -> Self {
        let base = Self::default();
        match plot_type {
            PlotType::Scatterplot => Self {
                x_ax_show: true,
                y_ax_show: true,
                x_ax_tick_show: true,
                y_ax_tick_show: true,
                edge_size_multiplier: 1.0,
                ..base
            },
            PlotType::Geo => Self {
                mapbox_map_id: "mapbox/light-v10".to_string(),
                draw_group_labels: false,
                is_geo: true,
                ..base
            },
            PlotType::Original | PlotType::Grid => base,
        }
    }

    /// Merge `partial` over the defaults and validate the result.
    ///
    /// Error paths are the bare setting keys.
    pub fn from_partial(partial: &PartialRenderSettings) -> Result<Self, ValidationErrors> {
        let mut errors = Vec::new();
        let settings = super::validate::read_render_settings(partial, super::validate::ROOT, &mut errors);
        match (settings, ValidationErrors::from_vec(errors)) {
            (Some(settings), None) => Ok(settings),
            (_, Some(errors)) => Err(errors),
            (None, None) => Err(ValidationErrors::single(
                crate::error::ValidationError::MalformedInput {
                    path: super::validate::ROOT.to_string(),
                    message: "render settings could not be read".to_string(),
                },
            )),
        }
    }

    /// Replace node and edge palettes together. Empty palettes leave the
    /// current ones in place.
    pub fn with_palette(mut self, ordinal: Vec<PaletteColor>, numeric: Vec<PaletteColor>) -> Self {
        if !ordinal.is_empty() {
            self.node_color_palette_ordinal = ordinal.clone();
            self.edge_color_palette_ordinal = ordinal;
        }
        if !numeric.is_empty() {
            self.node_color_palette_numeric = numeric.clone();
            self.edge_color_palette_numeric = numeric;
        }
        self
    }

    /// Turn edges on with the given curvature, width, neighbour depth for
    /// selection and direction
    pub fn with_links(mut self, curvature: f64, weight: f64, neighbors: u32, direction: EdgeDirection) -> Self {
        self.draw_edges = true;
        self.edge_curvature = curvature;
        self.edge_size_default_value = weight;
        self.node_selection_degree = neighbors;
        self.edge_directional_render = direction;
        self
    }

    /// Draw cluster circles grouped by `cluster_attr`. Without one, the node
    /// color attribute is used, or `Cluster` if that is unset too.
    pub fn with_clusters(mut self, cluster_attr: Option<&str>) -> Self {
        self.draw_clusters_circle = true;
        self.node_cluster_attr = match cluster_attr {
            Some(attr) if !attr.is_empty() => attr.to_string(),
            _ if !self.node_color_attr.is_empty() => self.node_color_attr.clone(),
            _ => "Cluster".to_string(),
        };
        self
    }

    /// Set the attributes driving node color, cluster and size. Empty names
    /// and a missing scaling keep the current values.
    pub fn with_nodes(
        mut self,
        color_attr: &str,
        cluster_attr: &str,
        size_attr: &str,
        scaling: Option<NodeSizeScaling>,
    ) -> Self {
        if !color_attr.is_empty() {
            self.node_color_attr = color_attr.to_string();
        }
        if !cluster_attr.is_empty() {
            self.node_cluster_attr = cluster_attr.to_string();
        }
        if !size_attr.is_empty() {
            self.node_size_attr = size_attr.to_string();
        }
        if let Some(scaling) = scaling {
            self.node_size_min = scaling.min;
            self.node_size_max = scaling.max;
            self.node_size_multiplier = scaling.multiplier;
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSizeScaling {
    pub min: f64,
    pub max: f64,
    pub multiplier: f64,
}

/// One entry of a color palette. Palette order is the cycling order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub col: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PaletteColor {
    pub fn new(col: impl Into<String>) -> Self {
        Self {
            col: col.into(),
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleStrategy {
    Linear,
    Log,
}

impl ScaleStrategy {
    pub const VARIANTS: &'static [&'static str] = &["linear", "log"];
}

/// How node or edge sizes are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeStrategy {
    Attr,
    Fixed,
}

impl SizeStrategy {
    pub const VARIANTS: &'static [&'static str] = &["attr", "fixed"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColorStrategy {
    Attr,
    Select,
    Fixed,
}

impl NodeColorStrategy {
    pub const VARIANTS: &'static [&'static str] = &["attr", "select", "fixed"];
}

/// `Gradient` blends the colors of the two endpoint nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeColorStrategy {
    Attr,
    Gradient,
}

impl EdgeColorStrategy {
    pub const VARIANTS: &'static [&'static str] = &["attr", "gradient"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDirection {
    Incoming,
    Outgoing,
    All,
}

impl EdgeDirection {
    pub const VARIANTS: &'static [&'static str] = &["incoming", "outgoing", "all"];
}

/// What a render setting value must look like
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRule {
    Bool,
    Number,
    /// Number in [0, 1]
    Ratio,
    /// Non-negative integer that fits in 32 bits
    Count,
    Text,
    Color,
    OneOf(&'static [&'static str]),
    Palette,
    /// Anything; forwarded to the player unchecked
    Opaque,
}

/// Every recognized render setting key and its rule
pub const RENDER_RULES: &[(&str, ValueRule)] = &[
    ("drawNodes", ValueRule::Bool),
    ("borderRatio", ValueRule::Ratio),
    ("bigOnTop", ValueRule::Bool),
    ("nodeImageShow", ValueRule::Bool),
    ("nodeImageAttr", ValueRule::Text),
    ("nodeUnselectedOpacity", ValueRule::Ratio),
    ("nodeHighlightRatio", ValueRule::Number),
    ("nodeHighlightBorderOffset", ValueRule::Number),
    ("nodeHighlightBorderWidth", ValueRule::Number),
    ("nodeSelectionRatio", ValueRule::Number),
    ("nodeSelectionBorderOffset", ValueRule::Number),
    ("nodeSelectionBorderWidth", ValueRule::Number),
    ("nodeSelectionDegree", ValueRule::Count),
    ("isShowSelectedNodeTab", ValueRule::Bool),
    ("selectedNodeCommonTitle", ValueRule::Text),
    ("selectedNodeIncomingTitle", ValueRule::Text),
    ("selectedNodeOutgoingTitle", ValueRule::Text),
    ("neighbourListHoverDegree", ValueRule::Count),
    ("nodePopSize", ValueRule::Number),
    ("nodePopImageShow", ValueRule::Bool),
    ("nodePopImageAttr", ValueRule::Text),
    ("nodePopShow", ValueRule::Bool),
    ("nodePopDelay", ValueRule::Count),
    ("nodePopRepositionNeighbors", ValueRule::Bool),
    ("drawEdges", ValueRule::Bool),
    ("edgeDirectional", ValueRule::Bool),
    ("edgeTaper", ValueRule::Bool),
    ("edgeTaperScale", ValueRule::Number),
    ("edgeSaturation", ValueRule::Ratio),
    ("edgeUnselectedOpacity", ValueRule::Ratio),
    ("edgeDirectionalRender", ValueRule::OneOf(EdgeDirection::VARIANTS)),
    ("edgeCurvature", ValueRule::Number),
    ("drawLabels", ValueRule::Bool),
    ("drawGroupLabels", ValueRule::Bool),
    ("labelColor", ValueRule::Color),
    ("labelOutlineColor", ValueRule::Color),
    ("labelSize", ValueRule::Text),
    ("labelScale", ValueRule::Number),
    ("labelSizeRatio", ValueRule::Number),
    ("defaultLabelSize", ValueRule::Number),
    ("minLabelSize", ValueRule::Number),
    ("maxLabelSize", ValueRule::Number),
    ("labelThreshold", ValueRule::Opaque),
    ("labelMaxCount", ValueRule::Count),
    ("labelDefaultShow", ValueRule::Opaque),
    ("labelAttr", ValueRule::Text),
    ("labelHoverAttr", ValueRule::Text),
    ("labelDegree", ValueRule::Opaque),
    ("labelOpacity", ValueRule::Ratio),
    ("labelUnselectedOpacity", ValueRule::Ratio),
    ("zoomLock", ValueRule::Bool),
    ("panLock", ValueRule::Bool),
    ("maxZoomLevel", ValueRule::Number),
    ("minZoomLevel", ValueRule::Number),
    ("savedZoomLevel", ValueRule::Number),
    ("zoomingRatio", ValueRule::Number),
    ("mouseZoomDuration", ValueRule::Count),
    ("xAxShow", ValueRule::Bool),
    ("yAxShow", ValueRule::Bool),
    ("xAxTickShow", ValueRule::Bool),
    ("yAxTickShow", ValueRule::Bool),
    ("xAxLabel", ValueRule::Text),
    ("yAxLabel", ValueRule::Text),
    ("xAxTooltip", ValueRule::Text),
    ("yAxTooltip", ValueRule::Text),
    ("invertX", ValueRule::Bool),
    ("invertY", ValueRule::Bool),
    ("scatterAspect", ValueRule::Ratio),
    ("mapboxMapID", ValueRule::Text),
    ("isGeo", ValueRule::Bool),
    ("nodeSizeStrat", ValueRule::OneOf(SizeStrategy::VARIANTS)),
    ("nodeSizeAttr", ValueRule::Text),
    ("nodeSizeScaleStrategy", ValueRule::OneOf(ScaleStrategy::VARIANTS)),
    ("nodeSizeScaleInvert", ValueRule::Bool),
    ("nodeSizeDefaultValue", ValueRule::Number),
    ("nodeSizeMin", ValueRule::Number),
    ("nodeSizeMax", ValueRule::Number),
    ("nodeSizeMultiplier", ValueRule::Number),
    ("nodeColorStrat", ValueRule::OneOf(NodeColorStrategy::VARIANTS)),
    ("nodeColorAttr", ValueRule::Text),
    ("nodeColorScaleStrategy", ValueRule::OneOf(ScaleStrategy::VARIANTS)),
    ("nodeColorScaleInvert", ValueRule::Bool),
    ("nodeColorScaleExponent", ValueRule::Number),
    ("nodeColorScaleBase", ValueRule::Number),
    ("nodeColorDefaultValue", ValueRule::Color),
    ("nodeColorNumericScalerType", ValueRule::Text),
    ("nodeColorCycleCategoryColors", ValueRule::Bool),
    ("nodeColorPaletteNumeric", ValueRule::Palette),
    ("nodeColorPaletteOrdinal", ValueRule::Palette),
    ("edgeSizeStrat", ValueRule::OneOf(SizeStrategy::VARIANTS)),
    ("edgeSizeAttr", ValueRule::Text),
    ("edgeSizeScaleStrategy", ValueRule::OneOf(ScaleStrategy::VARIANTS)),
    ("edgeSizeScaleInvert", ValueRule::Bool),
    ("edgeSizeDefaultValue", ValueRule::Number),
    ("edgeSizeMin", ValueRule::Number),
    ("edgeSizeMax", ValueRule::Number),
    ("edgeSizeMultiplier", ValueRule::Number),
    ("edgeColorStrat", ValueRule::OneOf(EdgeColorStrategy::VARIANTS)),
    ("edgeColorAttr", ValueRule::Text),
    ("edgeColorScaleStrategy", ValueRule::OneOf(ScaleStrategy::VARIANTS)),
    ("edgeColorScaleInvert", ValueRule::Bool),
    ("edgeColorScaleExponent", ValueRule::Number),
    ("edgeColorScaleBase", ValueRule::Number),
    ("edgeColorDefaultValue", ValueRule::Color),
    ("edgeColorCycleCategoryColors", ValueRule::Bool),
    ("edgeColorPaletteNumeric", ValueRule::Palette),
    ("edgeColorPaletteOrdinal", ValueRule::Palette),
    ("nodeClusterAttr", ValueRule::Text),
    ("drawClustersCircle", ValueRule::Bool),
];

/// Rule for a render setting key, `None` for keys the schema does not know
pub fn rule_for(key: &str) -> Option<ValueRule> {
    RENDER_RULES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, rule)| *rule)
}

// Statics below are built from compile-time constants; a failure here is a bug
// in this crate, not a runtime condition.
static DEFAULT_TABLE: LazyLock<PartialRenderSettings> = LazyLock::new(|| {
    match serde_json::to_value(RenderSettings::default()) {
        Ok(Value::Object(map)) => map,
        _ => panic!("default render settings must serialize to a JSON object"),
    }
});

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("Invalid hex color pattern - this is a bug in the codebase")
});

// Three channels plus an optional alpha, each a number or percentage
static RGB_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*(\d+(\.\d+)?|\.\d+)%?(\s*,\s*(\d+(\.\d+)?|\.\d+)%?){2,3}\s*\)$")
        .expect("Invalid rgb color pattern - this is a bug in the codebase")
});

/// CSS named colors, sorted for binary search
const CSS_COLOR_NAMES: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "transparent", "turquoise", "violet", "wheat", "white",
    "whitesmoke", "yellow", "yellowgreen",
];

/// The built-in default for every recognized key
pub fn default_render_settings() -> &'static PartialRenderSettings {
    &DEFAULT_TABLE
}

/// Fill every key missing from `partial` with its built-in default.
///
/// Present keys, including unknown ones, are copied verbatim.
pub fn merge_defaults(partial: &PartialRenderSettings) -> PartialRenderSettings {
    let mut merged = partial.clone();
    for (key, value) in default_render_settings() {
        if !merged.contains_key(key) {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Accepts hex (`#rgb`, `#rrggbb`, with optional alpha), `rgb()`/`rgba()` and
/// lowercase CSS color names
pub fn is_color(value: &str) -> bool {
    let value = value.trim();
    HEX_COLOR.is_match(value) || RGB_COLOR.is_match(value) || CSS_COLOR_NAMES.binary_search(&value).is_ok()
}
