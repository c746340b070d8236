use serde::{Deserialize, Serialize};

/// Contents of `history_graph.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub codec: CodecConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub events: EventsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default = "default_remote_url")]
    pub remote_url: String,
    #[serde(default = "default_clone_dir")]
    pub clone_dir: String,
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_remote_name")]
    pub remote_name: String,
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            remote_url: default_remote_url(),
            clone_dir: default_clone_dir(),
            data_file: default_data_file(),
            remote_name: default_remote_name(),
            branch: default_branch(),
        }
    }
}

fn default_remote_url() -> String { "https://github.com/jyoshimi/history_graph".to_string() }
fn default_clone_dir() -> String { "history_graph_repo".to_string() }
fn default_data_file() -> String { "history_net_data.js".to_string() }
fn default_remote_name() -> String { "origin".to_string() }
fn default_branch() -> String { "master".to_string() }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub pretty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { prefix: default_prefix(), pretty: false }
    }
}

fn default_prefix() -> String { crate::codec::DEFAULT_PREFIX.to_string() }

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub include_disconnected_nodes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_layout")]
    pub layout: String,
    #[serde(default = "default_node_color")]
    pub node_color: String,
    #[serde(default = "default_node_size")]
    pub node_size: f64,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_label_offset")]
    pub label_x_offset: f64,
    #[serde(default = "default_label_offset")]
    pub label_y_offset: f64,
    #[serde(default = "default_edge_color")]
    pub edge_color: String,
    #[serde(default = "default_edge_width")]
    pub edge_width: f64,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default = "default_figure_inches")]
    pub width: f64,
    #[serde(default = "default_figure_inches")]
    pub height: f64,
    #[serde(default = "default_graphviz_program")]
    pub graphviz_program: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            node_color: default_node_color(),
            node_size: default_node_size(),
            alpha: default_alpha(),
            label_x_offset: default_label_offset(),
            label_y_offset: default_label_offset(),
            edge_color: default_edge_color(),
            edge_width: default_edge_width(),
            font_size: default_font_size(),
            width: default_figure_inches(),
            height: default_figure_inches(),
            graphviz_program: default_graphviz_program(),
        }
    }
}

fn default_layout() -> String { "graphviz".to_string() }
fn default_node_color() -> String { "red".to_string() }
const fn default_node_size() -> f64 { 500.0 }
const fn default_alpha() -> f64 { 0.5 }
const fn default_label_offset() -> f64 { 0.1 }
fn default_edge_color() -> String { "grey".to_string() }
const fn default_edge_width() -> f64 { 1.0 }
const fn default_font_size() -> u32 { 18 }
const fn default_figure_inches() -> f64 { 10.0 }
fn default_graphviz_program() -> String { "neato".to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_events_dir")]
    pub dir: String,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { enabled: true, dir: default_events_dir() }
    }
}

const fn default_true() -> bool { true }
fn default_events_dir() -> String { ".history_graph".to_string() }
