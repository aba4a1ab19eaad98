mod commands;
mod error;
mod layout;
pub mod matrix;
mod random;
mod state;
mod types;
mod view;

pub use commands::Editor;
pub use error::EditorError;
pub use layout::{DEFAULT_GRAVITY, ForceLayout};
pub use random::{random_graph, random_links, random_node_count};
pub use state::GraphState;
pub use types::{GraphData, GraphLink, GraphNode, LinkId, NodeId};
pub use view::GraphView;
