pub mod config;
pub mod error;
pub mod extract;
pub mod graph;
pub mod loader;
pub mod model;
pub mod stage;

pub use config::Config;
pub use error::{AgentgraphError, Result};
pub use extract::{extract_all, extract_source, extract_text};
pub use graph::{assemble, Graph, Link, Node};
pub use loader::{load_sources, SourceFile};
pub use model::Bundle;
