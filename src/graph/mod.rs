//! Graph model: nodes and links assembled from an entity bundle.
//!
//! The shapes here are the renderer's wire contract: `Node.kind` and
//! `Link.kind` serialize as `type`, and every node carries the full entity
//! record as JSON payload plus its display color.

mod assemble;

pub use assemble::assemble;

use serde::{Deserialize, Serialize};

/// Kind tag for a graph node, one per entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Agent,
    Tool,
    Context,
    Guardrail,
}

impl NodeKind {
    /// Fixed display palette, one color per kind.
    pub fn color(&self) -> &'static str {
        match self {
            NodeKind::Agent => "#4f46e5",     // indigo
            NodeKind::Tool => "#10b981",      // emerald
            NodeKind::Context => "#f97316",   // orange
            NodeKind::Guardrail => "#ef4444", // red
        }
    }
}

/// Kind tag for a graph link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Handoff,
    ToolUsage,
}

/// A renderable graph node. Identity is the entity's `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Full entity record, as JSON.
    pub data: serde_json::Value,
    pub color: String,
}

/// A renderable graph link. Endpoints are entity ids; a handoff endpoint may
/// name a node that does not exist (the renderer tolerates dangling edges).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: LinkKind,
    pub data: serde_json::Value,
}

/// The assembled node-link model handed to the rendering collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}
