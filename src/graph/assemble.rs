//! Bundle-to-graph assembly: node synthesis and edge resolution.

use std::collections::HashSet;

use serde_json::json;

use crate::error::Result;
use crate::model::Bundle;

use super::{Graph, Link, LinkKind, Node, NodeKind};

/// Assemble a merged entity bundle into a renderable node-link model.
///
/// Nodes are emitted in entity order (agents, tools, contexts, guardrails),
/// then handoff links, then derived tool-usage links, so output is
/// deterministic given deterministic extraction and merge order.
///
/// Duplicate node ids (possible when several source texts define the same
/// binding name) are collapsed: the first occurrence wins and each collision
/// is reported via a warning. Links are never filtered, so a handoff whose
/// endpoint matches no node is emitted as-is.
pub fn assemble(bundle: &Bundle) -> Result<Graph> {
    let mut nodes = Vec::with_capacity(bundle.len());
    let mut seen_ids: HashSet<String> = HashSet::new();

    let mut push_node = |nodes: &mut Vec<Node>, id: &str, name: &str, kind: NodeKind, data| {
        if !seen_ids.insert(id.to_string()) {
            log::warn!(
                "Duplicate {:?} node id '{}' across merged sources; keeping the first occurrence",
                kind,
                id
            );
            return;
        }
        nodes.push(Node {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            data,
            color: kind.color().to_string(),
        });
    };

    for agent in &bundle.agents {
        let data = serde_json::to_value(agent)?;
        push_node(&mut nodes, &agent.id, &agent.name, NodeKind::Agent, data);
    }
    for tool in &bundle.tools {
        let data = serde_json::to_value(tool)?;
        push_node(&mut nodes, &tool.id, &tool.name, NodeKind::Tool, data);
    }
    for context in &bundle.contexts {
        let data = serde_json::to_value(context)?;
        push_node(
            &mut nodes,
            &context.id,
            &context.name,
            NodeKind::Context,
            data,
        );
    }
    for guardrail in &bundle.guardrails {
        let data = serde_json::to_value(guardrail)?;
        push_node(
            &mut nodes,
            &guardrail.id,
            &guardrail.name,
            NodeKind::Guardrail,
            data,
        );
    }

    let mut links = Vec::new();

    for handoff in &bundle.handoffs {
        links.push(Link {
            source: handoff.source.clone(),
            target: handoff.target.clone(),
            kind: LinkKind::Handoff,
            data: serde_json::to_value(handoff)?,
        });
    }

    // Tool-usage edges are derived: an edge exists iff a declared reference
    // resolves to a tool by id or name. No-match references are dropped.
    for agent in &bundle.agents {
        for tool_ref in &agent.tools {
            let Some(tool) = bundle
                .tools
                .iter()
                .find(|t| t.id == *tool_ref || t.name == *tool_ref)
            else {
                log::debug!(
                    "Agent '{}' references unknown tool '{}'; no edge emitted",
                    agent.id,
                    tool_ref
                );
                continue;
            };
            links.push(Link {
                source: agent.id.clone(),
                target: tool.id.clone(),
                kind: LinkKind::ToolUsage,
                data: json!({
                    "description": format!("{} uses {}", agent.name, tool.name),
                }),
            });
        }
    }

    Ok(Graph { nodes, links })
}
