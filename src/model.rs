//! Entity records produced by extraction, prior to graph assembly.
//!
//! All identifiers are plain text taken verbatim from source (case-sensitive,
//! no normalization). Records are immutable values held in memory for the
//! duration of a single visualization request; there is no persistence layer.

use serde::{Deserialize, Serialize};

/// A named orchestration unit with instructions, declared tool references,
/// and declared handoff targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// The variable/binding name the definition was assigned to.
    pub id: String,
    /// Declared display name string.
    pub name: String,
    /// Free-text instructions block; may be empty.
    pub instructions: String,
    /// Ordered tool-reference strings (binding names or quoted names).
    pub tools: Vec<String>,
    /// Ordered handoff target references declared inline at construction.
    pub handoffs: Vec<String>,
}

/// A callable capability an agent may invoke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// The defined function's name (same value as `name`).
    pub id: String,
    pub name: String,
    /// Raw unparsed parameter-list text.
    pub params: String,
    /// Declared return-type token.
    #[serde(rename = "returnType")]
    pub return_type: String,
    /// First docstring block found in the function body; may be empty.
    pub description: String,
}

/// A `{name, type}` field of a context schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// A structured data schema referenced by agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// The defined schema class name (same value as `name`).
    pub id: String,
    pub name: String,
    /// First docstring block found in the class body; may be empty.
    pub description: String,
    /// Ordered fields parsed from the class body. Consumers may ignore it.
    pub properties: Vec<Property>,
}

/// A declared transfer-of-control edge from one agent to another.
///
/// `source`/`target` are textual agent ids; they are not validated against
/// the set of extracted agents, so dangling references are possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handoff {
    /// Synthesized as `<source>_to_<target>`.
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Handoff {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            id: format!("{}_to_{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// A named validation/safety policy. Only the name is recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardrail {
    pub id: String,
    pub name: String,
}

/// The flat collection of all five entity sequences produced by one or more
/// extraction passes, prior to graph assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub agents: Vec<Agent>,
    pub tools: Vec<Tool>,
    pub handoffs: Vec<Handoff>,
    pub contexts: Vec<Context>,
    pub guardrails: Vec<Guardrail>,
}

impl Bundle {
    /// Append another bundle's entities onto this one.
    ///
    /// Plain concatenation in arrival order; no field-level dedup is done
    /// across bundles. Duplicate ids are resolved later, at node synthesis.
    pub fn merge(&mut self, other: Bundle) {
        self.agents.extend(other.agents);
        self.tools.extend(other.tools);
        self.handoffs.extend(other.handoffs);
        self.contexts.extend(other.contexts);
        self.guardrails.extend(other.guardrails);
    }

    /// True if no entities of any kind were extracted.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
            && self.tools.is_empty()
            && self.handoffs.is_empty()
            && self.contexts.is_empty()
            && self.guardrails.is_empty()
    }

    /// Total entity count across all five sequences.
    pub fn len(&self) -> usize {
        self.agents.len()
            + self.tools.len()
            + self.handoffs.len()
            + self.contexts.len()
            + self.guardrails.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handoff_id_synthesis() {
        let h = Handoff::new("triage_agent", "billing_agent");
        assert_eq!(h.id, "triage_agent_to_billing_agent");
        assert_eq!(h.source, "triage_agent");
        assert_eq!(h.target, "billing_agent");
    }

    #[test]
    fn test_bundle_merge_concatenates() {
        let mut a = Bundle::default();
        a.agents.push(Agent {
            id: "a".into(),
            name: "A".into(),
            instructions: String::new(),
            tools: vec![],
            handoffs: vec![],
        });
        let mut b = Bundle::default();
        // Same id on purpose: merge must not dedup across bundles
        b.agents.push(Agent {
            id: "a".into(),
            name: "Other A".into(),
            instructions: String::new(),
            tools: vec![],
            handoffs: vec![],
        });
        b.guardrails.push(Guardrail {
            id: "G".into(),
            name: "G".into(),
        });
        a.merge(b);
        assert_eq!(a.agents.len(), 2);
        assert_eq!(a.guardrails.len(), 1);
        assert_eq!(a.len(), 3);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_tool_serializes_camel_case_return_type() {
        let t = Tool {
            id: "f".into(),
            name: "f".into(),
            params: "x: int".into(),
            return_type: "str".into(),
            description: "desc".into(),
        };
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"returnType\":\"str\""));
        assert!(!json.contains("return_type"));
    }
}
