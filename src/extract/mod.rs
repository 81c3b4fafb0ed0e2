//! Entity extraction: pattern-driven recognizers over raw agent SDK source.
//!
//! Five independent recognizers (agents, tools, contexts, handoffs,
//! guardrails) scan one source text and emit flat entity records. There is
//! no syntax tree and no scope tracking: recognition is best-effort, greedy
//! forward, first-match-first. Text with no matches yields empty sequences,
//! never an error; malformed near-misses are silently skipped.

pub mod agents;
pub mod contexts;
pub mod guardrails;
pub mod handoffs;
pub mod tools;

use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::config::ExtractConfig;
use crate::error::{AgentgraphError, Result};
use crate::loader::SourceFile;
use crate::model::{Bundle, Handoff};

pub use agents::extract_agents;
pub use contexts::extract_contexts;
pub use guardrails::extract_guardrails;
pub use handoffs::extract_handoffs;
pub use tools::extract_tools;

/// Run all five recognizers over one source text.
///
/// Handoffs declared inline at Agent construction (`handoffs=[...]`) and the
/// post-construction assignment form (`agent.handoffs = [...]`) feed the same
/// Handoff sequence; duplicates by id within this pass are collapsed,
/// assignment-form occurrences first.
pub fn extract_text(content: &str) -> Bundle {
    let agents = extract_agents(content);
    let tools = extract_tools(content);
    let contexts = extract_contexts(content);
    let guardrails = extract_guardrails(content);

    let mut handoffs = extract_handoffs(content);
    for agent in &agents {
        for target in &agent.handoffs {
            handoffs.push(Handoff::new(&agent.id, target));
        }
    }
    let mut seen = HashSet::new();
    handoffs.retain(|h| seen.insert(h.id.clone()));

    Bundle {
        agents,
        tools,
        handoffs,
        contexts,
        guardrails,
    }
}

/// Extract one source file into a bundle.
///
/// Enforces the configured size ceiling before any pattern work runs, and
/// contains any recognizer panic so one bad file cannot abort a batch.
pub fn extract_source(file: &SourceFile, config: &ExtractConfig) -> Result<Bundle> {
    let size = file.content.len() as u64;
    if size > config.max_file_bytes {
        return Err(AgentgraphError::InvalidInput(format!(
            "{}: file is {} bytes, exceeds extract.max_file_bytes ({})",
            file.name, size, config.max_file_bytes
        )));
    }

    catch_unwind(AssertUnwindSafe(|| extract_text(&file.content))).map_err(|_| {
        AgentgraphError::Extraction(format!("recognizer panicked while scanning {}", file.name))
    })
}

/// Batch driver: extract every source and merge the per-file bundles.
///
/// A file that fails (oversized, recognizer panic) is logged and skipped;
/// the remaining files are still processed. Merge is plain concatenation in
/// input order.
pub fn extract_all(files: &[SourceFile], config: &ExtractConfig) -> Bundle {
    let mut merged = Bundle::default();

    for file in files {
        match extract_source(file, config) {
            Ok(bundle) => {
                log::info!(
                    "{}: {} agents, {} tools, {} contexts, {} handoffs, {} guardrails",
                    file.name,
                    bundle.agents.len(),
                    bundle.tools.len(),
                    bundle.contexts.len(),
                    bundle.handoffs.len(),
                    bundle.guardrails.len()
                );
                merged.merge(bundle);
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", file.name, e);
            }
        }
    }

    merged
}

/// Split a bracketed list's contents on commas and clean each token:
/// quote, bracket, and whitespace characters are stripped anywhere in the
/// token, and empty entries are dropped.
pub(crate) fn clean_list_items(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| {
            item.chars()
                .filter(|c| !matches!(c, '[' | ']' | '\'' | '"') && !c.is_whitespace())
                .collect::<String>()
        })
        .filter(|item| !item.is_empty())
        .collect()
}

/// First triple-quoted block in `text` (either quote style), trimmed.
pub(crate) fn first_docstring(text: &str) -> Option<String> {
    let re = regex::Regex::new(r#"(?s)"""(.*?)"""|'''(.*?)'''"#).expect("Invalid regex pattern");
    re.captures(text).map(|cap| {
        cap.get(1)
            .or_else(|| cap.get(2))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Agent;

    fn test_config() -> ExtractConfig {
        ExtractConfig::default()
    }

    #[test]
    fn test_clean_list_items() {
        assert_eq!(
            clean_list_items(" toolA , 'toolB', \"toolC\" "),
            vec!["toolA", "toolB", "toolC"]
        );
        assert_eq!(clean_list_items("a,\n    b,\n"), vec!["a", "b"]);
        assert_eq!(clean_list_items(""), Vec::<String>::new());
        assert_eq!(clean_list_items(" , ,, "), Vec::<String>::new());
    }

    #[test]
    fn test_first_docstring_both_quote_styles() {
        assert_eq!(
            first_docstring("x\n\"\"\" hi \"\"\"\nrest").as_deref(),
            Some("hi")
        );
        assert_eq!(first_docstring("'''also hi'''").as_deref(), Some("also hi"));
        assert_eq!(first_docstring("no docstring here"), None);
    }

    #[test]
    fn test_first_docstring_picks_earliest() {
        let text = "'''first''' and \"\"\"second\"\"\"";
        assert_eq!(first_docstring(text).as_deref(), Some("first"));
    }

    #[test]
    fn test_extract_text_empty_input() {
        let bundle = extract_text("");
        assert!(bundle.is_empty());
    }

    #[test]
    fn test_extract_text_idempotent() {
        let src = r#"
a = Agent(name="A", tools=[t1], handoffs=[b])
b = Agent(name="B")
a.handoffs = [b, c]
"#;
        let first = extract_text(src);
        let second = extract_text(src);
        assert_eq!(first, second);
    }

    #[test]
    fn test_inline_and_assignment_handoffs_share_one_sequence() {
        let src = r#"
a = Agent(name="A", handoffs=[b])
b = Agent(name="B")
a.handoffs = [b, c]
"#;
        let bundle = extract_text(src);
        // a->b is declared both inline and by assignment; it appears once
        let ids: Vec<_> = bundle.handoffs.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["a_to_b", "a_to_c"]);
    }

    #[test]
    fn test_extract_source_size_ceiling() {
        let config = ExtractConfig { max_file_bytes: 8 };
        let file = SourceFile {
            name: "big.py".into(),
            content: "x = Agent(name=\"X\")".into(),
        };
        let err = extract_source(&file, &config).unwrap_err();
        assert!(matches!(err, AgentgraphError::InvalidInput(_)));
        assert!(err.to_string().contains("big.py"));
    }

    #[test]
    fn test_extract_all_continues_past_bad_file() {
        let config = ExtractConfig { max_file_bytes: 64 };
        let files = vec![
            SourceFile {
                name: "huge.py".into(),
                content: "#".repeat(1000),
            },
            SourceFile {
                name: "ok.py".into(),
                content: "a = Agent(name=\"A\")".into(),
            },
        ];
        let bundle = extract_all(&files, &config);
        assert_eq!(bundle.agents.len(), 1);
        assert_eq!(bundle.agents[0].id, "a");
    }

    #[test]
    fn test_extract_all_merges_in_input_order() {
        let files = vec![
            SourceFile {
                name: "one.py".into(),
                content: "first = Agent(name=\"One\")".into(),
            },
            SourceFile {
                name: "two.py".into(),
                content: "second = Agent(name=\"Two\")".into(),
            },
        ];
        let bundle = extract_all(&files, &test_config());
        let ids: Vec<_> = bundle.agents.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_extract_all_duplicate_ids_survive_merge() {
        // Uniqueness holds per extraction pass, not across merged texts
        let files = vec![
            SourceFile {
                name: "one.py".into(),
                content: "a = Agent(name=\"A1\")".into(),
            },
            SourceFile {
                name: "two.py".into(),
                content: "a = Agent(name=\"A2\")".into(),
            },
        ];
        let bundle = extract_all(&files, &test_config());
        assert_eq!(bundle.agents.len(), 2);
        assert!(bundle.agents.iter().all(|a: &Agent| a.id == "a"));
    }
}
