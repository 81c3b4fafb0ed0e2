//! Handoff recognizer: `<agent>.handoffs = [...]` assignments.

use regex::Regex;

use super::clean_list_items;
use crate::model::Handoff;

/// Extract post-construction handoff assignments from source text.
///
/// Each cleaned target token yields one record with the synthesized id
/// `<source>_to_<target>`. Targets are textual and are not validated against
/// the extracted agent set, so dangling references survive into the graph.
pub fn extract_handoffs(content: &str) -> Vec<Handoff> {
    let handoff_re =
        Regex::new(r"(\w+)\.handoffs\s*=\s*\[([\s\S]*?)\]").expect("Invalid regex pattern");

    let mut handoffs = Vec::new();

    for cap in handoff_re.captures_iter(content) {
        let source = cap.get(1).unwrap().as_str();
        for target in clean_list_items(cap.get(2).unwrap().as_str()) {
            handoffs.push(Handoff::new(source, &target));
        }
    }

    handoffs
}
