//! Agent recognizer: `<ident> = Agent(name="<str>", ...)` assignments.

use regex::Regex;

use super::clean_list_items;
use crate::model::Agent;

/// Extract agent definitions from source text.
///
/// Matches assignments of the form `ident = Agent(name="...", ...)`, with an
/// optional bracketed type parameter after `Agent` (e.g. `Agent[Ctx](...)`).
/// Sub-fields (instructions, tools, handoffs) are searched in the window
/// between the current match and the start of the next agent match, so a
/// later agent's fields cannot bleed into an earlier one.
pub fn extract_agents(content: &str) -> Vec<Agent> {
    let agent_re = Regex::new(r#"(\w+)\s*=\s*Agent(?:\[\w*\])?\s*\(\s*name\s*=\s*["']([^"']+)["']"#)
        .expect("Invalid regex pattern");
    // The leading `(?:^|[^.\w])` keeps `agent.handoffs = [...]` assignments
    // and other dotted attributes from matching as construction keywords.
    let instructions_re =
        Regex::new(r#"(?s)instructions\s*=\s*(?:"""(.*?)"""|'''(.*?)''')"#)
            .expect("Invalid regex pattern");
    let tools_re = Regex::new(r"(?sm)(?:^|[^.\w])tools\s*=\s*\[(.*?)\]")
        .expect("Invalid regex pattern");
    let handoffs_re = Regex::new(r"(?sm)(?:^|[^.\w])handoffs\s*=\s*\[(.*?)\]")
        .expect("Invalid regex pattern");

    let matches: Vec<regex::Captures> = agent_re.captures_iter(content).collect();
    let mut agents = Vec::with_capacity(matches.len());

    for (i, cap) in matches.iter().enumerate() {
        let id = cap.get(1).unwrap().as_str().to_string();
        let name = cap.get(2).unwrap().as_str().to_string();

        let window_start = cap.get(0).unwrap().end();
        let window_end = matches
            .get(i + 1)
            .map(|next| next.get(0).unwrap().start())
            .unwrap_or(content.len());
        let window = &content[window_start..window_end];

        let instructions = instructions_re
            .captures(window)
            .and_then(|c| c.get(1).or_else(|| c.get(2)))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        let tools = tools_re
            .captures(window)
            .and_then(|c| c.get(1))
            .map(|m| clean_list_items(m.as_str()))
            .unwrap_or_default();

        let handoffs = handoffs_re
            .captures(window)
            .and_then(|c| c.get(1))
            .map(|m| clean_list_items(m.as_str()))
            .unwrap_or_default();

        agents.push(Agent {
            id,
            name,
            instructions,
            tools,
            handoffs,
        });
    }

    agents
}
