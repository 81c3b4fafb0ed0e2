//! Tool recognizer: `@function_tool` decorated function definitions.

use regex::Regex;

use super::first_docstring;
use crate::model::Tool;

/// Extract tool definitions from source text.
///
/// Matches `@function_tool` followed (possibly across lines and other
/// decorators) by `def name(params) -> ret:`. The description is the first
/// docstring in the window between this match and the next tool match, which
/// keeps a later function's docstring from attaching to the wrong tool.
pub fn extract_tools(content: &str) -> Vec<Tool> {
    let tool_re =
        Regex::new(r"@function_tool[\s\S]*?def\s+(\w+)\s*\(([\s\S]*?)\)\s*->\s*(\w+):")
            .expect("Invalid regex pattern");

    let matches: Vec<regex::Captures> = tool_re.captures_iter(content).collect();
    let mut tools = Vec::with_capacity(matches.len());

    for (i, cap) in matches.iter().enumerate() {
        let name = cap.get(1).unwrap().as_str().to_string();
        let params = cap.get(2).unwrap().as_str().to_string();
        let return_type = cap.get(3).unwrap().as_str().to_string();

        let window_start = cap.get(0).unwrap().end();
        let window_end = matches
            .get(i + 1)
            .map(|next| next.get(0).unwrap().start())
            .unwrap_or(content.len());
        let description = first_docstring(&content[window_start..window_end]).unwrap_or_default();

        tools.push(Tool {
            id: name.clone(),
            name,
            params,
            return_type,
            description,
        });
    }

    tools
}
