//! Guardrail recognizer: `Guardrail(name="<str>", ...)` constructions.

use regex::Regex;

use crate::model::Guardrail;

/// Extract guardrail definitions from source text. Name only; no body scan.
pub fn extract_guardrails(content: &str) -> Vec<Guardrail> {
    let guardrail_re =
        Regex::new(r#"Guardrail\s*\(\s*name\s*=\s*["']([^"']+)["']"#).expect("Invalid regex pattern");

    guardrail_re
        .captures_iter(content)
        .map(|cap| {
            let name = cap.get(1).unwrap().as_str().to_string();
            Guardrail {
                id: name.clone(),
                name,
            }
        })
        .collect()
}
