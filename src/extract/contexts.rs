//! Context recognizer: `class <name>(BaseModel):` schema definitions.

use regex::Regex;

use super::first_docstring;
use crate::model::{Context, Property};

/// Extract context schema definitions from source text.
///
/// The class body is taken as the text from the match up to the next `class`
/// keyword (or end of text). The description is the first docstring within
/// that body; properties come from the field pattern
/// `name: [Optional[]]type = default`.
pub fn extract_contexts(content: &str) -> Vec<Context> {
    let context_re =
        Regex::new(r"class\s+(\w+)\s*\(\s*BaseModel\s*\):").expect("Invalid regex pattern");
    let class_kw_re = Regex::new(r"\bclass\s").expect("Invalid regex pattern");
    let property_re =
        Regex::new(r"(\w+):\s*(?:Optional\[)?(\w+)(?:\])?\s*=").expect("Invalid regex pattern");

    let mut contexts = Vec::new();

    for cap in context_re.captures_iter(content) {
        let name = cap.get(1).unwrap().as_str().to_string();

        let body_start = cap.get(0).unwrap().end();
        let body_end = class_kw_re
            .find(&content[body_start..])
            .map(|m| body_start + m.start())
            .unwrap_or(content.len());
        let body = &content[body_start..body_end];

        let description = first_docstring(body).unwrap_or_default();

        let properties = property_re
            .captures_iter(body)
            .map(|prop| Property {
                name: prop.get(1).unwrap().as_str().to_string(),
                ty: prop.get(2).unwrap().as_str().to_string(),
            })
            .collect();

        contexts.push(Context {
            id: name.clone(),
            name,
            description,
            properties,
        });
    }

    contexts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_context_with_fields() {
        let src = r#"
class TaskContext(BaseModel):
    """Tracks task state across agents"""
    task_id: Optional[str] = None
    priority: Optional[int] = None
    status: str = "open"
"#;
        let contexts = extract_contexts(src);
        assert_eq!(contexts.len(), 1);
        let ctx = &contexts[0];
        assert_eq!(ctx.id, "TaskContext");
        assert_eq!(ctx.name, "TaskContext");
        assert_eq!(ctx.description, "Tracks task state across agents");
        let fields: Vec<(_, _)> = ctx
            .properties
            .iter()
            .map(|p| (p.name.as_str(), p.ty.as_str()))
            .collect();
        assert_eq!(
            fields,
            vec![("task_id", "str"), ("priority", "int"), ("status", "str")]
        );
    }

    #[test]
    fn test_body_bounded_by_next_class() {
        let src = r#"
class First(BaseModel):
    a: str = ""

class Second(BaseModel):
    """Second's docstring"""
    b: int = 0
"#;
        let contexts = extract_contexts(src);
        assert_eq!(contexts.len(), 2);
        assert!(contexts[0].description.is_empty());
        assert_eq!(contexts[0].properties.len(), 1);
        assert_eq!(contexts[1].description, "Second's docstring");
        assert_eq!(contexts[1].properties[0].name, "b");
    }

    #[test]
    fn test_non_basemodel_class_ignored() {
        let src = "class Helper(object):\n    pass\n";
        assert!(extract_contexts(src).is_empty());
    }

    #[test]
    fn test_context_without_docstring_or_fields() {
        let src = "class Empty(BaseModel):\n    pass\n";
        let contexts = extract_contexts(src);
        assert_eq!(contexts.len(), 1);
        assert!(contexts[0].description.is_empty());
        assert!(contexts[0].properties.is_empty());
    }
}
