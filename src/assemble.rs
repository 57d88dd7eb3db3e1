//! Render-data assembly — the object handed to the template renderer.
//!
//! Every data object starts from the merged include vars (one entry per
//! `-i` file, under its own name) and always carries a `kind` key naming
//! the render mode. The rest depends on the mode:
//!
//! - **single**: page metadata flattened at top level, plus `content`
//!   (the rendered HTML of the full body).
//! - **list**: `pages`, an array of per-file objects (metadata fields +
//!   `summary` + `summary_is_content`), in the exact order the files were
//!   given — no sorting here, ever.
//!
//! ## Merge order
//!
//! Collisions are legal and resolved purely by write order, later wins:
//!
//! ```text
//! single:     includes → kind → metadata fields → content
//! list:       includes → kind → pages
//! page entry: metadata fields → summary → summary_is_content
//! ```
//!
//! So a page whose front matter defines `content` shadows nothing — the
//! rendered `content` is written after it — while metadata can shadow an
//! include key of the same name. Templates rely on this being stable.

use crate::summary::Summary;
use serde_json::{Map, Value};

/// Data object for a `single` render.
pub fn single_data(
    includes: &Map<String, Value>,
    metadata: &Map<String, Value>,
    content: &str,
) -> Value {
    let mut data = includes.clone();
    data.insert("kind".to_string(), Value::String("single".to_string()));
    for (key, value) in metadata {
        data.insert(key.clone(), value.clone());
    }
    data.insert("content".to_string(), Value::String(content.to_string()));
    Value::Object(data)
}

/// One `pages[]` entry for a `list` render.
pub fn page_entry(metadata: &Map<String, Value>, summary: &Summary) -> Value {
    let mut entry = metadata.clone();
    entry.insert(
        "summary".to_string(),
        Value::String(summary.html.clone()),
    );
    entry.insert(
        "summary_is_content".to_string(),
        Value::Bool(summary.is_full_content),
    );
    Value::Object(entry)
}

/// Data object for a `list` render over already-built page entries.
pub fn list_data(includes: &Map<String, Value>, pages: Vec<Value>) -> Value {
    let mut data = includes.clone();
    data.insert("kind".to_string(), Value::String("list".to_string()));
    data.insert("pages".to_string(), Value::Array(pages));
    Value::Object(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    // =========================================================================
    // single_data
    // =========================================================================

    #[test]
    fn single_contains_kind_includes_metadata_content() {
        let includes = map(json!({"site": {"title": "My Site"}}));
        let metadata = map(json!({"title": "Hi", "filename": "post.md"}));

        let data = single_data(&includes, &metadata, "<p>Hello</p>");
        assert_eq!(data["kind"], json!("single"));
        assert_eq!(data["site"], json!({"title": "My Site"}));
        assert_eq!(data["title"], json!("Hi"));
        assert_eq!(data["filename"], json!("post.md"));
        assert_eq!(data["content"], json!("<p>Hello</p>"));
    }

    #[test]
    fn single_metadata_overwrites_include_key() {
        let includes = map(json!({"title": {"from": "include"}}));
        let metadata = map(json!({"title": "from metadata"}));

        let data = single_data(&includes, &metadata, "");
        assert_eq!(data["title"], json!("from metadata"));
    }

    #[test]
    fn single_content_overwrites_metadata_key() {
        let metadata = map(json!({"content": "from metadata"}));

        let data = single_data(&Map::new(), &metadata, "<p>rendered</p>");
        assert_eq!(data["content"], json!("<p>rendered</p>"));
    }

    #[test]
    fn single_metadata_overwrites_kind() {
        // Even `kind` follows plain merge order — a front-matter `kind`
        // wins because metadata is written after it
        let metadata = map(json!({"kind": "custom"}));

        let data = single_data(&Map::new(), &metadata, "");
        assert_eq!(data["kind"], json!("custom"));
    }

    // =========================================================================
    // page_entry / list_data
    // =========================================================================

    #[test]
    fn page_entry_carries_metadata_and_summary() {
        let metadata = map(json!({"title": "A", "filename": "a.md"}));
        let summary = Summary {
            html: "<p>short</p>".to_string(),
            is_full_content: true,
        };

        let entry = page_entry(&metadata, &summary);
        assert_eq!(entry["title"], json!("A"));
        assert_eq!(entry["summary"], json!("<p>short</p>"));
        assert_eq!(entry["summary_is_content"], json!(true));
    }

    #[test]
    fn page_entry_summary_overwrites_metadata_key() {
        let metadata = map(json!({"summary": "handwritten"}));
        let summary = Summary {
            html: "<p>derived</p>".to_string(),
            is_full_content: false,
        };

        let entry = page_entry(&metadata, &summary);
        assert_eq!(entry["summary"], json!("<p>derived</p>"));
        assert_eq!(entry["summary_is_content"], json!(false));
    }

    #[test]
    fn list_preserves_page_order() {
        let pages = vec![json!({"title": "b"}), json!({"title": "a"})];

        let data = list_data(&Map::new(), pages);
        assert_eq!(data["kind"], json!("list"));
        assert_eq!(data["pages"], json!([{"title": "b"}, {"title": "a"}]));
    }

    #[test]
    fn list_carries_includes() {
        let includes = map(json!({"site": {"title": "My Site"}}));

        let data = list_data(&includes, vec![]);
        assert_eq!(data["site"], json!({"title": "My Site"}));
        assert_eq!(data["pages"], json!([]));
    }

    #[test]
    fn inputs_not_mutated() {
        let includes = map(json!({"site": {}}));
        let metadata = map(json!({"title": "Hi"}));

        let _ = single_data(&includes, &metadata, "x");
        assert_eq!(includes.len(), 1);
        assert_eq!(metadata.len(), 1);
    }
}
