// HTML templates — embedded at compile time from `templates/`.
//
// Placeholders are `{{name}}`. Rendering is a single left-to-right pass, so
// substituted values are never scanned for further placeholders. Callers
// pass values that are already HTML-escaped.

use std::collections::HashMap;

use anyhow::{Context, Result};
use include_dir::{include_dir, Dir};

use crate::db::models::WordRecord;

pub static TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

pub const UPLOAD_FORM: &str = "upload_form.html";
pub const RESULT: &str = "result.html";

/// Render a template with the given placeholder values.
///
/// Unknown placeholders render as empty strings.
pub fn render(name: &str, vars: &[(&str, &str)]) -> Result<String> {
    let source = TEMPLATES
        .get_file(name)
        .and_then(|f| f.contents_utf8())
        .with_context(|| format!("Template {name} is missing or not UTF-8"))?;

    let vars: HashMap<&str, &str> = vars.iter().copied().collect();
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                out.push_str(vars.get(key).copied().unwrap_or(""));
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// The upload form, optionally with a validation message above it.
pub fn upload_form(error: Option<&str>) -> Result<String> {
    let error_html = error
        .map(|e| format!("<p class=\"error\">{}</p>", escape_html(e)))
        .unwrap_or_default();
    render(UPLOAD_FORM, &[("error", error_html.as_str())])
}

/// The ranked word table.
pub fn result_page(words: &[WordRecord]) -> Result<String> {
    let rows = if words.is_empty() {
        "      <tr><td colspan=\"4\">No words stored yet.</td></tr>".to_string()
    } else {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                format!(
                    "      <tr><td>{}</td><td>{}</td><td class=\"num\">{:.6}</td><td class=\"num\">{:.6}</td></tr>",
                    i + 1,
                    escape_html(&w.word),
                    w.tf,
                    w.idf
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    let count = words.len().to_string();
    render(RESULT, &[("count", count.as_str()), ("rows", rows.as_str())])
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str, idf: f64) -> WordRecord {
        WordRecord {
            id: 1,
            upload_id: None,
            word: word.to_string(),
            tf: 0.5,
            idf,
            created_at: None,
        }
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let html = render(RESULT, &[("count", "{{rows}}"), ("rows", "X")]).unwrap();
        assert!(html.contains("Top {{rows}} words"));
    }

    #[test]
    fn test_missing_template_is_error() {
        assert!(render("nope.html", &[]).is_err());
    }

    #[test]
    fn test_upload_form_escapes_error() {
        let html = upload_form(Some("<b>bad</b>")).unwrap();
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
        assert!(!upload_form(None).unwrap().contains("class=\"error\""));
    }

    #[test]
    fn test_result_page_lists_words_in_order() {
        let html = result_page(&[record("dog", -0.693147), record("cat", -1.098612)]).unwrap();
        let dog = html.find("<td>dog</td>").unwrap();
        let cat = html.find("<td>cat</td>").unwrap();
        assert!(dog < cat);
        assert!(html.contains("Top 2 words"));
        assert!(html.contains("-0.693147"));
    }

    #[test]
    fn test_result_page_empty() {
        assert!(result_page(&[]).unwrap().contains("No words stored yet."));
    }
}
