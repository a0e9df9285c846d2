//! Placeholder substitution producing a filled `.docx` in memory.
//!
//! Two strategies exist. The structured one treats the document as a
//! double-brace template: every `{{ KEY }}` token is rendered from a context
//! covering all schema keys, and unknown variables render as empty strings.
//! The naive one literal-replaces both `[KEY]` and `{{KEY}}` for every schema
//! key. Both walk the document the same way (body paragraphs, then each
//! table's cells) and share the collapsing rule: when a paragraph's
//! concatenated text changed, its whole run sequence is replaced by a single
//! run holding the new text. Inline formatting inside a changed paragraph is
//! lost; that is the documented trade for not having to track placeholder
//! fragments across run boundaries.

use super::extract::paragraph_text;
use super::{DocgenError, Result};
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, Run, Table, TableChild, TableRowChild, TableCellContent};
use regex::{Captures, Regex};
use std::collections::{BTreeMap, HashMap};
use std::io::Cursor;
use std::path::Path;
use std::sync::LazyLock;

static TEMPLATE_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^}]+?)\s*\}\}").expect("valid regex"));

/// Substitution strategy, resolved once at process start from configuration
/// and passed down unchanged; availability is never re-probed per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStrategy {
    /// Double-brace-only templating over a context covering every schema key.
    Structured,
    /// Literal replacement of both `[KEY]` and `{{KEY}}` forms.
    NaiveReplace,
}

/// Fills the template file at `path` with `values` and returns the finished
/// document as a byte buffer. Keys absent from `values` substitute as empty
/// strings; `values` entries outside the schema are ignored.
pub fn fill(
    path: &Path,
    schema: &BTreeMap<String, String>,
    values: &HashMap<String, String>,
    strategy: FillStrategy,
) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            DocgenError::NotFound(format!("template file {}", path.display()))
        }
        _ => DocgenError::Generation(e.to_string()),
    })?;
    let mut docx = read_docx(&bytes).map_err(|e| DocgenError::Format(e.to_string()))?;

    // Context covering every schema key; absent values default to empty.
    let context: HashMap<&str, &str> = schema
        .keys()
        .map(|key| {
            (
                key.as_str(),
                values.get(key).map(String::as_str).unwrap_or(""),
            )
        })
        .collect();

    for child in &mut docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            substitute_paragraph(paragraph, &context, strategy);
        }
    }
    for child in &mut docx.document.children {
        if let DocumentChild::Table(table) = child {
            substitute_table(table, &context, strategy);
        }
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| DocgenError::Generation(e.to_string()))?;
    Ok(cursor.into_inner())
}

fn substitute_table(table: &mut Table, context: &HashMap<&str, &str>, strategy: FillStrategy) {
    for row in &mut table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &mut row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &mut cell.children {
                if let TableCellContent::Paragraph(paragraph) = content {
                    substitute_paragraph(paragraph, context, strategy);
                }
            }
        }
    }
}

/// Substitutes within one paragraph. When the concatenated run text changed,
/// the entire run sequence collapses into a single run holding the new text;
/// untouched paragraphs keep their runs.
fn substitute_paragraph(
    paragraph: &mut Paragraph,
    context: &HashMap<&str, &str>,
    strategy: FillStrategy,
) {
    let has_runs = paragraph
        .children
        .iter()
        .any(|c| matches!(c, ParagraphChild::Run(_)));
    if !has_runs {
        return;
    }

    let original = paragraph_text(paragraph);
    let substituted = match strategy {
        FillStrategy::Structured => render_structured(&original, context),
        FillStrategy::NaiveReplace => render_naive(&original, context),
    };

    if substituted != original {
        paragraph
            .children
            .retain(|c| !matches!(c, ParagraphChild::Run(_)));
        paragraph
            .children
            .push(ParagraphChild::Run(Box::new(Run::new().add_text(substituted))));
    }
}

/// Renders every `{{ KEY }}` token; unknown variables render empty, like an
/// undefined variable in a double-brace templating engine.
fn render_structured(text: &str, context: &HashMap<&str, &str>) -> String {
    TEMPLATE_VAR_RE
        .replace_all(text, |caps: &Captures| {
            context
                .get(caps[1].trim())
                .map(|value| value.to_string())
                .unwrap_or_default()
        })
        .into_owned()
}

/// Literal replacement of both bracket forms for every schema key.
fn render_naive(text: &str, context: &HashMap<&str, &str>) -> String {
    let mut out = text.to_string();
    for (key, value) in context {
        out = out.replace(&format!("[{key}]"), value);
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn context<'a>(pairs: &[(&'a str, &'a str)]) -> HashMap<&'a str, &'a str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn structured_replaces_known_variables() {
        let ctx = context(&[("NAME", "Alice")]);
        assert_eq!(render_structured("Hello {{NAME}}", &ctx), "Hello Alice");
        assert_eq!(render_structured("Hello {{ NAME }}", &ctx), "Hello Alice");
    }

    #[test]
    fn structured_renders_unknown_variables_empty() {
        let ctx = context(&[("NAME", "Alice")]);
        assert_eq!(render_structured("Hi {{NAME}}{{OTHER}}!", &ctx), "Hi Alice!");
    }

    #[test]
    fn structured_leaves_single_bracket_form_alone() {
        let ctx = context(&[("NAME", "Alice")]);
        assert_eq!(render_structured("Hello [NAME]", &ctx), "Hello [NAME]");
    }

    #[test]
    fn naive_replaces_both_forms() {
        let ctx = context(&[("NAME", "Alice")]);
        assert_eq!(
            render_naive("Hello [NAME] aka {{NAME}}", &ctx),
            "Hello Alice aka Alice"
        );
    }

    #[test]
    fn naive_substitutes_empty_for_missing_values() {
        let ctx = context(&[("CODE", "")]);
        assert_eq!(render_naive("Code: [CODE].", &ctx), "Code: .");
    }
}
