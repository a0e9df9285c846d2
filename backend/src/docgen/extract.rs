//! Placeholder extraction from document text.
//!
//! The document's textual content is flattened into one stream: every body
//! paragraph first, then every table cell row-major, joined with newlines (a
//! separator that can never be part of a placeholder). The stream is scanned
//! for `[KEY]` and `{{KEY}}` tokens; captured keys are trimmed, inner
//! whitespace runs collapse to a single underscore, and both syntaxes merge
//! by normalized value.

use docx_rs::{DocumentChild, Docx, Paragraph, ParagraphChild, RunChild, Table, TableChild, TableRowChild, TableCellContent};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static SINGLE_BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("valid regex"));

static DOUBLE_BRACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("valid regex"));

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Concatenated text of a paragraph's runs.
pub(crate) fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

fn table_texts(table: &Table, parts: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                if let TableCellContent::Paragraph(p) = content {
                    parts.push(paragraph_text(p));
                }
            }
        }
    }
}

/// Flattens the document into one text stream: body paragraphs, then every
/// table's cell paragraphs row-major. Nested tables inside cells are not
/// recursed.
pub fn collect_document_text(docx: &Docx) -> String {
    let mut parts: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(p) = child {
            parts.push(paragraph_text(p));
        }
    }
    for child in &docx.document.children {
        if let DocumentChild::Table(table) = child {
            table_texts(table, &mut parts);
        }
    }
    parts.join("\n")
}

/// Extracts the sorted set of unique, normalized placeholder keys from a
/// parsed document. Keys that are blank after trimming (e.g. `[ ]`) are
/// dropped.
pub fn extract_placeholders(docx: &Docx) -> Vec<String> {
    extract_from_text(&collect_document_text(docx))
}

pub(crate) fn extract_from_text(text: &str) -> Vec<String> {
    let mut keys = BTreeSet::new();
    for caps in SINGLE_BRACKET_RE.captures_iter(text) {
        if let Some(key) = normalize_key(&caps[1]) {
            keys.insert(key);
        }
    }
    for caps in DOUBLE_BRACE_RE.captures_iter(text) {
        if let Some(key) = normalize_key(&caps[1]) {
            keys.insert(key);
        }
    }
    keys.into_iter().collect()
}

/// `None` when the raw capture is only whitespace.
fn normalize_key(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(WHITESPACE_RUN_RE.replace_all(trimmed, "_").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merges_both_syntaxes_by_normalized_key() {
        let keys = extract_from_text("Dear [CONSIGNEE], ref {{CONSIGNEE}} / {{REF_NO}}");
        assert_eq!(keys, vec!["CONSIGNEE".to_string(), "REF_NO".to_string()]);
    }

    #[test]
    fn output_is_sorted_and_unique() {
        let keys = extract_from_text("[b] [a] [b] {{a}} [c]");
        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    }

    #[test]
    fn collapses_inner_whitespace_to_underscore() {
        let keys = extract_from_text("Sign here: [Full  Name]");
        assert_eq!(keys, vec!["Full_Name".to_string()]);

        let keys = extract_from_text("{{ Port of   Discharge }}");
        assert_eq!(keys, vec!["Port_of_Discharge".to_string()]);
    }

    #[test]
    fn drops_keys_that_are_blank_after_trimming() {
        assert!(extract_from_text("[ ] and {{   }}").is_empty());
    }

    #[test]
    fn ignores_unbalanced_tokens() {
        assert!(extract_from_text("a { single } brace and an open [ bracket").is_empty());
    }
}
