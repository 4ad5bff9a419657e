//! Data-binding resolution.
//!
//! The tabular data source lives outside the core; at render time each slot
//! receives at most one [`DataRow`]. A text element's displayed content is
//! computed as: if a binding named `content` names a column, use that
//! column's value (empty when the column or row is missing); otherwise
//! substitute `{ColumnName}` tokens against the row, case-insensitively,
//! leaving unmatched tokens verbatim. Placeholders resolve their `source`
//! property the same way, falling back to the static source when unbound.
//!
//! Binding misses are never errors: the value degrades to empty and a
//! [`MissingReference`] diagnostic is collected for the user.

use crate::model::{ElementId, PlaceholderElement, TextElement};

/// Property name carrying a text element's whole content.
pub const CONTENT_PROPERTY: &str = "content";

/// Property name carrying a placeholder's source value.
pub const SOURCE_PROPERTY: &str = "source";

/// One row of the external data table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataRow {
    values: Vec<(String, String)>,
}

impl DataRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Case-insensitive column lookup.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }
}

/// Non-fatal diagnostic: a binding names a column the row does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReference {
    pub element_id: ElementId,
    pub column: String,
}

/// Resolves the displayed content of a text element for one row.
pub fn resolve_text_content(
    element_id: ElementId,
    text: &TextElement,
    row: Option<&DataRow>,
    issues: &mut Vec<MissingReference>,
) -> String {
    if let Some(binding) = text.binding(CONTENT_PROPERTY) {
        return match row.and_then(|r| r.get(&binding.column)) {
            Some(value) => value.to_string(),
            None => {
                issues.push(MissingReference {
                    element_id,
                    column: binding.column.clone(),
                });
                String::new()
            }
        };
    }
    substitute_tokens(&text.content, row)
}

/// Resolves a placeholder's source value (image name or QR payload).
///
/// Returns `None` when nothing resolves; the rendering sink draws the empty
/// placeholder frame in that case.
pub fn resolve_placeholder_source(
    element_id: ElementId,
    placeholder: &PlaceholderElement,
    row: Option<&DataRow>,
    issues: &mut Vec<MissingReference>,
) -> Option<String> {
    if let Some(binding) = placeholder.binding(SOURCE_PROPERTY) {
        match row.and_then(|r| r.get(&binding.column)) {
            Some(value) => return Some(value.to_string()),
            None => {
                issues.push(MissingReference {
                    element_id,
                    column: binding.column.clone(),
                });
                return placeholder.static_source.clone();
            }
        }
    }
    placeholder.static_source.clone()
}

/// Replaces `{ColumnName}` tokens with row values, case-insensitively.
///
/// Unmatched or unterminated tokens stay verbatim; they are a design-time
/// affordance, not a broken reference.
pub fn substitute_tokens(content: &str, row: Option<&DataRow>) -> String {
    let Some(row) = row else {
        return content.to_string();
    };

    let mut result = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find('}') {
            Some(close) => {
                let token = &after_open[..close];
                match row.get(token) {
                    Some(value) => result.push_str(value),
                    None => {
                        result.push('{');
                        result.push_str(token);
                        result.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            None => {
                // Unterminated token: keep the rest verbatim.
                result.push_str(&rest[open..]);
                return result;
            }
        }
    }
    result.push_str(rest);
    result
}
