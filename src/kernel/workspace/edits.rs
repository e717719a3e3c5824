//! Bulk text edits grouped per resource, and their flat wire form.

use super::convert::{eol_to_wire, range_to_wire};
use crate::kernel::services::ports::{EndOfLine, ResourceEdit, TextEdit};
use lsp_types::{Position, Range, Url};

/// Text edits grouped by resource. Resources enumerate in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceEdit {
    entries: Vec<(Url, Vec<TextEdit>)>,
}

impl WorkspaceEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, uri: &Url, range: Range, new_text: impl Into<String>) {
        self.push(uri, TextEdit::replace(range, new_text));
    }

    pub fn insert(&mut self, uri: &Url, position: Position, new_text: impl Into<String>) {
        self.push(uri, TextEdit::insert(position, new_text));
    }

    pub fn delete(&mut self, uri: &Url, range: Range) {
        self.push(uri, TextEdit::delete(range));
    }

    pub fn set_end_of_line(&mut self, uri: &Url, eol: EndOfLine) {
        self.push(uri, TextEdit::set_end_of_line(eol));
    }

    /// Replaces every edit for `uri`, keeping its place in the enumeration.
    pub fn set(&mut self, uri: &Url, edits: Vec<TextEdit>) {
        match self.position(uri) {
            Some(idx) => self.entries[idx].1 = edits,
            None => self.entries.push((uri.clone(), edits)),
        }
    }

    pub fn get(&self, uri: &Url) -> Option<&[TextEdit]> {
        self.position(uri)
            .map(|idx| self.entries[idx].1.as_slice())
    }

    pub fn has(&self, uri: &Url) -> bool {
        self.position(uri).is_some()
    }

    /// Number of resources touched.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(Url, Vec<TextEdit>)] {
        &self.entries
    }

    fn push(&mut self, uri: &Url, edit: TextEdit) {
        match self.position(uri) {
            Some(idx) => self.entries[idx].1.push(edit),
            None => self.entries.push((uri.clone(), vec![edit])),
        }
    }

    fn position(&self, uri: &Url) -> Option<usize> {
        self.entries
            .iter()
            .position(|(entry, _)| entry.as_str() == uri.as_str())
    }
}

/// Flattens `edit` resource-major, edit-minor into wire records.
///
/// Edits without a range pass through with no range.
pub fn translate(edit: &WorkspaceEdit) -> Vec<ResourceEdit> {
    let total = edit.entries.iter().map(|(_, edits)| edits.len()).sum();
    let mut out = Vec::with_capacity(total);

    for (resource, edits) in &edit.entries {
        for text_edit in edits {
            out.push(ResourceEdit {
                resource: resource.clone(),
                new_text: text_edit.new_text.clone(),
                new_eol: text_edit.new_eol.map(eol_to_wire),
                range: text_edit.range.map(range_to_wire),
            });
        }
    }

    out
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/workspace/edits.rs"]
mod tests;
