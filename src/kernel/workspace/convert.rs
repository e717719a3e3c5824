use crate::kernel::services::ports::{EndOfLine, WireEndOfLine, WireRange};

/// Zero-based line/character to the one-based wire range.
pub fn range_to_wire(range: lsp_types::Range) -> WireRange {
    WireRange {
        start_line_number: range.start.line.saturating_add(1),
        start_column: range.start.character.saturating_add(1),
        end_line_number: range.end.line.saturating_add(1),
        end_column: range.end.character.saturating_add(1),
    }
}

pub fn eol_to_wire(eol: EndOfLine) -> WireEndOfLine {
    match eol {
        EndOfLine::Lf => WireEndOfLine::Lf,
        EndOfLine::CrLf => WireEndOfLine::CrLf,
    }
}
