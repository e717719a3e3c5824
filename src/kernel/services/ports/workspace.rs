//! Workspace data contracts shared by the kernel and the transport adapters.

use lsp_types::{Position, Range, Url};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Deferred result of a call executed by the authoritative side.
pub type RemoteFuture<T> = Pin<Box<dyn Future<Output = RemoteResult<T>> + Send + 'static>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    Disconnected,
    Rejected { code: i32, message: String },
    InvalidResponse(String),
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::Disconnected => write!(f, "Remote side disconnected"),
            RemoteError::Rejected { code, message } => {
                write!(f, "Remote call rejected ({}): {}", code, message)
            }
            RemoteError::InvalidResponse(msg) => write!(f, "Invalid remote response: {}", msg),
        }
    }
}

impl std::error::Error for RemoteError {}

impl From<serde_json::Error> for RemoteError {
    fn from(e: serde_json::Error) -> Self {
        RemoteError::InvalidResponse(e.to_string())
    }
}

/// Authoritative workspace record as pushed by `$acceptWorkspaceData`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub roots: Vec<Url>,
}

impl WorkspaceData {
    pub fn new(id: impl Into<String>, name: impl Into<String>, roots: Vec<Url>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roots,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndOfLine {
    Lf,
    CrLf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Option<Range>,
    pub new_text: String,
    pub new_eol: Option<EndOfLine>,
}

impl TextEdit {
    pub fn replace(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range: Some(range),
            new_text: new_text.into(),
            new_eol: None,
        }
    }

    pub fn insert(position: Position, new_text: impl Into<String>) -> Self {
        Self::replace(Range::new(position, position), new_text)
    }

    pub fn delete(range: Range) -> Self {
        Self::replace(range, String::new())
    }

    pub fn set_end_of_line(eol: EndOfLine) -> Self {
        Self {
            range: None,
            new_text: String::new(),
            new_eol: Some(eol),
        }
    }
}

/// One-based range as the authority's edit engine expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRange {
    pub start_line_number: u32,
    pub start_column: u32,
    pub end_line_number: u32,
    pub end_column: u32,
}

/// Numeric end-of-line kind on the wire: `1` = LF, `2` = CRLF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum WireEndOfLine {
    Lf,
    CrLf,
}

impl From<WireEndOfLine> for u8 {
    fn from(eol: WireEndOfLine) -> Self {
        match eol {
            WireEndOfLine::Lf => 1,
            WireEndOfLine::CrLf => 2,
        }
    }
}

impl TryFrom<u8> for WireEndOfLine {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(WireEndOfLine::Lf),
            2 => Ok(WireEndOfLine::CrLf),
            other => Err(format!("unknown end of line kind: {other}")),
        }
    }
}

/// Flat wire record, one per text edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEdit {
    pub resource: Url,
    pub new_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_eol: Option<WireEndOfLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<WireRange>,
}

/// Calls issued to the side that owns the workspace.
pub trait MainThreadWorkspace: Send + Sync {
    fn start_search(
        &self,
        include: String,
        exclude: String,
        max_results: Option<u32>,
        request_id: u64,
    ) -> RemoteFuture<Vec<Url>>;

    /// Fire-and-forget; cancelling a finished search is a no-op on the remote side.
    fn cancel_search(&self, request_id: u64);

    fn save_all(&self, include_untitled: Option<bool>) -> RemoteFuture<bool>;

    fn apply_workspace_edit(&self, edits: Vec<ResourceEdit>) -> RemoteFuture<bool>;
}
