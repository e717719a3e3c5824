//! Method names and parameter shapes of the workspace rpc channel.

use crate::kernel::services::ports::ResourceEdit;
use serde::{Deserialize, Serialize};

pub const START_SEARCH: &str = "$startSearch";
pub const CANCEL_SEARCH: &str = "$cancelSearch";
pub const SAVE_ALL: &str = "$saveAll";
pub const APPLY_WORKSPACE_EDIT: &str = "$applyWorkspaceEdit";
pub const ACCEPT_WORKSPACE_DATA: &str = "$acceptWorkspaceData";
pub const EXIT: &str = "exit";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSearchParams {
    pub include: String,
    pub exclude: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    pub request_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelSearchParams {
    pub request_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAllParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_untitled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyWorkspaceEditParams {
    pub edits: Vec<ResourceEdit>,
}
