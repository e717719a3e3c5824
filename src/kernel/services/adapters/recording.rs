//! In-process stand-in for the main side: records every call and answers with
//! canned results. Used by tests and by embedders without a real transport.

use crate::kernel::services::ports::{
    MainThreadWorkspace, RemoteFuture, RemoteResult, ResourceEdit,
};
use lsp_types::Url;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    StartSearch {
        include: String,
        exclude: String,
        max_results: Option<u32>,
        request_id: u64,
    },
    CancelSearch {
        request_id: u64,
    },
    SaveAll {
        include_untitled: Option<bool>,
    },
    ApplyWorkspaceEdit {
        edits: Vec<ResourceEdit>,
    },
}

pub struct RecordingWorkspace {
    calls: Mutex<Vec<RecordedCall>>,
    search_result: Mutex<RemoteResult<Vec<Url>>>,
    save_result: Mutex<RemoteResult<bool>>,
    apply_result: Mutex<RemoteResult<bool>>,
}

impl RecordingWorkspace {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            search_result: Mutex::new(Ok(Vec::new())),
            save_result: Mutex::new(Ok(true)),
            apply_result: Mutex::new(Ok(true)),
        }
    }

    pub fn with_search_result(self, result: RemoteResult<Vec<Url>>) -> Self {
        if let Ok(mut slot) = self.search_result.lock() {
            *slot = result;
        }
        self
    }

    pub fn with_save_result(self, result: RemoteResult<bool>) -> Self {
        if let Ok(mut slot) = self.save_result.lock() {
            *slot = result;
        }
        self
    }

    pub fn with_apply_result(self, result: RemoteResult<bool>) -> Self {
        if let Ok(mut slot) = self.apply_result.lock() {
            *slot = result;
        }
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn take_calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|mut calls| std::mem::take(&mut *calls))
            .unwrap_or_default()
    }

    fn record(&self, call: RecordedCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn canned<T: Clone + Send + 'static>(
        slot: &Mutex<RemoteResult<T>>,
        fallback: T,
    ) -> RemoteFuture<T> {
        let result = slot.lock().map(|r| (*r).clone()).unwrap_or(Ok(fallback));
        Box::pin(std::future::ready(result))
    }
}

impl Default for RecordingWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl MainThreadWorkspace for RecordingWorkspace {
    fn start_search(
        &self,
        include: String,
        exclude: String,
        max_results: Option<u32>,
        request_id: u64,
    ) -> RemoteFuture<Vec<Url>> {
        self.record(RecordedCall::StartSearch {
            include,
            exclude,
            max_results,
            request_id,
        });
        Self::canned(&self.search_result, Vec::new())
    }

    fn cancel_search(&self, request_id: u64) {
        self.record(RecordedCall::CancelSearch { request_id });
    }

    fn save_all(&self, include_untitled: Option<bool>) -> RemoteFuture<bool> {
        self.record(RecordedCall::SaveAll { include_untitled });
        Self::canned(&self.save_result, true)
    }

    fn apply_workspace_edit(&self, edits: Vec<ResourceEdit>) -> RemoteFuture<bool> {
        self.record(RecordedCall::ApplyWorkspaceEdit { edits });
        Self::canned(&self.apply_result, true)
    }
}
