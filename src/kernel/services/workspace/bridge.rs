use crate::kernel::services::ports::{CancellationToken, MainThreadWorkspace, RemoteFuture};
use lsp_types::Url;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Forwards search/save calls to the main side and ties cancellation tokens to
/// `$cancelSearch` messages.
///
/// Request ids come from a counter owned by this instance: they start at 0 and
/// are never reused, also not after a call finished or was cancelled.
pub struct RemoteOperationBridge {
    proxy: Arc<dyn MainThreadWorkspace>,
    next_request_id: AtomicU64,
}

impl RemoteOperationBridge {
    pub fn new(proxy: Arc<dyn MainThreadWorkspace>) -> Self {
        Self {
            proxy,
            next_request_id: AtomicU64::new(0),
        }
    }

    fn next_request_id(&self) -> u64 {
        self.next_request_id.fetch_add(1, Ordering::Relaxed)
    }

    /// The returned future is the remote one, untouched. Firing `token` only
    /// sends the cancel message; the remote side decides how the search ends.
    pub fn find_files(
        &self,
        include: &str,
        exclude: &str,
        max_results: Option<u32>,
        token: Option<&CancellationToken>,
    ) -> RemoteFuture<Vec<Url>> {
        let request_id = self.next_request_id();
        tracing::debug!(request_id, include, exclude, ?max_results, "start search");

        let result = self.proxy.start_search(
            include.to_string(),
            exclude.to_string(),
            max_results,
            request_id,
        );

        if let Some(token) = token {
            let proxy = Arc::clone(&self.proxy);
            token.on_cancellation_requested(move || {
                tracing::debug!(request_id, "cancel search");
                proxy.cancel_search(request_id);
            });
        }

        result
    }

    pub fn save_all(&self, include_untitled: Option<bool>) -> RemoteFuture<bool> {
        self.proxy.save_all(include_untitled)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/workspace/bridge.rs"]
mod tests;
