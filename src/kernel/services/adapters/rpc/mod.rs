//! Content-Length framed JSON-RPC channel to the side that owns the workspace.
//!
//! One writer thread drains an outbound queue, one reader thread resolves
//! responses and forwards notifications onto the host bus.

pub mod protocol;
mod wire;

use crate::kernel::services::bus::{host_bus, HostBusReceiver};
use crate::kernel::services::ports::{
    HostConfig, MainThreadWorkspace, RemoteError, RemoteFuture, ResourceEdit,
};
use lsp_server::{Message, Notification, Request, RequestId};
use lsp_types::Url;
use protocol::{ApplyWorkspaceEditParams, CancelSearchParams, SaveAllParams, StartSearchParams};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use tokio::sync::oneshot;
use wire::{mark_disconnected, reader_loop, writer_loop, RpcPending};

pub struct RpcConnection;

impl RpcConnection {
    pub fn start<R, W>(
        reader: R,
        writer: W,
        config: &HostConfig,
    ) -> std::io::Result<(RpcWorkspaceProxy, HostBusReceiver)>
    where
        R: Read + Send + 'static,
        W: Write + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<Message>();
        let pending = Arc::new(Mutex::new(RpcPending::default()));
        let (bus_tx, bus_rx) = host_bus();

        std::thread::Builder::new()
            .name(format!("{}-writer", config.rpc_thread_prefix))
            .spawn({
                let pending = pending.clone();
                move || writer_loop(writer, rx, pending)
            })?;

        std::thread::Builder::new()
            .name(format!("{}-reader", config.rpc_thread_prefix))
            .spawn({
                let pending = pending.clone();
                let tx = tx.clone();
                move || reader_loop(reader, tx, pending, bus_tx)
            })?;

        tracing::info!(prefix = %config.rpc_thread_prefix, "rpc connection started");

        let proxy = RpcWorkspaceProxy {
            inner: Arc::new(ProxyInner {
                tx,
                pending,
                next_id: AtomicI32::new(1),
            }),
        };
        Ok((proxy, bus_rx))
    }
}

struct ProxyInner {
    tx: mpsc::Sender<Message>,
    pending: Arc<Mutex<RpcPending>>,
    next_id: AtomicI32,
}

/// [`MainThreadWorkspace`] over the rpc channel.
#[derive(Clone)]
pub struct RpcWorkspaceProxy {
    inner: Arc<ProxyInner>,
}

impl RpcWorkspaceProxy {
    fn request<P, T>(&self, method: &str, params: P) -> RemoteFuture<T>
    where
        P: Serialize,
        T: DeserializeOwned + Send + 'static,
    {
        let id = RequestId::from(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let (resp_tx, resp_rx) = oneshot::channel();

        {
            let Ok(mut pending) = self.inner.pending.lock() else {
                return Box::pin(std::future::ready(Err(RemoteError::Disconnected)));
            };
            if pending.closed {
                return Box::pin(std::future::ready(Err(RemoteError::Disconnected)));
            }
            pending.responders.insert(id.clone(), resp_tx);
        }

        tracing::debug!(id = ?id, method = %method, "rpc request");
        let msg = Message::Request(Request::new(id, method.to_string(), params));
        if self.inner.tx.send(msg).is_err() {
            tracing::warn!("rpc writer channel closed");
            mark_disconnected(&self.inner.pending);
        }

        Box::pin(async move {
            let value = resp_rx.await.map_err(|_| RemoteError::Disconnected)??;
            Ok(serde_json::from_value(value)?)
        })
    }

    fn notify<P: Serialize>(&self, method: &str, params: P) {
        let msg = Message::Notification(Notification::new(method.to_string(), params));
        if self.inner.tx.send(msg).is_err() {
            tracing::debug!(method = %method, "rpc notification dropped");
        }
    }
}

impl MainThreadWorkspace for RpcWorkspaceProxy {
    fn start_search(
        &self,
        include: String,
        exclude: String,
        max_results: Option<u32>,
        request_id: u64,
    ) -> RemoteFuture<Vec<Url>> {
        let params = StartSearchParams {
            include,
            exclude,
            max_results,
            request_id,
        };
        self.request(protocol::START_SEARCH, params)
    }

    fn cancel_search(&self, request_id: u64) {
        self.notify(protocol::CANCEL_SEARCH, CancelSearchParams { request_id });
    }

    fn save_all(&self, include_untitled: Option<bool>) -> RemoteFuture<bool> {
        self.request(protocol::SAVE_ALL, SaveAllParams { include_untitled })
    }

    fn apply_workspace_edit(&self, edits: Vec<ResourceEdit>) -> RemoteFuture<bool> {
        self.request(
            protocol::APPLY_WORKSPACE_EDIT,
            ApplyWorkspaceEditParams { edits },
        )
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/rpc.rs"]
mod tests;
