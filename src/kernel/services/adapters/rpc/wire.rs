use super::protocol;
use crate::kernel::services::bus::{HostBusSender, HostMessage};
use crate::kernel::services::ports::{RemoteError, RemoteResult, WorkspaceData};
use lsp_server::{ErrorCode, Message, Notification, Request, RequestId, Response};
use rustc_hash::FxHashMap;
use serde_json::Value;
use std::io::{BufReader, BufWriter, Read, Write};
use std::sync::{mpsc, Arc, Mutex};
use tokio::sync::oneshot;

pub(super) type Responder = oneshot::Sender<RemoteResult<Value>>;

#[derive(Default)]
pub(super) struct RpcPending {
    pub(super) closed: bool,
    pub(super) responders: FxHashMap<RequestId, Responder>,
}

/// Fails every outstanding request and refuses new ones.
pub(super) fn mark_disconnected(pending: &Arc<Mutex<RpcPending>>) {
    let drained = {
        let Ok(mut pending) = pending.lock() else {
            return;
        };
        pending.closed = true;
        pending.responders.drain().collect::<Vec<_>>()
    };

    if !drained.is_empty() {
        tracing::warn!(count = drained.len(), "failing pending rpc requests");
    }
    for (_, responder) in drained {
        let _ = responder.send(Err(RemoteError::Disconnected));
    }
}

pub(super) fn writer_loop<W: Write>(
    writer: W,
    rx: mpsc::Receiver<Message>,
    pending: Arc<Mutex<RpcPending>>,
) {
    let mut writer = BufWriter::new(writer);
    while let Ok(msg) = rx.recv() {
        if let Err(e) = msg.write(&mut writer) {
            tracing::warn!(error = %e, "rpc write failed");
            break;
        }
    }
    mark_disconnected(&pending);
}

pub(super) fn reader_loop<R: Read>(
    reader: R,
    tx: mpsc::Sender<Message>,
    pending: Arc<Mutex<RpcPending>>,
    bus: HostBusSender,
) {
    let mut reader = BufReader::new(reader);

    loop {
        let msg = match Message::read(&mut reader) {
            Ok(Some(msg)) => msg,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "rpc read failed");
                break;
            }
        };

        match msg {
            Message::Response(resp) => resolve(&pending, resp),
            Message::Notification(not) => {
                if !dispatch_notification(not, &bus) {
                    break;
                }
            }
            Message::Request(req) => reject_request(&tx, req),
        }
    }

    mark_disconnected(&pending);
    let _ = bus.send(HostMessage::Disconnected);
}

fn resolve(pending: &Arc<Mutex<RpcPending>>, resp: Response) {
    let responder = pending
        .lock()
        .ok()
        .and_then(|mut pending| pending.responders.remove(&resp.id));
    let Some(responder) = responder else {
        tracing::debug!(id = ?resp.id, "rpc response for unknown request");
        return;
    };

    let result = match resp.error {
        Some(err) => Err(RemoteError::Rejected {
            code: err.code,
            message: err.message,
        }),
        None => Ok(resp.result.unwrap_or(Value::Null)),
    };
    let _ = responder.send(result);
}

/// Returns `false` once the host loop is gone.
fn dispatch_notification(not: Notification, bus: &HostBusSender) -> bool {
    let msg = match not.method.as_str() {
        protocol::ACCEPT_WORKSPACE_DATA => {
            match serde_json::from_value::<Option<WorkspaceData>>(not.params) {
                Ok(data) => HostMessage::AcceptWorkspaceData(data),
                Err(e) => {
                    tracing::warn!(error = %e, "invalid workspace data");
                    return true;
                }
            }
        }
        protocol::EXIT => HostMessage::Exit,
        other => {
            tracing::debug!(method = %other, "ignoring rpc notification");
            return true;
        }
    };

    bus.send(msg).is_ok()
}

fn reject_request(tx: &mpsc::Sender<Message>, req: Request) {
    tracing::debug!(method = %req.method, "unsupported rpc request");
    let resp = Response::new_err(
        req.id,
        ErrorCode::MethodNotFound as i32,
        format!("method not found: {}", req.method),
    );
    let _ = tx.send(Message::Response(resp));
}
