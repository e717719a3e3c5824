use crate::kernel::services::ports::WorkspaceData;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

/// Inbound traffic from the main side, consumed by the host loop in arrival order.
#[derive(Debug)]
pub enum HostMessage {
    AcceptWorkspaceData(Option<WorkspaceData>),
    Exit,
    Disconnected,
}

#[derive(Clone)]
pub struct HostBusSender {
    tx: Sender<HostMessage>,
}

pub struct HostBusReceiver {
    rx: Receiver<HostMessage>,
}

pub fn host_bus() -> (HostBusSender, HostBusReceiver) {
    let (tx, rx) = mpsc::channel();
    (HostBusSender { tx }, HostBusReceiver { rx })
}

impl HostBusSender {
    pub fn send(&self, msg: HostMessage) -> Result<(), mpsc::SendError<HostMessage>> {
        self.tx.send(msg)
    }
}

impl HostBusReceiver {
    pub fn recv(&self) -> Option<HostMessage> {
        self.rx.recv().ok()
    }

    pub fn try_recv(&self) -> Result<HostMessage, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<HostMessage, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
