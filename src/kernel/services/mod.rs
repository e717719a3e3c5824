//! Services layer (ports + adapters).
//!
//! - `ports`: contracts and data types shared with the main side.
//! - `adapters`: transport, config and filesystem implementations.
//! - `workspace`: the facade the host loop talks to.

pub mod adapters;
pub mod bus;
pub mod ports;
pub mod workspace;

pub use bus::{host_bus, HostBusReceiver, HostBusSender, HostMessage};
pub use workspace::{PathOrUri, RemoteOperationBridge, WorkspaceService};
