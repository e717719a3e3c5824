//! zhost - workspace host for a split editor process.
//!
//! The host keeps a read-only projection of the workspace pushed by the main
//! side and forwards workspace operations back to it.
//!
//! - kernel::workspace: snapshots, folder deltas, edit translation
//! - kernel::services: ports (contracts), adapters (rpc, config, dirs), facade

pub mod kernel;
