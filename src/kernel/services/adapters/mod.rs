//! Service adapters: OS/transport specific implementations.

pub mod app_dirs;
pub mod recording;
pub mod rpc;
pub mod settings;

pub use app_dirs::{ensure_log_dir, get_config_path, get_log_dir};
pub use recording::{RecordedCall, RecordingWorkspace};
pub use rpc::{RpcConnection, RpcWorkspaceProxy};
pub use settings::{ensure_host_config_file, load_host_config, load_host_config_from, SettingsError};
