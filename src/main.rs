use std::sync::Arc;

use zhost::kernel::services::adapters::{
    ensure_host_config_file, load_host_config, RpcConnection,
};
use zhost::kernel::services::ports::HostConfig;
use zhost::kernel::services::{HostBusReceiver, HostMessage};
use zhost::kernel::WorkspaceService;

mod logging;

fn main() -> std::io::Result<()> {
    let loaded = load_host_config();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => HostConfig::default(),
    };

    let _logging = logging::init(&config);
    match loaded {
        Ok(Some(_)) => {}
        Ok(None) => match ensure_host_config_file() {
            Ok(path) => tracing::info!(path = %path.display(), "wrote default host config"),
            Err(e) => tracing::warn!(error = %e, "write default host config failed"),
        },
        Err(e) => tracing::warn!(error = %e, "load host config failed, using defaults"),
    }

    let (proxy, bus) = RpcConnection::start(std::io::stdin(), std::io::stdout(), &config)?;
    let mut service = WorkspaceService::new(Arc::new(proxy), None);

    run(&mut service, &bus);

    tracing::info!("host stopped");
    Ok(())
}

fn run(service: &mut WorkspaceService, bus: &HostBusReceiver) {
    while let Some(msg) = bus.recv() {
        match msg {
            HostMessage::AcceptWorkspaceData(data) => {
                let event = service.accept_workspace_data(data);
                for folder in event.added() {
                    tracing::info!(uri = %folder.uri, index = folder.index, "folder added");
                }
                for folder in event.removed() {
                    tracing::info!(uri = %folder.uri, index = folder.index, "folder removed");
                }
            }
            HostMessage::Exit => {
                tracing::info!("exit requested");
                break;
            }
            HostMessage::Disconnected => {
                tracing::warn!("main side disconnected");
                break;
            }
        }
    }
}
