use sql_bench_core::prelude::ShutdownHandle;
use tokio::signal;

/// Raise the shutdown signal when the process receives Ctrl-C.
pub(crate) fn start_shutdown_listener(runtime: &tokio::runtime::Runtime) -> ShutdownHandle {
    let handle = ShutdownHandle::default();

    let listener_handle = handle.clone();
    runtime.spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                listener_handle.shutdown();
                log::warn!("Received shutdown signal, stopping after the current scenario");
            }
            Err(e) => log::error!("Failed to listen for Ctrl-C: {e}"),
        }
    });

    handle
}
