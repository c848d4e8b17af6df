use crate::events::AppEvent;
use async_channel::Sender;
use tokio::runtime::Runtime;

/// Starts the stdin reader and the settings watcher. The returned runtime
/// also hosts the clipboard and sampler tasks and must outlive the session.
pub fn start_background_services(tx: Sender<AppEvent>) -> std::io::Result<Runtime> {
    let rt = Runtime::new()?;

    {
        let tx = tx.clone();
        rt.spawn(async move {
            crate::sys::input::run_reader(tx).await;
        });
    }

    {
        let tx = tx.clone();
        rt.spawn(async move {
            crate::settings::run_async_watcher(tx).await;
        });
    }

    Ok(rt)
}
