use scrapcast_core::RegistryError;

/// Failures of browser-side plumbing around the simulator.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}
