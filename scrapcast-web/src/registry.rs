//! Browser-side registry loading.

use crate::error::WebError;
use scrapcast_core::{ModelRegistry, RegistrySource, Simulator};
#[cfg(target_arch = "wasm32")]
use std::sync::Arc;

/// `localStorage` key of an optional registry override, as JSON.
pub const REGISTRY_STORAGE_KEY: &str = "scrapcast.registry";

/// Loads the registry override from `localStorage`, or the built-in tables
/// when none is stored.
pub struct WebRegistrySource;

impl RegistrySource for WebRegistrySource {
    type Error = WebError;

    fn load_registry(&self) -> Result<ModelRegistry, Self::Error> {
        let stored = crate::dom::local_storage()?
            .get_item(REGISTRY_STORAGE_KEY)
            .map_err(|e| WebError::Storage(crate::dom::js_error_message(&e)))?;
        match stored {
            Some(json) => Ok(ModelRegistry::from_json(&json)?),
            None => Ok(ModelRegistry::builtin()),
        }
    }
}

/// Build the initial simulator, falling back to the built-in registry when
/// the override cannot be used.
#[must_use]
pub fn initial_simulator() -> Simulator {
    #[cfg(target_arch = "wasm32")]
    {
        match WebRegistrySource
            .load_registry()
            .and_then(|registry| Ok(Simulator::new(Arc::new(registry))?))
        {
            Ok(sim) => return sim,
            Err(err) => log::warn!("using built-in registry: {err}"),
        }
    }
    Simulator::new(ModelRegistry::shared()).unwrap_or_default()
}
