//! Global config handle.
//!
//! Uses `arc-swap` so any thread can take a cheap snapshot of the config
//! resolved at startup.

use crate::config::PartsConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<PartsConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(PartsConfig::default()));

#[inline]
pub fn cfg() -> Arc<PartsConfig> {
    CONFIG.load_full()
}

/// Install the startup config and return a handle to it.
#[inline]
pub fn init_config(config: PartsConfig) -> Arc<PartsConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}
