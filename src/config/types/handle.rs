//! Global config with lock-free read access.
//!
//! Uses `arc-swap` so every consumer reads the same immutable snapshot
//! without locking. The config is published exactly once at startup via
//! [`init_config`]; the model is never mutated afterwards.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Get the current global config snapshot.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Publish the validated config process-wide and return a handle to it.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}
