//! Configuration shared by URL operations.
//!
//! Every operation has a variant taking an explicit [`Config`] (or
//! [`Options`]). The shorter variants read a snapshot of the process-wide
//! configuration at the moment they are called, so updating the global
//! configuration affects subsequent calls on already parsed URLs as well.
//!
//! Concurrent updates of the global configuration race: the last writer wins,
//! and operations already running keep the snapshot they started with. Code
//! that needs isolation should pass its own `Config` explicitly.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::options::Options;
use crate::services::Services;

/// Options and scheme default ports.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Encoding and query options.
    pub options: Options,
    /// Default ports of schemes.
    pub services: Services,
}

impl Config {
    /// Creates a new configuration.
    #[inline]
    #[must_use]
    pub fn new(options: Options, services: Services) -> Self {
        Self { options, services }
    }

    /// Returns a snapshot of the process-wide configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use net_url::Config;
    ///
    /// let config = Config::global();
    /// assert_eq!(config.services.default_port("http"), Some(80));
    /// ```
    #[must_use]
    pub fn global() -> Arc<Config> {
        let guard = global_cell()
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replaces the process-wide configuration.
    pub fn set_global(config: Config) {
        let mut guard = global_cell()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(config);
        tracing::debug!("global URL configuration replaced");
    }

    /// Modifies the process-wide configuration in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use net_url::Config;
    ///
    /// Config::update_global(|config| {
    ///     config.options.set_query_plus_is_space(true);
    /// });
    /// assert!(Config::global().options.query_plus_is_space());
    /// ```
    pub fn update_global<F>(f: F)
    where
        F: FnOnce(&mut Config),
    {
        let mut guard = global_cell()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut config = Config::clone(&guard);
        f(&mut config);
        *guard = Arc::new(config);
        tracing::debug!("global URL configuration updated");
    }
}

/// Returns the cell holding the process-wide configuration.
fn global_cell() -> &'static RwLock<Arc<Config>> {
    /// Process-wide configuration.
    static GLOBAL: OnceLock<RwLock<Arc<Config>>> = OnceLock::new();
    GLOBAL.get_or_init(|| RwLock::new(Arc::new(Config::default())))
}
