//! # Structured Logging Module
//!
//! One-shot tracing initialization for host applications embedding the SDK.
//! Dispatch paths emit structured events; hosts that already install their
//! own subscriber are left untouched.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with an environment-driven filter
///
/// Safe to call more than once; only the first call installs a subscriber,
/// and an existing global subscriber is never replaced.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("beacon_core=info"));

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true));

        // Use try_init to avoid panicking if the host already set a subscriber
        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }
    });
}
