use crate::shared::errors::AppError;
use log::{debug, error, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup; `RUST_LOG` overrides the defaults.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("university_lib", log::LevelFilter::Debug)
            .filter_module("diesel", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_secs()
            .format_module_path(false)
            .try_init()
            .ok();

        info!("Logging system initialized");
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log a unit of work against the store
    pub fn db_operation(operation: &str, store: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => debug!("DB: {} on {} completed in {}ms", operation, store, duration),
            None => debug!("DB: Starting {} on {}", operation, store),
        }
    }

    /// Log an operation refused by an integrity rule
    pub fn rejected(operation: &str, err: &AppError) {
        if err.status() >= 500 {
            error!("{} failed: {}", operation, err);
        } else {
            warn!("{} rejected [{}]: {}", operation, err.code(), err);
        }
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    /// Finish timing; only operations slower than `threshold_ms` are reported.
    pub fn finish_over(self, threshold_ms: u64, store: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        if duration > threshold_ms {
            LogContext::performance_metric(&self.operation, duration, Some(store));
        } else {
            LogContext::db_operation(&self.operation, store, Some(duration));
        }
        duration
    }
}
