pub use tracing;

/// Log the error carried by the given result, if any, and hand the result back untouched.
#[macro_export]
macro_rules! log_if_error {
    ($e: expr) => {
        match $e {
            Ok(v) => Ok(v),
            Err(e) => {
                $crate::service::tracing::error!("{}", e);
                Err(e)
            },
        }
    };
}

/// Evaluate the expression and return it along with the time it took
/// Example
/// ```rust
/// use pending_common::measure_duration;
///
/// let (value, duration) = measure_duration!(1 + 1);
/// ```
#[macro_export]
macro_rules! measure_duration {
    ($e: expr) => {{
        let now = std::time::Instant::now();

        let result = $e;
        (result, now.elapsed())
    }};
}

/// Emit a debug event recording how long a remote call took.
#[macro_export]
macro_rules! record_duration {
    ($method: expr, $duration: expr) => {
        $crate::service::tracing::debug!(method = $method, duration_ms = $duration.as_millis() as u64, "rpc call completed")
    };
}
