//! Performance instrumentation for hot paths.
//!
//! Compiled in only with the `profiling` cargo feature; without it the
//! `profile_scope!` macro expands to nothing.

#[cfg(feature = "profiling")]
use std::time::Instant;

/// Times a scope from construction to drop and reports it through tracing.
#[cfg(feature = "profiling")]
pub struct ScopeTimer {
    name: &'static str,
    start: Instant,
}

#[cfg(feature = "profiling")]
impl ScopeTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

#[cfg(feature = "profiling")]
impl Drop for ScopeTimer {
    fn drop(&mut self) {
        tracing::trace!(
            target: "docmark::perf",
            scope = self.name,
            elapsed_us = self.start.elapsed().as_micros() as u64,
        );
    }
}

/// Time the enclosing scope when the `profiling` feature is enabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _scope = $crate::perf::ScopeTimer::new($name);
    };
}
