//! Monotonic timing for the series evaluation
//!
//! Measurements must not move when the wall clock is adjusted, so every read
//! goes through a monotonic source:
//!
//! - Unix: `clock_gettime(CLOCK_MONOTONIC)` (nanoseconds since boot)
//! - elsewhere: `Instant` against a process-wide base

use std::time::Duration;

/// Get raw monotonic nanoseconds from the system clock.
#[inline]
#[cfg(unix)]
pub fn monotonic_nanos() -> u64 {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: ts is a valid pointer to a timespec struct
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
    // CLOCK_MONOTONIC is always supported on Unix
    debug_assert_eq!(rc, 0, "clock_gettime(CLOCK_MONOTONIC) failed");
    // tv_sec/tv_nsec types vary by platform
    #[allow(clippy::unnecessary_cast)]
    let secs = (ts.tv_sec as u64).saturating_mul(1_000_000_000);
    #[allow(clippy::unnecessary_cast)]
    secs.saturating_add(ts.tv_nsec as u64)
}

/// Fallback using Instant with a process-wide base time.
#[inline]
#[cfg(not(unix))]
pub fn monotonic_nanos() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static BASE: OnceLock<Instant> = OnceLock::new();
    let base = BASE.get_or_init(Instant::now);
    base.elapsed().as_nanos().try_into().unwrap_or(u64::MAX)
}

/// A started measurement. Read [`Stopwatch::elapsed`] once the work is done.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: u64,
}

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch {
            start: monotonic_nanos(),
        }
    }

    /// Time since [`Stopwatch::start`]; never negative
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(monotonic_nanos().saturating_sub(self.start))
    }
}

/// Run `f` and return its result together with the elapsed time.
///
/// Only the call itself is bracketed by the two clock reads.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let watch = Stopwatch::start();
    let value = f();
    let elapsed = watch.elapsed();
    (value, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_never_decreases() {
        let mut last = monotonic_nanos();
        for _ in 0..1_000 {
            let now = monotonic_nanos();
            assert!(now >= last, "clock went backwards: {} < {}", now, last);
            last = now;
        }
    }

    #[test]
    fn test_stopwatch_measures_sleep() {
        let watch = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = watch.elapsed();
        assert!(elapsed >= Duration::from_millis(10), "got {:?}", elapsed);
    }

    #[test]
    fn test_timed_returns_value() {
        let (value, elapsed) = timed(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed.as_secs_f64() >= 0.0);
    }
}
