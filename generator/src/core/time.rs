//! Time source for seeding
//!
//! Generators constructed without an explicit seed derive one from a
//! nanosecond clock plus a process-wide counter. The counter lives in a
//! [`TimeSeeder`] that is created once and passed by reference to every
//! time-seeding call, so two time seeds never collide within the lifetime
//! of that seeder (short of 2^64 invocations).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Source of non-decreasing nanosecond timestamps
pub trait SeedClock {
    /// Current timestamp in nanoseconds
    fn now_nanos(&self) -> u64;
}

/// Monotonic nanosecond clock
///
/// Anchored at the wall-clock time of construction and advanced by
/// [`Instant`], so readings never go backwards even if the system clock does.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    /// Wall-clock nanoseconds at construction
    base: u64,
    /// Monotonic reference point
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        // A clock set before 1970 only loses the wall-clock offset
        let base = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self {
            base,
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedClock for MonotonicClock {
    fn now_nanos(&self) -> u64 {
        self.base.wrapping_add(self.origin.elapsed().as_nanos() as u64)
    }
}

/// Derives unique time-based seeds
///
/// # Example
/// ```
/// use xorshift_generator::{BitsStreamGenerator64, TimeSeeder, XorShift1024Star};
///
/// let seeder = TimeSeeder::new();
/// let rng_a = XorShift1024Star::from_time(&seeder);
/// let rng_b = XorShift1024Star::from_time(&seeder);
/// assert_ne!(rng_a.state(), rng_b.state());
/// ```
#[derive(Debug)]
pub struct TimeSeeder<C = MonotonicClock> {
    clock: C,
    /// Added to every timestamp; strictly increasing
    uniquifier: AtomicU64,
}

impl TimeSeeder<MonotonicClock> {
    /// Create a seeder backed by the monotonic system clock
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for TimeSeeder<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SeedClock> TimeSeeder<C> {
    /// Create a seeder backed by a custom clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            uniquifier: AtomicU64::new(0),
        }
    }

    /// Produce the next time-based seed
    ///
    /// Safe to call from several threads through a shared reference; the
    /// counter is advanced with a single atomic increment.
    pub fn next_seed(&self) -> i64 {
        let unique = self.uniquifier.fetch_add(1, Ordering::Relaxed);
        self.clock.now_nanos().wrapping_add(unique) as i64
    }

    /// Number of seeds issued so far
    pub fn issued(&self) -> u64 {
        self.uniquifier.load(Ordering::Relaxed)
    }
}
