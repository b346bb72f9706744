//! Clock and random-source seam
//!
//! The resolver reads the current time and draws random samples. Both come from
//! an [`Environment`] so the core stays deterministic under test.

use chrono::{DateTime, TimeZone, Utc};

/// Source of the current instant and of uniform random samples
pub trait Environment {
    /// Current wall-clock instant
    fn now(&self) -> DateTime<Utc>;

    /// Uniform sample in `[0, 1)`
    fn random(&self) -> f64;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn random(&self) -> f64 {
        (**self).random()
    }
}

/// Environment that always returns the same instant and sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedEnvironment {
    pub now: DateTime<Utc>,
    pub random: f64,
}

impl FixedEnvironment {
    pub fn new(now: DateTime<Utc>, random: f64) -> Self {
        Self { now, random }
    }
}

impl Default for FixedEnvironment {
    /// Unix epoch and a sample of `0.0`
    fn default() -> Self {
        Self {
            now: Utc.timestamp_opt(0, 0).single().unwrap_or_default(),
            random: 0.0,
        }
    }
}

impl Environment for FixedEnvironment {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn random(&self) -> f64 {
        self.random
    }
}

/// Clamp a sample into `[0, 1)`, mapping NaN to 0
fn unit(sample: f64) -> f64 {
    if sample.is_nan() {
        0.0
    } else {
        sample.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Simulated load time in milliseconds, in `[50, 150)`
pub fn load_time_ms(sample: f64) -> f64 {
    unit(sample) * 100.0 + 50.0
}

/// Simulated post count for a synthesized user, in `[1, 20]`
pub fn post_count(sample: f64) -> u32 {
    (unit(sample) * 20.0).floor() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_time_bounds() {
        assert_eq!(load_time_ms(0.0), 50.0);
        assert!(load_time_ms(0.999_999) < 150.0);
        assert!(load_time_ms(1.0) < 150.0);
        assert_eq!(load_time_ms(-3.0), 50.0);
        assert_eq!(load_time_ms(f64::NAN), 50.0);
    }

    #[test]
    fn test_post_count_bounds() {
        assert_eq!(post_count(0.0), 1);
        assert_eq!(post_count(0.5), 11);
        assert_eq!(post_count(0.999_999), 20);
        assert_eq!(post_count(1.0), 20);
        assert_eq!(post_count(7.0), 20);
    }

    #[test]
    fn test_fixed_environment() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 3, 4, 5).unwrap();
        let env = FixedEnvironment::new(now, 0.25);
        assert_eq!(env.now(), now);
        assert_eq!(env.random(), 0.25);
        assert_eq!((&env).random(), 0.25);
    }

    #[test]
    fn test_default_environment_is_epoch() {
        let env = FixedEnvironment::default();
        assert_eq!(env.now().timestamp(), 0);
        assert_eq!(env.random(), 0.0);
    }
}
