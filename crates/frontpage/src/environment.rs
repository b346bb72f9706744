use chrono::{DateTime, Utc};
use frontpage_core::environment::Environment;
use rand::Rng;

/// Real wall clock and thread-local randomness
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn random(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}
