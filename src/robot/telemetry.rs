use super::models::RobotState;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Per-read battery drift bounds (percentage points).
pub const BATTERY_DELTA: (f64, f64) = (-1.0, 0.5);
/// Per-read temperature drift bounds (degrees).
pub const TEMPERATURE_DELTA: (f64, f64) = (-0.2, 0.2);

/// Source of the random deltas applied on every telemetry read.
pub trait JitterSource: Send {
    /// Returns a value in `[low, high]`.
    fn sample(&mut self, low: f64, high: f64) -> f64;
}

/// Production jitter backed by a seedable `StdRng`.
#[derive(Debug)]
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }
}

impl JitterSource for RandomJitter {
    fn sample(&mut self, low: f64, high: f64) -> f64 {
        match Uniform::new_inclusive(low, high) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => 0.0,
        }
    }
}

/// Perturbs battery and temperature in place.
///
/// Battery is clamped to `[0, 100]`, temperature rounded to one decimal.
/// A delta outside the documented bounds is clamped back into them, and a
/// non-finite one counts as zero.
pub fn apply_jitter(state: &mut RobotState, source: &mut dyn JitterSource) {
    let battery_delta = bounded(source.sample(BATTERY_DELTA.0, BATTERY_DELTA.1), BATTERY_DELTA);
    let temperature_delta = bounded(
        source.sample(TEMPERATURE_DELTA.0, TEMPERATURE_DELTA.1),
        TEMPERATURE_DELTA,
    );

    state.battery = (state.battery + battery_delta).clamp(0.0, 100.0);
    state.sensors.temperature = round_tenth(state.sensors.temperature + temperature_delta);
}

fn bounded(delta: f64, (low, high): (f64, f64)) -> f64 {
    if delta.is_finite() {
        delta.clamp(low, high)
    } else {
        0.0
    }
}

pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
