use crate::types::TimeOfDay;

pub const FULL_CIRCLE: f64 = std::f64::consts::TAU;
pub const HOURS_PER_DAY: f64 = 24.0;

/// Midnight maps to 0 (north on the plot), noon to pi, increasing clockwise.
pub fn angle_of(t: TimeOfDay) -> f64 {
    (t.hour() as f64 + t.minute() as f64 / 60.0) / HOURS_PER_DAY * FULL_CIRCLE
}

/// Clockwise arc width from `from` to `to`, always in [0, 2pi).
/// The sole wraparound rule; never replace with a plain subtraction.
pub fn arc_width(from: f64, to: f64) -> f64 {
    (to - from).rem_euclid(FULL_CIRCLE)
}

pub fn hour_tick_angles() -> [f64; 24] {
    let mut ticks = [0.0; 24];
    for (hour, tick) in ticks.iter_mut().enumerate() {
        *tick = hour as f64 / HOURS_PER_DAY * FULL_CIRCLE;
    }
    ticks
}
