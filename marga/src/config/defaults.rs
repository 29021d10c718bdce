//! Default value functions for serde deserialization.

pub fn resolution() -> f32 {
    0.05
}

pub fn grid_size() -> usize {
    200
}

pub fn enabled() -> bool {
    true
}

pub fn poll_interval_ms() -> u64 {
    100
}
