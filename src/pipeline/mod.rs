pub mod adaptive_series;
pub mod fixed_modes;
pub mod mode_scores;
pub mod phase_distribution;

pub const ADAPTIVE_MODE: &str = "adaptive";
pub const FIXED_MODE_PREFIX: &str = "fixed_";
