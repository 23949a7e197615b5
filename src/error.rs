use thiserror::Error;

/// Error type for model construction and per-call input validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecoError {
    #[error("surface pressure must be a positive finite number of bar, got {0}")]
    InvalidSurfacePressure(f64),

    #[error("water density must be a positive finite number of kg/m3, got {0}")]
    InvalidWaterDensity(f64),

    #[error("expected {expected} tissue compartments, got {got}")]
    CompartmentCount { expected: usize, got: usize },

    #[error("compartment {index}: {gas} half-time {value} is not positive")]
    InvalidHalfTime {
        index: usize,
        gas: &'static str,
        value: f64,
    },

    #[error("compartment {index}: {gas} half-time {value} does not exceed the previous compartment's {prev}")]
    HalfTimeOrder {
        index: usize,
        gas: &'static str,
        value: f64,
        prev: f64,
    },

    #[error("{gas} fraction {value} is outside [0, 1]")]
    GasFractionOutOfRange { gas: &'static str, value: f64 },

    #[error("gradient factor {0} is outside (0, 1]")]
    GradientFactorOutOfRange(f64),

    #[error("depth {0} is not a non-negative finite number of meters")]
    InvalidDepth(f64),

    #[error("segment duration {0} is not a non-negative finite number of seconds")]
    InvalidDuration(f64),

    #[error("segment duration must be positive when depth changes, got {0}")]
    ZeroDurationDepthChange(f64),

    #[error("compartment state is missing from the context on a non-initial call")]
    MissingCompartmentState,

    #[error("compartment {index} carries an invalid gas loading (pN2 {p_n2}, pHe {p_he})")]
    InvalidCompartmentState { index: usize, p_n2: f64, p_he: f64 },
}
