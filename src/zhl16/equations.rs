//! Stateless inert-gas exchange math.
//!
//! Free functions over primitive values: the engine owns no per-call state
//! beyond the coefficient table and surface pressure captured at
//! construction. Half-times are in minutes and segment durations in
//! seconds; the Haldane and Schreiner forms scale the duration by 1/60
//! against the minute-based decay constant. The reference vectors depend on
//! this exact scaling, so it must not be "corrected".

/// Water vapour pressure in the lungs (bar), at 37°C.
pub const WATER_VAPOR_PRESSURE: f64 = 0.0627;

/// Fraction of N2 in air.
pub const AIR_N2_FRACTION: f64 = 0.7902;

/// Decay constant `k = ln 2 / T` for a half-time `T` in minutes.
pub fn gas_decay(half_time: f64) -> f64 {
    std::f64::consts::LN_2 / half_time
}

/// Inspired partial pressure of a breathed gas at absolute pressure
/// `p_abs` (bar), net of alveolar water vapour.
pub fn pressure_inspired(f_gas: f64, p_abs: f64) -> f64 {
    f_gas * (p_abs - WATER_VAPOR_PRESSURE)
}

/// Rate of change of the inspired partial pressure (bar/min) for a gas
/// fraction under the given ambient pressure-change rate.
pub fn gas_rate(f_gas: f64, pressure_rate: f64) -> f64 {
    f_gas * pressure_rate
}

/// Haldane equation: compartment pressure after a constant-depth exposure.
///
/// `P' = Pi + (pAlv − Pi)·(1 − e^(−k·t/60))`
pub fn haldane(p_gas: f64, p_alv: f64, decay: f64, time: f64) -> f64 {
    p_gas + (p_alv - p_gas) * (1.0 - (-decay * time / 60.0).exp())
}

/// Schreiner equation: compartment pressure across a linear
/// pressure-change segment.
///
/// `P' = pAlv + R·(t/60 − 1/k) − (pAlv − Pi − R/k)·e^(−k·t/60)`
pub fn schreiner(p_alv: f64, rate: f64, time: f64, decay: f64, p_gas: f64) -> f64 {
    p_alv + rate * (time / 60.0 - 1.0 / decay)
        - (p_alv - p_gas - rate / decay) * (-decay * time / 60.0).exp()
}

/// Coefficient blended across both inert gases, weighted by their partial
/// pressures. Requires `p_n2 + p_he > 0`.
pub fn blended_coefficient(coeff_n2: f64, p_n2: f64, coeff_he: f64, p_he: f64) -> f64 {
    (coeff_n2 * p_n2 + coeff_he * p_he) / (p_n2 + p_he)
}

/// Tolerated ambient pressure for a compartment at combined loading
/// `p_comp` with blended coefficients `a` and `b`.
pub fn limit(p_comp: f64, a: f64, b: f64) -> f64 {
    (p_comp - a) * b
}

/// Gradient-factor-tightened tolerated ambient pressure. Degenerates to
/// `limit` at `gf = 1`.
pub fn gf_limit(p_comp: f64, a: f64, b: f64, gf: f64) -> f64 {
    (p_comp - a * gf) / (gf / b + 1.0 - gf)
}
