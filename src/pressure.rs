//! Depth/pressure conversion parameterized by water density.
//!
//! Hydrostatic pressure is linear in depth: `p = ρ · g · h`, with the
//! result scaled from pascal to bar. Fresh- and salt-water constructors
//! cover the usual cases; any positive density is accepted.

use crate::error::DecoError;

/// Standard gravity (m/s²).
const GRAVITY_ACCELERATION: f64 = 9.81;

/// Pascal per bar.
const PA_TO_BAR: f64 = 100_000.0;

/// Fresh water density (kg/m³).
pub const FRESH_WATER_DENSITY: f64 = 1000.0;

/// Sea water density (kg/m³), the common dive-computer convention.
pub const SALT_WATER_DENSITY: f64 = 1030.0;

/// Converts between depth (m) and hydrostatic pressure (bar) for a fixed
/// water density chosen at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressureConverter {
    water_coefficient: f64,
}

impl PressureConverter {
    /// Build a converter for the given water density (kg/m³).
    pub fn new(water_density: f64) -> Result<Self, DecoError> {
        if !water_density.is_finite() || water_density <= 0.0 {
            return Err(DecoError::InvalidWaterDensity(water_density));
        }
        Ok(PressureConverter {
            water_coefficient: water_density * GRAVITY_ACCELERATION / PA_TO_BAR,
        })
    }

    pub fn fresh_water() -> Self {
        PressureConverter {
            water_coefficient: FRESH_WATER_DENSITY * GRAVITY_ACCELERATION / PA_TO_BAR,
        }
    }

    pub fn salt_water() -> Self {
        PressureConverter {
            water_coefficient: SALT_WATER_DENSITY * GRAVITY_ACCELERATION / PA_TO_BAR,
        }
    }

    /// Hydrostatic pressure (bar) of a water column of the given depth (m).
    pub fn depth_to_pressure(&self, depth: f64) -> f64 {
        depth * self.water_coefficient
    }

    /// Depth (m) of a water column exerting the given pressure (bar).
    pub fn pressure_to_depth(&self, pressure: f64) -> f64 {
        pressure / self.water_coefficient
    }
}
