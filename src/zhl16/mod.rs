//! Bühlmann ZHL-16 decompression-ceiling model.
//!
//! Implements a 17-compartment tissue simulation driven one profile
//! segment at a time. Each call advances every compartment's inert-gas
//! loading (Schreiner for depth changes, Haldane for constant depth),
//! blends the tolerance coefficients of both gases per compartment, and
//! derives the ceiling from the controlling (most demanding) compartment,
//! optionally tightened by a gradient factor.

pub mod equations;
pub mod tables;

use crate::algorithm::DecoAlgorithm;
use crate::error::DecoError;
use crate::models::{CompartmentState, DiveContext, COMPARTMENT_COUNT};
use crate::pressure::PressureConverter;

use equations::{
    blended_coefficient, gas_decay, gas_rate, gf_limit, haldane, limit, pressure_inspired,
    schreiner, AIR_N2_FRACTION,
};
use tables::{zhl16_tissues, TissueCompartment, Zhl16Variant};

// ============================================================================
// Engine
// ============================================================================

/// ZHL-16 engine: the immutable coefficient table, the ambient surface
/// pressure, and the depth/pressure converter, all fixed at construction.
///
/// The engine itself is stateless across calls; all tissue state lives in
/// the [`DiveContext`] threaded through [`DecoAlgorithm::ceiling_limit`].
#[derive(Clone, Debug)]
pub struct Zhl16 {
    tissues: [TissueCompartment; COMPARTMENT_COUNT],
    surface_pressure: f64,
    converter: PressureConverter,
}

impl Zhl16 {
    /// Build an engine from an explicit compartment table.
    ///
    /// Validates once what every later call relies on: a positive finite
    /// surface pressure, exactly [`COMPARTMENT_COUNT`] entries, and
    /// strictly increasing positive half-times for both gases.
    pub fn new(
        tissues: Vec<TissueCompartment>,
        surface_pressure: f64,
        converter: PressureConverter,
    ) -> Result<Self, DecoError> {
        if !surface_pressure.is_finite() || surface_pressure <= 0.0 {
            return Err(DecoError::InvalidSurfacePressure(surface_pressure));
        }

        let tissues: [TissueCompartment; COMPARTMENT_COUNT] = match tissues.try_into() {
            Ok(tissues) => tissues,
            Err(rest) => {
                return Err(DecoError::CompartmentCount {
                    expected: COMPARTMENT_COUNT,
                    got: rest.len(),
                })
            }
        };

        for (index, tissue) in tissues.iter().enumerate() {
            check_half_time(index, "nitrogen", tissue.n2_half_time)?;
            check_half_time(index, "helium", tissue.he_half_time)?;
            if index > 0 {
                check_half_time_order(
                    index,
                    "nitrogen",
                    tissue.n2_half_time,
                    tissues[index - 1].n2_half_time,
                )?;
                check_half_time_order(
                    index,
                    "helium",
                    tissue.he_half_time,
                    tissues[index - 1].he_half_time,
                )?;
            }
        }

        Ok(Zhl16 {
            tissues,
            surface_pressure,
            converter,
        })
    }

    /// Build an engine for one of the published coefficient sets.
    pub fn with_variant(
        variant: Zhl16Variant,
        surface_pressure: f64,
        converter: PressureConverter,
    ) -> Result<Self, DecoError> {
        Zhl16::new(zhl16_tissues(variant), surface_pressure, converter)
    }

    /// Compartment state of a diver equilibrated at the surface breathing
    /// air: nitrogen at the inspired surface pressure, no helium.
    pub fn surface_equilibrium(&self) -> CompartmentState {
        CompartmentState::uniform(
            pressure_inspired(AIR_N2_FRACTION, self.surface_pressure),
            0.0,
        )
    }

    /// Index of the controlling compartment and its tolerated ambient
    /// pressure (bar), the maximum across all compartments.
    pub fn controlling_compartment(
        &self,
        state: &CompartmentState,
        gradient_factor: Option<f64>,
    ) -> (usize, f64) {
        let mut leading = 0;
        let mut saturation = f64::NEG_INFINITY;
        for (index, (compartment, tissue)) in
            state.compartments.iter().zip(&self.tissues).enumerate()
        {
            let p_comp = compartment.p_n2 + compartment.p_he;
            let a = blended_coefficient(
                tissue.n2_coefficient.a,
                compartment.p_n2,
                tissue.he_coefficient.a,
                compartment.p_he,
            );
            let b = blended_coefficient(
                tissue.n2_coefficient.b,
                compartment.p_n2,
                tissue.he_coefficient.b,
                compartment.p_he,
            );
            let tolerated = match gradient_factor {
                Some(gf) => gf_limit(p_comp, a, b, gf),
                None => limit(p_comp, a, b),
            };
            if tolerated > saturation {
                saturation = tolerated;
                leading = index;
            }
        }
        (leading, saturation)
    }

    /// Advance every compartment across one segment. The gases load
    /// independently, each from its own fraction and half-time.
    fn load_segment(
        &self,
        state: &CompartmentState,
        prev_depth: f64,
        next_depth: f64,
        time: f64,
        n2_fraction: f64,
        he_fraction: f64,
    ) -> CompartmentState {
        let mut next = *state;
        for (compartment, tissue) in next.compartments.iter_mut().zip(&self.tissues) {
            compartment.p_n2 = self.gas_load(
                compartment.p_n2,
                n2_fraction,
                tissue.n2_half_time,
                prev_depth,
                next_depth,
                time,
            );
            compartment.p_he = self.gas_load(
                compartment.p_he,
                he_fraction,
                tissue.he_half_time,
                prev_depth,
                next_depth,
                time,
            );
        }
        next
    }

    /// New loading of one gas in one compartment after a segment.
    ///
    /// The inspired pressure is evaluated at the segment's start depth; an
    /// unbreathed gas (fraction 0) inspires nothing and only washes out.
    fn gas_load(
        &self,
        p_gas: f64,
        f_gas: f64,
        half_time: f64,
        prev_depth: f64,
        next_depth: f64,
        time: f64,
    ) -> f64 {
        let p_alv = if f_gas == 0.0 {
            0.0
        } else {
            pressure_inspired(
                f_gas,
                self.converter.depth_to_pressure(prev_depth) + self.surface_pressure,
            )
        };
        let decay = gas_decay(half_time);

        if next_depth == prev_depth {
            return haldane(p_gas, p_alv, decay, time);
        }
        let rate = gas_rate(
            f_gas,
            self.converter.depth_to_pressure(next_depth - prev_depth) / (time / 60.0),
        );
        schreiner(p_alv, rate, time, decay, p_gas)
    }
}

impl DecoAlgorithm for Zhl16 {
    /// Advance the model across one segment and derive the new ceiling.
    ///
    /// `prev_depth` of `None` seeds the context with surface-equilibrium
    /// compartments and a zero ceiling; any later call updates the loading
    /// and returns `max(0, depth(saturation − surface_pressure))`. The
    /// context comes back with its three reserved fields replaced and
    /// everything else untouched.
    fn ceiling_limit(
        &self,
        prev_depth: Option<f64>,
        next_depth: f64,
        time: f64,
        n2_fraction: f64,
        he_fraction: f64,
        mut context: DiveContext,
    ) -> Result<(f64, DiveContext), DecoError> {
        check_fraction("nitrogen", n2_fraction)?;
        check_fraction("helium", he_fraction)?;
        check_depth(next_depth)?;
        if let Some(gf) = context.gradient_factor {
            if !gf.is_finite() || gf <= 0.0 || gf > 1.0 {
                return Err(DecoError::GradientFactorOutOfRange(gf));
            }
        }

        let Some(prev_depth) = prev_depth else {
            context.compartments = Some(self.surface_equilibrium());
            context.saturation = 0.0;
            return Ok((0.0, context));
        };

        check_depth(prev_depth)?;
        if !time.is_finite() || time < 0.0 {
            return Err(DecoError::InvalidDuration(time));
        }
        if next_depth != prev_depth && time == 0.0 {
            return Err(DecoError::ZeroDurationDepthChange(time));
        }

        let state = context
            .compartments
            .take()
            .ok_or(DecoError::MissingCompartmentState)?;
        check_state(&state)?;

        let next_state =
            self.load_segment(&state, prev_depth, next_depth, time, n2_fraction, he_fraction);
        let (_, saturation) = self.controlling_compartment(&next_state, context.gradient_factor);
        let ceiling = self
            .converter
            .pressure_to_depth(saturation - self.surface_pressure)
            .max(0.0);

        context.compartments = Some(next_state);
        context.saturation = saturation;
        Ok((ceiling, context))
    }
}

// ============================================================================
// Boundary validation
// ============================================================================

fn check_fraction(gas: &'static str, value: f64) -> Result<(), DecoError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(DecoError::GasFractionOutOfRange { gas, value });
    }
    Ok(())
}

fn check_depth(value: f64) -> Result<(), DecoError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DecoError::InvalidDepth(value));
    }
    Ok(())
}

fn check_half_time(index: usize, gas: &'static str, value: f64) -> Result<(), DecoError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DecoError::InvalidHalfTime { index, gas, value });
    }
    Ok(())
}

fn check_half_time_order(
    index: usize,
    gas: &'static str,
    value: f64,
    prev: f64,
) -> Result<(), DecoError> {
    if value <= prev {
        return Err(DecoError::HalfTimeOrder {
            index,
            gas,
            value,
            prev,
        });
    }
    Ok(())
}

/// The blended coefficients divide by each compartment's combined
/// pressure, so every entry must carry some finite, non-negative loading.
fn check_state(state: &CompartmentState) -> Result<(), DecoError> {
    for (index, compartment) in state.compartments.iter().enumerate() {
        let ok = compartment.p_n2.is_finite()
            && compartment.p_he.is_finite()
            && compartment.p_n2 >= 0.0
            && compartment.p_he >= 0.0
            && compartment.p_n2 + compartment.p_he > 0.0;
        if !ok {
            return Err(DecoError::InvalidCompartmentState {
                index,
                p_n2: compartment.p_n2,
                p_he: compartment.p_he,
            });
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
