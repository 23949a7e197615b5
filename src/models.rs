use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of tissue compartments in the ZHL-16 tables carried here (the
/// 16 classic compartments plus the 4-minute leading compartment).
pub const COMPARTMENT_COUNT: usize = 17;

/// Inert-gas partial pressures of a single tissue compartment (bar).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Compartment {
    pub p_n2: f64,
    pub p_he: f64,
}

/// Gas loading of all compartments, index-aligned with the coefficient
/// table. Replaced wholesale on every segment, never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompartmentState {
    pub compartments: [Compartment; COMPARTMENT_COUNT],
}

impl CompartmentState {
    pub fn uniform(p_n2: f64, p_he: f64) -> Self {
        CompartmentState {
            compartments: [Compartment { p_n2, p_he }; COMPARTMENT_COUNT],
        }
    }
}

/// Caller-owned state threaded through successive `ceiling_limit` calls.
///
/// The model reads and writes only `compartments`, `saturation`, and
/// `gradient_factor`; `extensions` belongs to the caller (or to a
/// substituted model that needs state of its own) and is passed through
/// untouched.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiveContext {
    pub compartments: Option<CompartmentState>,
    pub saturation: f64,
    pub gradient_factor: Option<f64>,
    pub extensions: HashMap<String, String>,
}

impl DiveContext {
    pub fn new() -> Self {
        DiveContext::default()
    }

    pub fn with_gradient_factor(gf: f64) -> Self {
        DiveContext {
            gradient_factor: Some(gf),
            ..DiveContext::default()
        }
    }
}
