//! Static ZHL-16 compartment data (Bühlmann).
//!
//! Seventeen entries per table: the 16 classic compartments plus the
//! 4-minute leading compartment. The A/B/C variants differ only in the
//! nitrogen `a` coefficients; the nitrogen `b` set and all helium values
//! are shared.

use crate::models::COMPARTMENT_COUNT;

/// N2 half-times in minutes.
const N2_HALF_TIME: [f64; COMPARTMENT_COUNT] = [
    4.0, 5.0, 8.0, 12.5, 18.5, 27.0, 38.3, 54.3, 77.0, 109.0, 146.0, 187.0, 239.0, 305.0, 390.0,
    498.0, 635.0,
];

/// He half-times in minutes.
const HE_HALF_TIME: [f64; COMPARTMENT_COUNT] = [
    1.51, 1.88, 3.02, 4.72, 6.99, 10.21, 14.48, 20.53, 29.11, 41.20, 55.19, 70.69, 90.34, 115.29,
    147.42, 188.24, 240.03,
];

/// N2 'a' coefficients (bar), variant A.
const N2_A_A: [f64; COMPARTMENT_COUNT] = [
    1.2599, 1.1696, 1.0000, 0.8618, 0.7562, 0.6667, 0.5933, 0.5282, 0.4701, 0.4187, 0.3798,
    0.3497, 0.3223, 0.2971, 0.2737, 0.2523, 0.2327,
];

/// N2 'a' coefficients (bar), variant B.
const N2_A_B: [f64; COMPARTMENT_COUNT] = [
    1.2599, 1.1696, 1.0000, 0.8618, 0.7562, 0.6667, 0.5600, 0.4947, 0.4500, 0.4187, 0.3798,
    0.3497, 0.3223, 0.2850, 0.2737, 0.2523, 0.2327,
];

/// N2 'a' coefficients (bar), variant C.
const N2_A_C: [f64; COMPARTMENT_COUNT] = [
    1.2599, 1.1696, 1.0000, 0.8618, 0.7562, 0.6200, 0.5043, 0.4410, 0.4000, 0.3750, 0.3500,
    0.3295, 0.3065, 0.2835, 0.2610, 0.2480, 0.2327,
];

/// N2 'b' coefficients (dimensionless), shared by all variants.
const N2_B: [f64; COMPARTMENT_COUNT] = [
    0.5050, 0.5578, 0.6514, 0.7222, 0.7825, 0.8126, 0.8434, 0.8693, 0.8910, 0.9092, 0.9222,
    0.9319, 0.9403, 0.9477, 0.9544, 0.9602, 0.9653,
];

/// He 'a' coefficients (bar).
const HE_A: [f64; COMPARTMENT_COUNT] = [
    1.7424, 1.6189, 1.3830, 1.1919, 1.0458, 0.9220, 0.8205, 0.7305, 0.6502, 0.5950, 0.5545,
    0.5333, 0.5189, 0.5181, 0.5176, 0.5172, 0.5119,
];

/// He 'b' coefficients (dimensionless).
const HE_B: [f64; COMPARTMENT_COUNT] = [
    0.4245, 0.4770, 0.5747, 0.6527, 0.7223, 0.7582, 0.7957, 0.8279, 0.8553, 0.8757, 0.8903,
    0.8997, 0.9073, 0.9122, 0.9171, 0.9217, 0.9267,
];

/// Tolerance-line coefficient pair for one gas in one compartment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficient {
    pub a: f64,
    pub b: f64,
}

/// Static per-compartment data: half-times and coefficient pairs for both
/// inert gases. Built once, never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TissueCompartment {
    pub n2_half_time: f64,
    pub he_half_time: f64,
    pub n2_coefficient: Coefficient,
    pub he_coefficient: Coefficient,
}

/// ZHL-16 coefficient-set variant. The variants differ in how conservative
/// the nitrogen `a` values are for the middle compartments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zhl16Variant {
    A,
    B,
    C,
}

/// Build the full compartment table for a variant.
pub fn zhl16_tissues(variant: Zhl16Variant) -> Vec<TissueCompartment> {
    let n2_a = match variant {
        Zhl16Variant::A => &N2_A_A,
        Zhl16Variant::B => &N2_A_B,
        Zhl16Variant::C => &N2_A_C,
    };

    (0..COMPARTMENT_COUNT)
        .map(|i| TissueCompartment {
            n2_half_time: N2_HALF_TIME[i],
            he_half_time: HE_HALF_TIME[i],
            n2_coefficient: Coefficient {
                a: n2_a[i],
                b: N2_B[i],
            },
            he_coefficient: Coefficient {
                a: HE_A[i],
                b: HE_B[i],
            },
        })
        .collect()
}
