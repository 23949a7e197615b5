pub mod algorithm;
pub mod error;
pub mod models;
pub mod pressure;
pub mod zhl16;

pub use algorithm::DecoAlgorithm;
pub use error::DecoError;
pub use models::{Compartment, CompartmentState, DiveContext, COMPARTMENT_COUNT};
pub use pressure::{PressureConverter, FRESH_WATER_DENSITY, SALT_WATER_DENSITY};
pub use zhl16::tables::{zhl16_tissues, Coefficient, TissueCompartment, Zhl16Variant};
pub use zhl16::Zhl16;
