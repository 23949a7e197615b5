use crate::error::DecoError;
use crate::models::DiveContext;

/// Capability contract for a decompression model.
///
/// A model is driven with one call per profile segment. `prev_depth` is
/// `None` only on the first call, which seeds the model's state in the
/// returned context; every later call must receive the context returned by
/// the previous one. The result is the ceiling depth (m) together with the
/// replacement context.
///
/// Implementations must leave every context field they do not own
/// untouched, so callers can swap models without changing call sites.
pub trait DecoAlgorithm {
    fn ceiling_limit(
        &self,
        prev_depth: Option<f64>,
        next_depth: f64,
        time: f64,
        n2_fraction: f64,
        he_fraction: f64,
        context: DiveContext,
    ) -> Result<(f64, DiveContext), DecoError>;
}
