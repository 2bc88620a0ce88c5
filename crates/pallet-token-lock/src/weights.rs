//! The weights.

use frame_support::dispatch::Weight;

/// The weight information trait, to be implemented in from the benches.
pub trait WeightInfo {
    /// Weight for `lock_tokens` call.
    fn lock_tokens() -> Weight;

    /// Weight for `release_tokens` call.
    fn release_tokens() -> Weight;

    /// Weight for `early_release` call.
    fn early_release() -> Weight;
}

impl WeightInfo for () {
    fn lock_tokens() -> Weight {
        Weight::zero()
    }

    fn release_tokens() -> Weight {
        Weight::zero()
    }

    fn early_release() -> Weight {
        Weight::zero()
    }
}
