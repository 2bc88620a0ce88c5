//! The weights.

use frame_support::dispatch::Weight;

/// The weight information trait, to be implemented in from the benches.
pub trait WeightInfo {
    /// Weight for `create` call.
    fn create() -> Weight;

    /// Weight for `transfer` call.
    fn transfer() -> Weight;

    /// Weight for `approve` call.
    fn approve() -> Weight;

    /// Weight for `transfer_from` call.
    fn transfer_from() -> Weight;
}

impl WeightInfo for () {
    fn create() -> Weight {
        Weight::zero()
    }

    fn transfer() -> Weight {
        Weight::zero()
    }

    fn approve() -> Weight {
        Weight::zero()
    }

    fn transfer_from() -> Weight {
        Weight::zero()
    }
}
