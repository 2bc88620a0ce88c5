//! Traits we use and expose.

use frame_support::dispatch::DispatchResult;

/// The interface to the fungible asset ledger the locked funds live at.
///
/// The token lock never computes balances on its own: all of the fund movement, along with the
/// overflow and underflow checks, is delegated to the implementation of this trait.
pub trait AssetLedger<AccountId> {
    /// The identifier of the asset.
    type AssetId;
    /// The balance of the asset.
    type Balance;

    /// Returns the amount of `asset` owned by `who`.
    fn balance_of(asset: &Self::AssetId, who: &AccountId) -> Self::Balance;

    /// Allow `spender` to move up to `amount` of `asset` on behalf of `owner`.
    ///
    /// This is a caller-side operation, the token lock itself never grants allowances.
    fn approve(
        asset: &Self::AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Self::Balance,
    ) -> DispatchResult;

    /// Move `amount` of `asset` from `owner` to `to` using the allowance `owner` has granted to
    /// `spender`.
    ///
    /// The allowance check, the allowance decrement and the transfer must happen atomically.
    fn transfer_from(
        asset: &Self::AssetId,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        amount: Self::Balance,
    ) -> DispatchResult;

    /// Move `amount` of `asset` from `from` to `to`.
    fn transfer(
        asset: &Self::AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Self::Balance,
    ) -> DispatchResult;
}
