//! The [`pallet_erc20_assets`] backed asset ledger for the token lock.

#![cfg_attr(not(feature = "std"), no_std)]

use core::marker::PhantomData;

use frame_support::dispatch::DispatchResult;
use pallet_token_lock::traits::AssetLedger;

#[cfg(test)]
mod mock;

/// The adapter connects the ERC20 assets pallet to the token lock.
pub struct Erc20AssetsLedger<T>(PhantomData<T>);

impl<T: pallet_erc20_assets::Config> AssetLedger<T::AccountId> for Erc20AssetsLedger<T> {
    type AssetId = T::AssetId;
    type Balance = T::Balance;

    fn balance_of(asset: &Self::AssetId, who: &T::AccountId) -> Self::Balance {
        pallet_erc20_assets::Pallet::<T>::balance_of(asset, who)
    }

    fn approve(
        asset: &Self::AssetId,
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: Self::Balance,
    ) -> DispatchResult {
        pallet_erc20_assets::Pallet::<T>::do_approve(
            asset.clone(),
            owner.clone(),
            spender.clone(),
            amount,
        )
    }

    fn transfer_from(
        asset: &Self::AssetId,
        spender: &T::AccountId,
        owner: &T::AccountId,
        to: &T::AccountId,
        amount: Self::Balance,
    ) -> DispatchResult {
        pallet_erc20_assets::Pallet::<T>::do_transfer_from(
            asset.clone(),
            spender.clone(),
            owner.clone(),
            to.clone(),
            amount,
        )
    }

    fn transfer(
        asset: &Self::AssetId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: Self::Balance,
    ) -> DispatchResult {
        pallet_erc20_assets::Pallet::<T>::do_transfer(asset.clone(), from.clone(), to.clone(), amount)
    }
}
