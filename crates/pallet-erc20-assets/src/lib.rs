//! A substrate pallet that keeps multiple fungible assets exposed via the ERC20 interface standard.
//!
//! Every asset has its own balances and its own ERC20-style approvals.

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{
    sp_runtime::{
        traits::{CheckedAdd, CheckedSub},
        DispatchResult,
    },
    storage::with_storage_layer,
    traits::StorageVersion,
    BoundedVec,
};
pub use pallet::*;
use sp_std::prelude::*;

pub mod types;
pub mod weights;


/// The log target of this pallet.
const LOG_TARGET: &str = "runtime::erc20-assets";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

/// Utility alias for easy access to the [`frame_system::Config::AccountId`].
type AccountIdOf<T> = <T as frame_system::Config>::AccountId;

/// The bounded string type from a given config.
pub type BoundedStringOf<T> = BoundedVec<u8, <T as Config>::StringLimit>;

/// The asset details from a given config.
pub type AssetDetailsOf<T> =
    types::AssetDetails<AccountIdOf<T>, <T as Config>::Balance, BoundedStringOf<T>>;

// We have to temporarily allow some clippy lints. Later on we'll send patches to substrate to
// fix them at their end.
#[allow(clippy::missing_docs_in_private_items)]
#[frame_support::pallet]
pub mod pallet {
    use frame_support::{pallet_prelude::*, sp_std::fmt::Debug, traits::tokens::Balance};
    use frame_system::pallet_prelude::*;

    use super::*;
    use crate::weights::WeightInfo;

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Configuration trait of this pallet.
    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Overarching event type.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The asset identifier type.
        type AssetId: Member + Parameter + MaybeSerializeDeserialize + Debug + MaxEncodedLen;

        /// The balance of an account.
        type Balance: Balance + MaybeSerializeDeserialize + Debug + MaxEncodedLen;

        /// The maximum length of the asset name and symbol.
        #[pallet::constant]
        type StringLimit: Get<u32>;

        /// The weight informtation provider type.
        type WeightInfo: WeightInfo;
    }

    /// The details of the existing assets.
    #[pallet::storage]
    #[pallet::getter(fn assets)]
    pub type Assets<T: Config> = StorageMap<_, Blake2_128Concat, T::AssetId, AssetDetailsOf<T>>;

    /// The balances.
    /// (Asset => Owner => Amount).
    #[pallet::storage]
    #[pallet::getter(fn balances)]
    pub type Balances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AssetId,
        Blake2_128Concat,
        T::AccountId,
        T::Balance,
        ValueQuery,
    >;

    /// ERC20-style approvals data.
    /// ((Asset, Owner) => Allowed => Amount).
    #[pallet::storage]
    #[pallet::getter(fn approvals)]
    pub type Approvals<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        (T::AssetId, T::AccountId),
        Blake2_128Concat,
        T::AccountId,
        T::Balance,
        ValueQuery,
    >;

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// The assets to create at genesis.
        /// (Asset, Owner, Supply, Name, Symbol, Decimals).
        #[allow(clippy::type_complexity)]
        pub assets: Vec<(T::AssetId, T::AccountId, T::Balance, Vec<u8>, Vec<u8>, u8)>,
    }

    // The build of genesis for the pallet.
    #[pallet::genesis_build]
    impl<T: Config> GenesisBuild<T> for GenesisConfig<T> {
        fn build(&self) {
            for (asset, owner, supply, name, symbol, decimals) in &self.assets {
                if let Err(err) = <Pallet<T>>::do_create(
                    asset.clone(),
                    owner.clone(),
                    *supply,
                    name.clone(),
                    symbol.clone(),
                    *decimals,
                ) {
                    panic!("unable to create the genesis asset {asset:?}: {err:?}");
                }
            }
        }
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// An asset was created.
        Created {
            /// The created asset.
            asset: T::AssetId,
            /// Who created the asset and received the initial supply.
            owner: T::AccountId,
            /// The initial supply.
            supply: T::Balance,
        },
        /// Some amount was transferred.
        Transferred {
            /// The transferred asset.
            asset: T::AssetId,
            /// Who sent the amount.
            from: T::AccountId,
            /// Who received the amount.
            to: T::AccountId,
            /// The transferred amount.
            amount: T::Balance,
        },
        /// An allowance was set.
        Approved {
            /// The asset the allowance is set for.
            asset: T::AssetId,
            /// Who owns the balance.
            owner: T::AccountId,
            /// Who is allowed to spend the balance.
            spender: T::AccountId,
            /// The allowed amount.
            amount: T::Balance,
        },
    }

    /// Possible errors.
    #[pallet::error]
    pub enum Error<T> {
        /// The asset does not exist.
        UnknownAsset,
        /// The asset already exists.
        AssetAlreadyExists,
        /// Transfer amount exceeds balance.
        InsufficientBalance,
        /// Spender can't transfer tokens more than allowed.
        InsufficientAllowance,
        /// The asset name or symbol is too long.
        MetadataTooLong,
        /// The balance has overflowed.
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create a new asset and assign the whole initial supply to the caller.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create())]
        pub fn create(
            origin: OriginFor<T>,
            asset: T::AssetId,
            initial_supply: T::Balance,
            name: Vec<u8>,
            symbol: Vec<u8>,
            decimals: u8,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_create(asset, who, initial_supply, name, symbol, decimals)
        }

        /// Move `amount` of the `asset` from the caller's account to `to`.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(
            origin: OriginFor<T>,
            asset: T::AssetId,
            to: T::AccountId,
            amount: T::Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_transfer(asset, who, to, amount)
        }

        /// Set `amount` as the allowance of `spender` over the caller's `asset`.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            asset: T::AssetId,
            spender: T::AccountId,
            amount: T::Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_approve(asset, who, spender, amount)
        }

        /// Move `amount` of the `asset` from `owner` to `to` using the allowance mechanism.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            asset: T::AssetId,
            owner: T::AccountId,
            to: T::AccountId,
            amount: T::Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_transfer_from(asset, who, owner, to, amount)
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Returns the amount of the `asset` in existence.
    pub fn total_supply(asset: &T::AssetId) -> T::Balance {
        <Assets<T>>::get(asset)
            .map(|details| details.supply)
            .unwrap_or_default()
    }

    /// Returns the amount of the `asset` owned by provided account.
    pub fn balance_of(asset: &T::AssetId, owner: &AccountIdOf<T>) -> T::Balance {
        <Balances<T>>::get(asset, owner)
    }

    /// Returns the remaining amount of the `asset` that spender will be allowed to spend on
    /// behalf of owner. This is zero by default.
    pub fn allowance(
        asset: &T::AssetId,
        owner: &AccountIdOf<T>,
        spender: &AccountIdOf<T>,
    ) -> T::Balance {
        <Approvals<T>>::get((asset.clone(), owner.clone()), spender)
    }

    /// Returns the name of the `asset`.
    pub fn name(asset: &T::AssetId) -> Option<Vec<u8>> {
        <Assets<T>>::get(asset).map(|details| details.name.into_inner())
    }

    /// Returns the symbol of the `asset`.
    pub fn symbol(asset: &T::AssetId) -> Option<Vec<u8>> {
        <Assets<T>>::get(asset).map(|details| details.symbol.into_inner())
    }

    /// Returns the decimals places of the `asset`.
    pub fn decimals(asset: &T::AssetId) -> Option<u8> {
        <Assets<T>>::get(asset).map(|details| details.decimals)
    }

    /// Create a new asset with the whole `initial_supply` assigned to the `owner`.
    pub fn do_create(
        asset: T::AssetId,
        owner: AccountIdOf<T>,
        initial_supply: T::Balance,
        name: Vec<u8>,
        symbol: Vec<u8>,
        decimals: u8,
    ) -> DispatchResult {
        with_storage_layer(move || {
            if <Assets<T>>::contains_key(&asset) {
                return Err(<Error<T>>::AssetAlreadyExists.into());
            }

            let name: BoundedStringOf<T> =
                name.try_into().map_err(|_| <Error<T>>::MetadataTooLong)?;
            let symbol: BoundedStringOf<T> =
                symbol.try_into().map_err(|_| <Error<T>>::MetadataTooLong)?;

            <Assets<T>>::insert(
                &asset,
                types::AssetDetails {
                    owner: owner.clone(),
                    supply: initial_supply,
                    name,
                    symbol,
                    decimals,
                },
            );
            <Balances<T>>::insert(&asset, &owner, initial_supply);

            log::debug!(
                target: LOG_TARGET,
                "created asset {asset:?} with supply {initial_supply:?} owned by {owner:?}"
            );

            Self::deposit_event(Event::Created {
                asset,
                owner,
                supply: initial_supply,
            });

            Ok(())
        })
    }

    /// Sets `amount` as the allowance of `spender` over the `owner`'s `asset`.
    pub fn do_approve(
        asset: T::AssetId,
        owner: AccountIdOf<T>,
        spender: AccountIdOf<T>,
        amount: T::Balance,
    ) -> DispatchResult {
        Self::ensure_asset_exists(&asset)?;

        <Approvals<T>>::insert((asset.clone(), owner.clone()), &spender, amount);

        Self::deposit_event(Event::Approved {
            asset,
            owner,
            spender,
            amount,
        });

        Ok(())
    }

    /// Moves `amount` of the `asset` from the `sender` to the `recipient`.
    pub fn do_transfer(
        asset: T::AssetId,
        sender: AccountIdOf<T>,
        recipient: AccountIdOf<T>,
        amount: T::Balance,
    ) -> DispatchResult {
        with_storage_layer(move || {
            Self::ensure_asset_exists(&asset)?;
            Self::move_balance(asset, sender, recipient, amount)
        })
    }

    /// Moves `amount` of the `asset` from `sender` to `recipient` using the allowance mechanism,
    /// amount is then deducted from the caller's allowance.
    pub fn do_transfer_from(
        asset: T::AssetId,
        caller: AccountIdOf<T>,
        sender: AccountIdOf<T>,
        recipient: AccountIdOf<T>,
        amount: T::Balance,
    ) -> DispatchResult {
        with_storage_layer(move || {
            Self::ensure_asset_exists(&asset)?;

            <Approvals<T>>::try_mutate((asset.clone(), sender.clone()), caller, |entry| {
                // Remove "value" from allowed, exit if underflow.
                let allowed = entry
                    .checked_sub(&amount)
                    .ok_or(<Error<T>>::InsufficientAllowance)?;

                // Update allowed value.
                *entry = allowed;

                Ok::<(), Error<T>>(())
            })?;

            Self::move_balance(asset, sender, recipient, amount)
        })
    }

    /// Fail with [`Error::UnknownAsset`] if the `asset` does not exist.
    fn ensure_asset_exists(asset: &T::AssetId) -> DispatchResult {
        if !<Assets<T>>::contains_key(asset) {
            return Err(<Error<T>>::UnknownAsset.into());
        }
        Ok(())
    }

    /// Move the balance between the accounts and emit the [`Event::Transferred`] event.
    ///
    /// Must be called within a storage layer.
    fn move_balance(
        asset: T::AssetId,
        sender: AccountIdOf<T>,
        recipient: AccountIdOf<T>,
        amount: T::Balance,
    ) -> DispatchResult {
        <Balances<T>>::try_mutate(&asset, &sender, |balance| {
            *balance = balance
                .checked_sub(&amount)
                .ok_or(<Error<T>>::InsufficientBalance)?;
            Ok::<(), Error<T>>(())
        })?;

        <Balances<T>>::try_mutate(&asset, &recipient, |balance| {
            *balance = balance
                .checked_add(&amount)
                .ok_or(<Error<T>>::Overflow)?;
            Ok::<(), Error<T>>(())
        })?;

        Self::deposit_event(Event::Transferred {
            asset,
            from: sender,
            to: recipient,
            amount,
        });

        Ok(())
    }
}
