//! Token lock.
//!
//! Holds fungible assets in custody on behalf of a beneficiary until a given moment.
//! The locker pre-authorizes the custody account at the asset ledger, the pallet then pulls
//! the funds in at lock time and pushes them out to the beneficiary on release.

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::traits::{StorageVersion, Time};

pub use self::pallet::*;

pub mod api;
#[cfg(feature = "runtime-benchmarks")]
pub mod benchmarking;
pub mod traits;
pub mod types;
pub mod weights;

#[cfg(test)]
mod mock;

/// The log target of this pallet.
const LOG_TARGET: &str = "runtime::token-lock";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

/// The Account ID from a given config.
type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
/// The moment from a given config.
pub type MomentOf<T> = <<T as Config>::Time as Time>::Moment;
/// The lock info from a given config.
pub type LockInfoOf<T> = types::LockInfo<AccountIdOf<T>, <T as Config>::Balance, MomentOf<T>>;

// We have to temporarily allow some clippy lints. Later on we'll send patches to substrate to
// fix them at their end.
#[allow(clippy::missing_docs_in_private_items)]
#[frame_support::pallet]
pub mod pallet {
    use frame_support::{
        pallet_prelude::*,
        sp_runtime::traits::{AccountIdConversion, AtLeast32BitUnsigned, Zero},
        storage::with_storage_layer,
        PalletId,
    };
    use frame_system::pallet_prelude::*;

    use super::*;
    use crate::{traits::AssetLedger, weights::WeightInfo};

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Overarching event type.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The identifier of an asset at the asset ledger.
        type AssetId: Member + Parameter + MaxEncodedLen + MaybeSerializeDeserialize;

        /// The balance of an asset.
        type Balance: Member
            + Parameter
            + MaxEncodedLen
            + MaybeSerializeDeserialize
            + AtLeast32BitUnsigned
            + Copy;

        /// Interface into the asset ledger implementation.
        type AssetLedger: AssetLedger<
            Self::AccountId,
            AssetId = Self::AssetId,
            Balance = Self::Balance,
        >;

        /// A type representing the time moment and providing the current time.
        type Time: Time;

        /// The pallet id, used for deriving the custody account ID.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// The weight informtation provider type.
        type WeightInfo: WeightInfo;
    }

    #[pallet::extra_constants]
    impl<T: Config> Pallet<T> {
        /// The account ID holding the locked funds in custody.
        ///
        /// This actually performs computation.
        /// If you need to keep using it, then make sure you cache the value and
        /// only call this once.
        pub fn custody_account_id() -> T::AccountId {
            T::PalletId::get().into_account_truncating()
        }
    }

    /// The active locks.
    /// (Asset => Beneficiary => Lock).
    #[pallet::storage]
    #[pallet::getter(fn locks)]
    pub type Locks<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AssetId,
        Blake2_128Concat,
        T::AccountId,
        LockInfoOf<T>,
        OptionQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens were locked.
        TokensLocked {
            /// The locked asset.
            asset: T::AssetId,
            /// Who is going to receive the tokens.
            beneficiary: T::AccountId,
            /// Who locked the tokens.
            locker: T::AccountId,
            /// The amount that was locked.
            amount: T::Balance,
            /// The moment starting from which the tokens can be released.
            release_time: MomentOf<T>,
        },
        /// Locked tokens were released to the beneficiary.
        TokensReleased {
            /// The released asset.
            asset: T::AssetId,
            /// Who received the tokens.
            beneficiary: T::AccountId,
            /// The amount that was released.
            amount: T::Balance,
            /// Whether the release was performed early by the locker.
            early: bool,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// A lock is already engaged for a given asset and beneficiary.
        DuplicateLock,

        /// No lock is engaged for a given asset and beneficiary.
        LockNotFound,

        /// Tokens are still locked.
        StillLocked,

        /// Only the locker can perform early release.
        Unauthorized,

        /// Locking zero amount is prohibited.
        LockingZeroAmount,

        /// The release time must be in the future.
        ReleaseTimeNotInFuture,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Lock the tokens for a given beneficiary until a given moment.
        ///
        /// The caller must have approved the custody account to spend at least `amount`
        /// of the `asset` beforehand.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::lock_tokens())]
        pub fn lock_tokens(
            origin: OriginFor<T>,
            asset: T::AssetId,
            beneficiary: T::AccountId,
            amount: T::Balance,
            release_time: MomentOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_lock_tokens(who, asset, beneficiary, amount, release_time)
        }

        /// Release the locked tokens to the beneficiary once the release time has come.
        ///
        /// Can be called by anyone.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::release_tokens())]
        pub fn release_tokens(
            origin: OriginFor<T>,
            asset: T::AssetId,
            beneficiary: T::AccountId,
        ) -> DispatchResult {
            ensure_signed(origin)?;
            Self::do_release_tokens(asset, beneficiary)
        }

        /// Release the locked tokens to the beneficiary regardless of the release time.
        ///
        /// Can only be called by the locker.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::early_release())]
        pub fn early_release(
            origin: OriginFor<T>,
            asset: T::AssetId,
            beneficiary: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_early_release(who, asset, beneficiary)
        }
    }

    impl<T: Config> Pallet<T> {
        /// Get the lock engaged for a given asset and beneficiary, if any.
        pub fn lock_info(asset: &T::AssetId, beneficiary: &T::AccountId) -> Option<LockInfoOf<T>> {
            <Locks<T>>::get(asset, beneficiary)
        }

        /// Lock the `amount` of `asset` taken from the `locker` until the `release_time`.
        pub fn do_lock_tokens(
            locker: T::AccountId,
            asset: T::AssetId,
            beneficiary: T::AccountId,
            amount: T::Balance,
            release_time: MomentOf<T>,
        ) -> DispatchResult {
            with_storage_layer(move || {
                if amount.is_zero() {
                    return Err(<Error<T>>::LockingZeroAmount.into());
                }

                if release_time <= T::Time::now() {
                    return Err(<Error<T>>::ReleaseTimeNotInFuture.into());
                }

                if <Locks<T>>::contains_key(&asset, &beneficiary) {
                    return Err(<Error<T>>::DuplicateLock.into());
                }

                // Pull the funds into custody.
                let custody = Self::custody_account_id();
                T::AssetLedger::transfer_from(&asset, &custody, &locker, &custody, amount)?;

                <Locks<T>>::insert(
                    &asset,
                    &beneficiary,
                    types::LockInfo {
                        amount,
                        release_time,
                        locker: locker.clone(),
                    },
                );

                log::debug!(
                    target: LOG_TARGET,
                    "locked {amount:?} of {asset:?} for {beneficiary:?} until {release_time:?}"
                );

                Self::deposit_event(Event::TokensLocked {
                    asset,
                    beneficiary,
                    locker,
                    amount,
                    release_time,
                });

                Ok(())
            })
        }

        /// Release the lock engaged for a given asset and beneficiary if the release time
        /// has come.
        pub fn do_release_tokens(asset: T::AssetId, beneficiary: T::AccountId) -> DispatchResult {
            with_storage_layer(move || {
                let lock_info =
                    <Locks<T>>::get(&asset, &beneficiary).ok_or(<Error<T>>::LockNotFound)?;

                if T::Time::now() < lock_info.release_time {
                    return Err(<Error<T>>::StillLocked.into());
                }

                Self::release(asset, beneficiary, lock_info, false)
            })
        }

        /// Release the lock engaged for a given asset and beneficiary on behalf of the locker,
        /// disregarding the release time.
        pub fn do_early_release(
            who: T::AccountId,
            asset: T::AssetId,
            beneficiary: T::AccountId,
        ) -> DispatchResult {
            with_storage_layer(move || {
                let lock_info =
                    <Locks<T>>::get(&asset, &beneficiary).ok_or(<Error<T>>::LockNotFound)?;

                if lock_info.locker != who {
                    return Err(<Error<T>>::Unauthorized.into());
                }

                Self::release(asset, beneficiary, lock_info, true)
            })
        }

        /// Remove the lock and send the funds from custody to the beneficiary.
        ///
        /// Must be called within a storage layer: the lock removal is only valid together
        /// with the successful transfer.
        fn release(
            asset: T::AssetId,
            beneficiary: T::AccountId,
            lock_info: LockInfoOf<T>,
            early: bool,
        ) -> DispatchResult {
            <Locks<T>>::remove(&asset, &beneficiary);

            T::AssetLedger::transfer(
                &asset,
                &Self::custody_account_id(),
                &beneficiary,
                lock_info.amount,
            )?;

            log::debug!(
                target: LOG_TARGET,
                "released {:?} of {asset:?} to {beneficiary:?} (early: {early})",
                lock_info.amount
            );

            Self::deposit_event(Event::TokensReleased {
                asset,
                beneficiary,
                amount: lock_info.amount,
                early,
            });

            Ok(())
        }
    }
}
