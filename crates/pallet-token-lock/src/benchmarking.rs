//! The benchmarks for the pallet.

use frame_benchmarking::benchmarks;
use frame_support::sp_runtime::traits::Zero;
use frame_system::RawOrigin;

use crate::{traits::AssetLedger, types::LockInfo, *};

/// The benchmark interface into the environment.
pub trait Interface: super::Config {
    /// Obtain the asset to lock.
    fn asset_id() -> <Self as Config>::AssetId;

    /// Obtain an Account ID of the locker.
    fn locker() -> <Self as frame_system::Config>::AccountId;

    /// Obtain an Account ID of the beneficiary.
    fn beneficiary() -> <Self as frame_system::Config>::AccountId;

    /// Obtain the amount to lock.
    fn amount() -> <Self as Config>::Balance;

    /// Obtain the release time that is in the future.
    fn release_time() -> MomentOf<Self>;

    /// Make sure the given account holds at least `amount` of the `asset`.
    fn fund(
        asset: &<Self as Config>::AssetId,
        who: &<Self as frame_system::Config>::AccountId,
        amount: <Self as Config>::Balance,
    );
}

benchmarks! {
    where_clause {
        where
            T: Interface
    }

    lock_tokens {
        let asset = <T as Interface>::asset_id();
        let locker = <T as Interface>::locker();
        let beneficiary = <T as Interface>::beneficiary();
        let amount = <T as Interface>::amount();
        let release_time = <T as Interface>::release_time();
        let custody = <Pallet<T>>::custody_account_id();

        #[cfg(test)]
        let test_data = {
            use crate::mock;

            let mock_runtime_guard = mock::runtime_lock();

            let approve_ctx = mock::MockAssetLedger::approve_context();
            approve_ctx.expect().once().return_const(Ok(()));
            let transfer_from_ctx = mock::MockAssetLedger::transfer_from_context();
            transfer_from_ctx.expect().once().return_const(Ok(()));
            let now_ctx = mock::MockTime::now_context();
            now_ctx.expect().once().return_const(mock::NOW);

            (mock_runtime_guard, approve_ctx, transfer_from_ctx, now_ctx)
        };

        <T as Interface>::fund(&asset, &locker, amount);
        T::AssetLedger::approve(&asset, &locker, &custody, amount)?;

        let origin = RawOrigin::Signed(locker.clone());

    }: _(origin, asset.clone(), beneficiary.clone(), amount, release_time)
    verify {
        assert_eq!(
            <Locks<T>>::get(&asset, &beneficiary),
            Some(LockInfo { amount, release_time, locker })
        );

        #[cfg(test)]
        {
            let (mock_runtime_guard, approve_ctx, transfer_from_ctx, now_ctx) = test_data;

            approve_ctx.checkpoint();
            transfer_from_ctx.checkpoint();
            now_ctx.checkpoint();

            drop(mock_runtime_guard);
        }
    }

    release_tokens {
        let asset = <T as Interface>::asset_id();
        let locker = <T as Interface>::locker();
        let beneficiary = <T as Interface>::beneficiary();
        let amount = <T as Interface>::amount();
        let custody = <Pallet<T>>::custody_account_id();

        #[cfg(test)]
        let test_data = {
            use crate::mock;

            let mock_runtime_guard = mock::runtime_lock();

            let transfer_ctx = mock::MockAssetLedger::transfer_context();
            transfer_ctx.expect().once().return_const(Ok(()));
            let now_ctx = mock::MockTime::now_context();
            now_ctx.expect().once().return_const(mock::NOW);

            (mock_runtime_guard, transfer_ctx, now_ctx)
        };

        <T as Interface>::fund(&asset, &custody, amount);
        <Locks<T>>::insert(
            &asset,
            &beneficiary,
            LockInfo { amount, release_time: Zero::zero(), locker },
        );

        let origin = RawOrigin::Signed(beneficiary.clone());

    }: _(origin, asset.clone(), beneficiary.clone())
    verify {
        assert_eq!(<Locks<T>>::get(&asset, &beneficiary), None);

        #[cfg(test)]
        {
            let (mock_runtime_guard, transfer_ctx, now_ctx) = test_data;

            transfer_ctx.checkpoint();
            now_ctx.checkpoint();

            drop(mock_runtime_guard);
        }
    }

    early_release {
        let asset = <T as Interface>::asset_id();
        let locker = <T as Interface>::locker();
        let beneficiary = <T as Interface>::beneficiary();
        let amount = <T as Interface>::amount();
        let release_time = <T as Interface>::release_time();
        let custody = <Pallet<T>>::custody_account_id();

        #[cfg(test)]
        let test_data = {
            use crate::mock;

            let mock_runtime_guard = mock::runtime_lock();

            let transfer_ctx = mock::MockAssetLedger::transfer_context();
            transfer_ctx.expect().once().return_const(Ok(()));

            (mock_runtime_guard, transfer_ctx)
        };

        <T as Interface>::fund(&asset, &custody, amount);
        <Locks<T>>::insert(
            &asset,
            &beneficiary,
            LockInfo { amount, release_time, locker: locker.clone() },
        );

        let origin = RawOrigin::Signed(locker);

    }: _(origin, asset.clone(), beneficiary.clone())
    verify {
        assert_eq!(<Locks<T>>::get(&asset, &beneficiary), None);

        #[cfg(test)]
        {
            let (mock_runtime_guard, transfer_ctx) = test_data;

            transfer_ctx.checkpoint();

            drop(mock_runtime_guard);
        }
    }

    impl_benchmark_test_suite!(
        Pallet,
        crate::mock::new_test_ext(),
        crate::mock::Test,
    );
}

#[cfg(test)]
impl Interface for crate::mock::Test {
    fn asset_id() -> <Self as Config>::AssetId {
        mock::ASSET
    }

    fn locker() -> <Self as frame_system::Config>::AccountId {
        mock::LOCKER
    }

    fn beneficiary() -> <Self as frame_system::Config>::AccountId {
        mock::BENEFICIARY
    }

    fn amount() -> <Self as Config>::Balance {
        100
    }

    fn release_time() -> MomentOf<Self> {
        mock::NOW + mock::HOUR
    }

    fn fund(
        _asset: &<Self as Config>::AssetId,
        _who: &<Self as frame_system::Config>::AccountId,
        _amount: <Self as Config>::Balance,
    ) {
        // The asset ledger is mocked, so there is nothing to fund.
    }
}
